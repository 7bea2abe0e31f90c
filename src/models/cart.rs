use crate::models::product::Product;
use serde::{Deserialize, Serialize};

/// Versión del snapshot persistido; al cambiar la estructura se invalida el cache
pub const CART_SNAPSHOT_VERSION: u32 = 1;

/// Línea del carrito. El carrito vive en el cliente: el backend solo valida.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CartItem {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    pub fn from_product(product: &Product, size: Option<String>) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            size,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Misma línea = mismo producto + misma talla
    pub fn matches(&self, product_id: i64, size: Option<&str>) -> bool {
        self.product_id == product_id && self.size.as_deref() == size
    }
}

/// Snapshot versionado del carrito para localStorage
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub version: u32,
}

impl CartSnapshot {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self {
            items,
            version: CART_SNAPSHOT_VERSION,
        }
    }

    pub fn is_current(&self) -> bool {
        self.version == CART_SNAPSHOT_VERSION
    }
}

// ----------------------------------------------------------------------------
// Aritmética pura del carrito (la usa CartState; testeable sin navegador)
// ----------------------------------------------------------------------------

/// Añadir una línea: si ya existe producto+talla, incrementa la cantidad
pub fn merge_item(items: &mut Vec<CartItem>, item: CartItem) {
    if let Some(existing) = items
        .iter_mut()
        .find(|i| i.matches(item.product_id, item.size.as_deref()))
    {
        existing.quantity += item.quantity;
    } else {
        items.push(item);
    }
}

/// Ajustar la cantidad de una línea; al llegar a 0 la línea se elimina
pub fn adjust_quantity(items: &mut Vec<CartItem>, product_id: i64, size: Option<&str>, delta: i32) {
    if let Some(pos) = items.iter().position(|i| i.matches(product_id, size)) {
        let current = items[pos].quantity as i64;
        let next = current + i64::from(delta);
        if next <= 0 {
            items.remove(pos);
        } else {
            items[pos].quantity = next as u32;
        }
    }
}

/// Eliminar una línea completa
pub fn remove_item(items: &mut Vec<CartItem>, product_id: i64, size: Option<&str>) {
    items.retain(|i| !i.matches(product_id, size));
}

/// Total del carrito
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Número total de unidades (para el badge del header)
pub fn cart_count(items: &[CartItem]) -> u32 {
    items.iter().map(|i| i.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: i64, size: Option<&str>, price: f64, quantity: u32) -> CartItem {
        CartItem {
            product_id,
            name: format!("Producto {}", product_id),
            price,
            image_url: None,
            size: size.map(String::from),
            quantity,
        }
    }

    #[test]
    fn merge_incrementa_la_misma_linea() {
        let mut items = vec![item(1, Some("M"), 100.0, 1)];
        merge_item(&mut items, item(1, Some("M"), 100.0, 1));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn tallas_distintas_son_lineas_distintas() {
        let mut items = vec![item(1, Some("M"), 100.0, 1)];
        merge_item(&mut items, item(1, Some("L"), 100.0, 1));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn ajustar_a_cero_elimina_la_linea() {
        let mut items = vec![item(1, None, 100.0, 1)];
        adjust_quantity(&mut items, 1, None, -1);
        assert!(items.is_empty());
    }

    #[test]
    fn total_y_conteo() {
        let items = vec![item(1, None, 2499.0, 2), item(2, Some("S"), 799.0, 1)];
        assert_eq!(cart_total(&items), 2499.0 * 2.0 + 799.0);
        assert_eq!(cart_count(&items), 3);
    }

    #[test]
    fn snapshot_con_version_antigua_no_es_valido() {
        let mut snapshot = CartSnapshot::new(vec![]);
        assert!(snapshot.is_current());
        snapshot.version = 0;
        assert!(!snapshot.is_current());
    }

    #[test]
    fn snapshot_sin_version_deserializa_como_invalido() {
        // Carritos guardados antes del versionado: {"items": []}
        let snapshot: CartSnapshot = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(!snapshot.is_current());
    }
}
