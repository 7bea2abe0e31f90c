use crate::models::cart::{cart_total, CartItem};
use serde::{Deserialize, Serialize};

/// Línea de pedido (wire format de POST /api/orders)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub address: String,
    pub total_price: f64,
    pub items: Vec<OrderItemRequest>,
}

impl CreateOrderRequest {
    /// Construir el pedido desde el carrito actual
    pub fn from_cart(
        customer_name: String,
        customer_email: String,
        address: String,
        items: &[CartItem],
    ) -> Self {
        Self {
            customer_name,
            customer_email,
            address,
            total_price: cart_total(items),
            items: items
                .iter()
                .map(|i| OrderItemRequest {
                    product_id: i.product_id,
                    quantity: i.quantity,
                })
                .collect(),
        }
    }

    /// Validación mínima del formulario de checkout
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("El nombre es obligatorio".to_string());
        }
        if !self.customer_email.contains('@') || self.customer_email.trim().len() < 3 {
            return Err("Email inválido".to_string());
        }
        if self.address.trim().is_empty() {
            return Err("La dirección de envío es obligatoria".to_string());
        }
        if self.items.is_empty() {
            return Err("El carrito está vacío".to_string());
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateOrderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request de validación de línea de carrito (POST /api/cart)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CartValidationRequest {
    pub product_id: i64,
    pub quantity: u32,
}

/// El backend confirma que el producto existe y devuelve sus datos vigentes
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CartValidationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub product: Option<CartProductSummary>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CartProductSummary {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cart::CartItem;

    fn cart() -> Vec<CartItem> {
        vec![CartItem {
            product_id: 3,
            name: "Maxi Dress".to_string(),
            price: 2899.0,
            image_url: None,
            size: Some("M".to_string()),
            quantity: 2,
        }]
    }

    #[test]
    fn construye_el_pedido_desde_el_carrito() {
        let req = CreateOrderRequest::from_cart(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "Calle 1".to_string(),
            &cart(),
        );
        assert_eq!(req.total_price, 5798.0);
        assert_eq!(req.items, vec![OrderItemRequest { product_id: 3, quantity: 2 }]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rechaza_email_invalido() {
        let mut req = CreateOrderRequest::from_cart(
            "Ana".to_string(),
            "sin-arroba".to_string(),
            "Calle 1".to_string(),
            &cart(),
        );
        assert!(req.validate().is_err());
        req.customer_email = "ana@example.com".to_string();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rechaza_carrito_vacio() {
        let req = CreateOrderRequest::from_cart(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "Calle 1".to_string(),
            &[],
        );
        assert!(req.validate().is_err());
    }

    #[test]
    fn deserializa_respuesta_de_error_del_backend() {
        let resp: CreateOrderResponse =
            serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("boom"));
    }
}
