// ============================================================================
// CART STATE - Estado del carrito (cliente), persistido en localStorage
// ============================================================================

use crate::models::cart::{self, CartItem};
use crate::models::product::Product;
use crate::services::OfflineService;
use std::cell::RefCell;
use std::rc::Rc;

/// Estado del carrito. La aritmética vive en `models::cart`; aquí solo
/// se orquesta mutación + persistencia.
#[derive(Clone)]
pub struct CartState {
    items: Rc<RefCell<Vec<CartItem>>>,
}

impl CartState {
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Restaurar el carrito desde storage (arranque en frío)
    pub fn restore(&self) {
        if let Some(items) = OfflineService::new().load_cart() {
            *self.items.borrow_mut() = items;
        }
    }

    /// Añadir un producto (incrementa si ya existe la línea producto+talla)
    pub fn add_product(&self, product: &Product, size: Option<String>) {
        cart::merge_item(
            &mut self.items.borrow_mut(),
            CartItem::from_product(product, size),
        );
        self.persist();
    }

    /// Ajustar cantidad de una línea (+1 / -1); en 0 la línea desaparece
    pub fn adjust_quantity(&self, product_id: i64, size: Option<&str>, delta: i32) {
        cart::adjust_quantity(&mut self.items.borrow_mut(), product_id, size, delta);
        self.persist();
    }

    /// Eliminar una línea completa
    pub fn remove(&self, product_id: i64, size: Option<&str>) {
        cart::remove_item(&mut self.items.borrow_mut(), product_id, size);
        self.persist();
    }

    /// Vaciar el carrito (checkout completado)
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
        if let Err(e) = OfflineService::new().clear_cart() {
            log::error!("❌ Error vaciando carrito persistido: {}", e);
        }
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.items.borrow().clone()
    }

    pub fn total(&self) -> f64 {
        cart::cart_total(&self.items.borrow())
    }

    pub fn count(&self) -> u32 {
        cart::cart_count(&self.items.borrow())
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    fn persist(&self) {
        if let Err(e) = OfflineService::new().save_cart(&self.items.borrow()) {
            log::error!("❌ Error guardando carrito: {}", e);
        }
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
