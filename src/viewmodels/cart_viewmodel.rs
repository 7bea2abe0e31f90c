// ============================================================================
// CART VIEWMODEL - Mutaciones del carrito + validación contra backend
// ============================================================================

use crate::models::product::Product;
use crate::services::ApiClient;
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use wasm_bindgen_futures::spawn_local;

/// ViewModel del carrito. Las mutaciones actualizan el DOM de forma
/// incremental (badge del header, o badge + líneas en la vista Cart).
pub struct CartViewModel {
    api_client: ApiClient,
}

impl CartViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Añadir un producto al carrito. La validación contra el backend es
    /// best-effort y no bloquea la UI (el carrito es del cliente).
    pub fn add_to_cart(&self, state: &AppState, product: &Product, size: Option<String>) {
        state.cart.add_product(product, size);
        log::info!("🛒 Añadido al carrito: {}", product.name);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::CartBadge));

        let api = self.api_client.clone();
        let product_id = product.id;
        spawn_local(async move {
            match api.validate_cart_item(product_id, 1).await {
                Ok(resp) if resp.success => {}
                Ok(_) => log::warn!("⚠️ El backend no validó el producto {}", product_id),
                Err(e) => log::warn!("⚠️ Validación de carrito falló: {}", e),
            }
        });
    }

    /// +1 unidad en una línea (vista Cart)
    pub fn increment(&self, state: &AppState, product_id: i64, size: Option<&str>) {
        state.cart.adjust_quantity(product_id, size, 1);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::CartList));
    }

    /// -1 unidad en una línea; en 0 la línea desaparece
    pub fn decrement(&self, state: &AppState, product_id: i64, size: Option<&str>) {
        state.cart.adjust_quantity(product_id, size, -1);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::CartList));
    }

    /// Eliminar una línea completa
    pub fn remove(&self, state: &AppState, product_id: i64, size: Option<&str>) {
        state.cart.remove(product_id, size);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::CartList));
    }
}

impl Default for CartViewModel {
    fn default() -> Self {
        Self::new()
    }
}
