// ============================================================================
// OFFLINE SERVICE - Persistencia del carrito en localStorage
// ============================================================================

use crate::models::cart::{CartItem, CartSnapshot};
use crate::utils::constants::CART_STORAGE_KEY;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

pub struct OfflineService;

impl OfflineService {
    pub fn new() -> Self {
        Self
    }

    /// Guardar el carrito como snapshot versionado
    pub fn save_cart(&self, items: &[CartItem]) -> Result<(), String> {
        let snapshot = CartSnapshot::new(items.to_vec());
        save_to_storage(CART_STORAGE_KEY, &snapshot)?;
        log::info!("💾 Carrito guardado ({} líneas)", snapshot.items.len());
        Ok(())
    }

    /// Cargar el carrito. Un snapshot con versión antigua se descarta.
    pub fn load_cart(&self) -> Option<Vec<CartItem>> {
        let snapshot: CartSnapshot = load_from_storage(CART_STORAGE_KEY)?;
        if !snapshot.is_current() {
            log::warn!("⚠️ Snapshot de carrito con versión antigua, descartando");
            let _ = self.clear_cart();
            return None;
        }
        log::info!("🛒 Carrito restaurado ({} líneas)", snapshot.items.len());
        Some(snapshot.items)
    }

    /// Vaciar el carrito persistido (checkout completado)
    pub fn clear_cart(&self) -> Result<(), String> {
        remove_from_storage(CART_STORAGE_KEY)
    }
}

impl Default for OfflineService {
    fn default() -> Self {
        Self::new()
    }
}
