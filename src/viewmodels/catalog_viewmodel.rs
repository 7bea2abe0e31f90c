// ============================================================================
// CATALOG VIEWMODEL - Carga de catálogo, categorías y detalle de producto
// ============================================================================

use crate::models::product::ProductFilter;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use wasm_bindgen_futures::spawn_local;

/// ViewModel de catálogo - SOLO lógica de negocio
pub struct CatalogViewModel {
    api_client: ApiClient,
}

impl CatalogViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Cargar catálogo + categorías si hace falta. Lo llaman Home y Shop al
    /// renderizar; con el catálogo ya cargado (o un error pendiente) no hace
    /// nada, así el render no entra en bucle.
    pub fn ensure_catalog(&self, state: &AppState) {
        if state.catalog.is_loaded()
            || state.catalog.is_loading()
            || state.catalog.get_error().is_some()
        {
            return;
        }

        state.catalog.set_loading(true);
        let state = state.clone();
        let api = self.api_client.clone();

        spawn_local(async move {
            // Las categorías solo cambian con el catálogo del backend: una vez
            if state.catalog.get_categories().is_empty() {
                match api.get_categories().await {
                    Ok(categories) => state.catalog.set_categories(categories),
                    Err(e) => log::warn!("⚠️ Error cargando categorías: {}", e),
                }
            }

            let filter = state.catalog.get_filter();
            match api.get_products(&filter).await {
                Ok(products) => {
                    log::info!("✅ Catálogo cargado: {} productos", products.len());
                    state.catalog.set_products(products);
                }
                Err(e) => {
                    log::error!("❌ Error cargando catálogo: {}", e);
                    state.catalog.set_error(Some(e));
                }
            }

            state.catalog.set_loading(false);
            crate::rerender_app();
        });
    }

    /// Aplicar un filtro nuevo y recargar el catálogo
    pub fn apply_filter(&self, state: &AppState, filter: ProductFilter) {
        state.catalog.set_filter(filter);
        state.catalog.set_error(None);
        self.ensure_catalog(state);
        // Render inmediato para mostrar el estado de carga
        crate::rerender_app();
    }

    /// Reintentar tras un error de carga
    pub fn retry(&self, state: &AppState) {
        state.catalog.set_error(None);
        self.ensure_catalog(state);
        crate::rerender_app();
    }

    /// Resolver el producto de la vista de detalle. Usa el catálogo ya
    /// cargado como cache y solo va al backend si el producto no está.
    pub fn ensure_product_detail(&self, state: &AppState, raw_id: &str) {
        let id: i64 = match raw_id.parse() {
            Ok(id) => id,
            Err(_) => {
                *state.catalog.detail_id.borrow_mut() = None;
                state.catalog.set_detail(None);
                *state.catalog.detail_error.borrow_mut() =
                    Some(format!("Identificador de producto inválido: {}", raw_id));
                return;
            }
        };

        // Ya solicitado (cargando, cargado o con error): nada que hacer
        if *state.catalog.detail_id.borrow() == Some(id) {
            return;
        }

        *state.catalog.detail_id.borrow_mut() = Some(id);
        state.catalog.set_detail(None);
        *state.catalog.detail_error.borrow_mut() = None;

        if let Some(product) = state.catalog.find_product(id) {
            state.catalog.set_detail(Some(product));
            return;
        }

        *state.catalog.detail_loading.borrow_mut() = true;
        let state = state.clone();
        let api = self.api_client.clone();

        spawn_local(async move {
            match api.get_product(&id.to_string()).await {
                Ok(product) => {
                    log::info!("✅ Producto cargado: {}", product.name);
                    state.catalog.set_detail(Some(product));
                }
                Err(e) => {
                    log::error!("❌ Error cargando producto {}: {}", id, e);
                    *state.catalog.detail_error.borrow_mut() = Some(e);
                }
            }
            *state.catalog.detail_loading.borrow_mut() = false;
            crate::rerender_app();
        });
    }
}

impl Default for CatalogViewModel {
    fn default() -> Self {
        Self::new()
    }
}
