// ============================================================================
// APP - Composición: estado + router + punto de montaje
// ============================================================================
// Contrato de arranque: crear estado, registrar el router, montar en #app
// y renderizar la ruta resuelta desde la barra de direcciones.
// ============================================================================

use crate::dom::{append_child, get_element_by_id, set_inner_html, update_cart_badge, update_cart_lines};
use crate::router::Router;
use crate::routes::route_table;
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::views::render_app;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Aplicación principal
pub struct App {
    state: AppState,
    router: Rc<Router>,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Restaurar carrito desde storage si existe
        state.cart.restore();

        // Registrar tabla de rutas. Un nombre duplicado aborta el arranque.
        let router = Router::register(&route_table())
            .map_err(|e| JsValue::from_str(&format!("Tabla de rutas inválida: {}", e)))?;
        let router = Rc::new(router);

        // Ruta inicial desde la barra de direcciones (arranque en frío)
        router.sync_with_location();

        // Back/forward del navegador. Listener global, solo una vez.
        Router::attach_popstate(&router)?;

        // Re-render batcheado: las notificaciones se difieren con un
        // Timeout(0) para agrupar múltiples updates del mismo tick.
        router.subscribe(|| {
            Timeout::new(0, || crate::rerender_app()).forget();
        });
        state.subscribe_to_changes(|| {
            Timeout::new(0, || crate::rerender_app()).forget();
        });

        Ok(Self { state, router, root })
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        let nav = self
            .router
            .current()
            .ok_or_else(|| JsValue::from_str("Router sin ruta activa"))?;

        // Limpiar contenido anterior
        set_inner_html(&self.root, "");

        let app_view = render_app(&self.state, &nav)?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::CartBadge => update_cart_badge(&self.state),
            IncrementalUpdate::CartList => update_cart_lines(&self.state),
        }
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Obtener referencia al router
    pub fn router(&self) -> &Rc<Router> {
        &self.router
    }
}
