// ============================================================================
// STOREFRONT PWA - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación API / storage
// - State: State Management con Rc<RefCell>
// - Router: tabla de rutas declarativa + History API
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod router;
mod routes;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use crate::app::App;
use crate::router::ParamMap;
use crate::state::app_state::UpdateType;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🛍️ Storefront PWA - Rust Puro + MVVM");

    // Crear y renderizar app (la ruta inicial se resuelve desde la barra de direcciones)
    let mut app = App::new()?;
    app.render()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Función pública para re-renderizar la app (re-render completo)
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Función pública para actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        match update_type {
            UpdateType::Incremental(inc_type) => {
                // Primero intentamos actualización incremental
                let needs_full_render = {
                    if let Some(ref app) = *app_cell.borrow() {
                        match app.update_incremental(inc_type) {
                            Ok(()) => false,
                            Err(e) => {
                                // El contenedor no existe en la vista actual: re-render completo
                                log::warn!("⚠️ Actualización incremental falló, re-render completo: {:?}", e);
                                true
                            }
                        }
                    } else {
                        log::warn!("⚠️ App no está inicializada");
                        false
                    }
                };

                // Liberamos el borrow anterior antes del re-render completo
                if needs_full_render {
                    if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
                        let _ = app_mut.render();
                    }
                }
            }
            UpdateType::FullRender => {
                if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
                    if let Err(e) = app_mut.render() {
                        log::error!("❌ Error re-renderizando: {:?}", e);
                    }
                } else {
                    log::warn!("⚠️ App no está inicializada");
                }
            }
        }
    });
}

/// Navegación programática por path (la usan los enlaces internos de las vistas)
pub fn navigate(path: &str) {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            if let Err(e) = app.router().navigate_path(path) {
                log::error!("❌ Error navegando a {}: {}", path, e);
            }
        } else {
            log::warn!("⚠️ App no está inicializada, navegación ignorada: {}", path);
        }
    });
}

/// Navegación programática por nombre de ruta (evita hardcodear paths en las vistas)
pub fn navigate_named(name: &str, params: ParamMap) {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            if let Err(e) = app.router().navigate_named(name, &params) {
                log::error!("❌ Error navegando a ruta `{}`: {}", name, e);
            }
        } else {
            log::warn!("⚠️ App no está inicializada, navegación ignorada: {}", name);
        }
    });
}
