// ============================================================================
// BROWSER HISTORY - Integración con la History API
// ============================================================================
// Única frontera del router con el navegador: leer el pathname actual,
// empujar/reemplazar entradas sin recargar, y escuchar back/forward.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Path actual de la barra de direcciones (`/` si no hay window)
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Empujar una nueva entrada al history sin recargar la página
pub fn push(path: &str) -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    win.history()?
        .push_state_with_url(&JsValue::NULL, "", Some(path))
}

/// Reemplazar la entrada actual (arranque en frío con path sin match)
pub fn replace(path: &str) -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    win.history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
}

/// Registrar el listener de popstate (back/forward del navegador).
/// Solo debe llamarse UNA VEZ, al construir la app.
pub fn on_popstate<F>(handler: F) -> Result<(), JsValue>
where
    F: Fn() + 'static,
{
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
        handler();
    }) as Box<dyn FnMut(web_sys::PopStateEvent)>);
    win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    // Listener global registrado una sola vez: forget() es seguro
    closure.forget();
    Ok(())
}
