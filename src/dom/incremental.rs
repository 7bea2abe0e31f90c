// ============================================================================
// INCREMENTAL DOM - Actualizaciones sin re-render completo
// ============================================================================
// Cada helper localiza el nodo por ID y lo actualiza/reemplaza in situ.
// Si el nodo no existe en la vista actual devuelve Err y lib.rs escala
// a re-render completo.
// ============================================================================

use crate::dom::{add_class, get_element_by_id, remove_class, set_text_content};
use crate::state::app_state::AppState;
use wasm_bindgen::prelude::*;

/// Actualizar el contador del carrito en el header
pub fn update_cart_badge(state: &AppState) -> Result<(), JsValue> {
    let badge = get_element_by_id("cart-badge")
        .ok_or_else(|| JsValue::from_str("cart-badge not found"))?;

    let count = state.cart.count();
    set_text_content(&badge, &count.to_string());

    if count == 0 {
        add_class(&badge, "hidden")?;
    } else {
        remove_class(&badge, "hidden")?;
    }
    Ok(())
}

/// Re-renderizar solo las líneas y el resumen del carrito (vista Cart)
pub fn update_cart_lines(state: &AppState) -> Result<(), JsValue> {
    // El badge del header acompaña siempre a la lista
    update_cart_badge(state)?;

    let lines = get_element_by_id("cart-lines")
        .ok_or_else(|| JsValue::from_str("cart-lines not found"))?;
    let fresh_lines = crate::views::cart::render_cart_lines(state)?;
    let parent = lines
        .parent_element()
        .ok_or_else(|| JsValue::from_str("cart-lines sin padre"))?;
    parent.replace_child(&fresh_lines, &lines)?;

    let summary = get_element_by_id("cart-summary")
        .ok_or_else(|| JsValue::from_str("cart-summary not found"))?;
    let fresh_summary = crate::views::cart::render_cart_summary(state)?;
    let parent = summary
        .parent_element()
        .ok_or_else(|| JsValue::from_str("cart-summary sin padre"))?;
    parent.replace_child(&fresh_summary, &summary)?;

    Ok(())
}
