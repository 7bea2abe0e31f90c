// ============================================================================
// CHECKOUT VIEW - Resumen del pedido + formulario de cliente
// ============================================================================

use crate::dom::{append_child, on_link_click, on_submit, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::format::format_price;
use crate::viewmodels::CheckoutViewModel;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlTextAreaElement};

pub fn render_checkout(state: &AppState) -> Result<Element, JsValue> {
    let view = ElementBuilder::new("div")?.class("checkout-view").build();
    let heading = ElementBuilder::new("h1")?.text("Finalizar compra").build();
    append_child(&view, &heading)?;

    let items = state.cart.items();
    if items.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("cart-empty")
            .text("El carrito está vacío, no hay nada que tramitar.")
            .build();
        append_child(&view, &empty)?;

        let go_shop = ElementBuilder::new("a")?
            .class("btn btn-secondary")
            .attr("href", "/shop")?
            .text("Ir a la tienda")
            .build();
        on_link_click(&go_shop, "/shop")?;
        append_child(&view, &go_shop)?;
        return Ok(view);
    }

    // Resumen del pedido
    let summary = ElementBuilder::new("section")?.class("order-summary").build();
    let summary_heading = ElementBuilder::new("h2")?.text("Tu pedido").build();
    append_child(&summary, &summary_heading)?;

    for item in &items {
        let row = ElementBuilder::new("div")?.class("summary-row").build();
        let mut label = item.name.clone();
        if let Some(size) = &item.size {
            label = format!("{} (talla {})", label, size);
        }
        let name = ElementBuilder::new("span")?
            .text(&format!("{} × {}", label, item.quantity))
            .build();
        append_child(&row, &name)?;
        let amount = ElementBuilder::new("span")?
            .text(&format_price(item.line_total()))
            .build();
        append_child(&row, &amount)?;
        append_child(&summary, &row)?;
    }

    let total_row = ElementBuilder::new("div")?.class("summary-row summary-total").build();
    let total_label = ElementBuilder::new("span")?.text("Total").build();
    append_child(&total_row, &total_label)?;
    let total_amount = ElementBuilder::new("span")?
        .text(&format_price(state.cart.total()))
        .build();
    append_child(&total_row, &total_amount)?;
    append_child(&summary, &total_row)?;
    append_child(&view, &summary)?;

    // Formulario de cliente
    let form = ElementBuilder::new("form")?.class("checkout-form").build();

    let name_el = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "text")?
        .attr("placeholder", "Nombre completo")?
        .attr("required", "required")?
        .build();
    let name_input: HtmlInputElement = name_el
        .clone()
        .dyn_into()
        .map_err(|_| JsValue::from_str("input inválido"))?;
    append_child(&form, &name_el)?;

    let email_el = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "email")?
        .attr("placeholder", "Email")?
        .attr("required", "required")?
        .build();
    let email_input: HtmlInputElement = email_el
        .clone()
        .dyn_into()
        .map_err(|_| JsValue::from_str("input inválido"))?;
    append_child(&form, &email_el)?;

    let address_el = ElementBuilder::new("textarea")?
        .class("form-input")
        .attr("placeholder", "Dirección de envío")?
        .attr("rows", "3")?
        .attr("required", "required")?
        .build();
    let address_input: HtmlTextAreaElement = address_el
        .clone()
        .dyn_into()
        .map_err(|_| JsValue::from_str("textarea inválido"))?;
    append_child(&form, &address_el)?;

    let submitting = *state.checkout_submitting.borrow();
    let mut submit_builder = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text(if submitting { "Enviando pedido..." } else { "Confirmar pedido" });
    if submitting {
        submit_builder = submit_builder.attr("disabled", "disabled")?;
    }
    append_child(&form, &submit_builder.build())?;

    {
        let state = state.clone();
        on_submit(&form, move |_e: Event| {
            CheckoutViewModel::new().submit_order(
                &state,
                name_input.value(),
                email_input.value(),
                address_input.value(),
            );
        })?;
    }

    append_child(&view, &form)?;
    Ok(view)
}
