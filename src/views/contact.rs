// ============================================================================
// CONTACT VIEW - Datos de contacto + formulario simple
// ============================================================================

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::app_state::AppState;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlTextAreaElement};

pub fn render_contact(state: &AppState) -> Result<Element, JsValue> {
    let view = ElementBuilder::new("div")?.class("contact-view").build();

    let heading = ElementBuilder::new("h1")?.text("Contacto").build();
    append_child(&view, &heading)?;

    let details = ElementBuilder::new("ul")?.class("contact-details").build();
    for line in [
        "📍 Paseo del Puerto 12, local 3",
        "📧 hola@tribaltides.example",
        "🕐 Martes a sábado, 10:00–20:00",
    ] {
        let item = ElementBuilder::new("li")?.text(line).build();
        append_child(&details, &item)?;
    }
    append_child(&view, &details)?;

    // Formulario solo de cliente: deja el mensaje en un aviso, sin backend
    let form = ElementBuilder::new("form")?.class("contact-form").build();

    let name_el = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "text")?
        .attr("placeholder", "Tu nombre")?
        .attr("required", "required")?
        .build();
    let name_input: HtmlInputElement = name_el
        .clone()
        .dyn_into()
        .map_err(|_| JsValue::from_str("input inválido"))?;
    append_child(&form, &name_el)?;

    let message_el = ElementBuilder::new("textarea")?
        .class("form-input")
        .attr("placeholder", "¿En qué podemos ayudarte?")?
        .attr("rows", "4")?
        .attr("required", "required")?
        .build();
    let message_input: HtmlTextAreaElement = message_el
        .clone()
        .dyn_into()
        .map_err(|_| JsValue::from_str("textarea inválido"))?;
    append_child(&form, &message_el)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text("Enviar mensaje")
        .build();
    append_child(&form, &submit)?;

    {
        let state = state.clone();
        on_submit(&form, move |_e: Event| {
            if message_input.value().trim().is_empty() {
                state.notify_error("Escribe un mensaje antes de enviar");
                return;
            }
            log::info!("📨 Mensaje de contacto de {}", name_input.value());
            state.notify_success("Mensaje enviado. Te responderemos pronto.");
        })?;
    }

    append_child(&view, &form)?;
    Ok(view)
}
