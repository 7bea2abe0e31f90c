// ============================================================================
// BOOK TATTOO VIEW - Formulario de reserva del estudio
// ============================================================================

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::models::booking::BookingRequest;
use crate::state::app_state::AppState;
use crate::viewmodels::BookingViewModel;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};

/// Estilos que ofrece el estudio
const STYLES: [&str; 5] = ["Tribal", "Polinesio", "Fine Line", "Old School", "Realismo"];

pub fn render_book_tattoo(state: &AppState) -> Result<Element, JsValue> {
    let view = ElementBuilder::new("div")?.class("booking-view").build();

    let heading = ElementBuilder::new("h1")?.text("Reserva tu tatuaje").build();
    append_child(&view, &heading)?;

    let intro = ElementBuilder::new("p")?
        .class("booking-intro")
        .text("Cuéntanos cuándo quieres venir y qué estilo buscas. Confirmamos por email.")
        .build();
    append_child(&view, &intro)?;

    let form = ElementBuilder::new("form")?.class("booking-form").build();

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

    let date_el = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "date")?
        .attr("required", "required")?
        .build();
    let date_input: HtmlInputElement = date_el
        .clone()
        .dyn_into()
        .map_err(|_| JsValue::from_str("input inválido"))?;
    append_child(&form, &date_el)?;

    let time_el = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "time")?
        .attr("required", "required")?
        .build();
    let time_input: HtmlInputElement = time_el
        .clone()
        .dyn_into()
        .map_err(|_| JsValue::from_str("input inválido"))?;
    append_child(&form, &time_el)?;

    let style_el = ElementBuilder::new("select")?.class("form-input").build();
    for style in STYLES {
        let option = ElementBuilder::new("option")?
            .attr("value", style)?
            .text(style)
            .build();
        append_child(&style_el, &option)?;
    }
    let style_select: HtmlSelectElement = style_el
        .clone()
        .dyn_into()
        .map_err(|_| JsValue::from_str("select inválido"))?;
    append_child(&form, &style_el)?;

    let submitting = *state.booking_submitting.borrow();
    let mut submit_builder = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text(if submitting { "Enviando..." } else { "Reservar cita" });
    if submitting {
        submit_builder = submit_builder.attr("disabled", "disabled")?;
    }
    append_child(&form, &submit_builder.build())?;

    {
        let state = state.clone();
        on_submit(&form, move |_e: Event| {
            let request = BookingRequest {
                name: name_input.value(),
                date: date_input.value(),
                time: time_input.value(),
                style: style_select.value(),
            };
            BookingViewModel::new().submit_booking(&state, request);
        })?;
    }

    append_child(&view, &form)?;
    Ok(view)
}
