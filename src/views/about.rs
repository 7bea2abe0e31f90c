// ============================================================================
// ABOUT VIEW - Página estática
// ============================================================================

use crate::dom::{append_child, ElementBuilder};
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub fn render_about() -> Result<Element, JsValue> {
    let view = ElementBuilder::new("div")?.class("about-view").build();

    let heading = ElementBuilder::new("h1")?.text("Nosotros").build();
    append_child(&view, &heading)?;

    let story = ElementBuilder::new("p")?
        .text(
            "Tribal Tides nació en un taller junto al mar: empezamos grabando \
             motivos tribales en madera y hoy diseñamos ropa, joyería artesanal \
             y tatuajes con la misma idea de siempre, que cada pieza cuente \
             una historia.",
        )
        .build();
    append_child(&view, &story)?;

    let studio = ElementBuilder::new("p")?
        .text(
            "El estudio de tatuaje funciona dentro de la propia tienda. \
             Trabajamos con cita previa y cada diseño se dibuja a mano \
             para la persona que lo lleva.",
        )
        .build();
    append_child(&view, &studio)?;

    Ok(view)
}
