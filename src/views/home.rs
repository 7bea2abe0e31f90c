// ============================================================================
// HOME VIEW - Hero + productos destacados
// ============================================================================

use crate::config::CONFIG;
use crate::dom::{append_child, on_link_click, ElementBuilder};
use crate::state::app_state::AppState;
use crate::viewmodels::CatalogViewModel;
use crate::views::render_product_card;
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    // Los destacados salen del catálogo; se carga en segundo plano si hace falta
    CatalogViewModel::new().ensure_catalog(state);

    let view = ElementBuilder::new("div")?.class("home-view").build();

    // Hero
    let hero = ElementBuilder::new("section")?.class("hero").build();
    let title = ElementBuilder::new("h1")?
        .text("Tribal Tides")
        .build();
    append_child(&hero, &title)?;

    let tagline = ElementBuilder::new("p")?
        .class("hero-tagline")
        .text("Ropa de inspiración costera, joyería artesanal y un estudio de tatuaje propio.")
        .build();
    append_child(&hero, &tagline)?;

    let actions = ElementBuilder::new("div")?.class("hero-actions").build();

    let shop_btn = ElementBuilder::new("a")?
        .class("btn btn-primary")
        .attr("href", "/shop")?
        .text("Ver la tienda")
        .build();
    on_link_click(&shop_btn, "/shop")?;
    append_child(&actions, &shop_btn)?;

    let book_btn = ElementBuilder::new("a")?
        .class("btn btn-secondary")
        .attr("href", "/book-tattoo")?
        .text("Reserva tu tatuaje")
        .build();
    on_link_click(&book_btn, "/book-tattoo")?;
    append_child(&actions, &book_btn)?;

    append_child(&hero, &actions)?;
    append_child(&view, &hero)?;

    // Destacados
    let featured = ElementBuilder::new("section")?.class("featured").build();
    let heading = ElementBuilder::new("h2")?.text("Destacados").build();
    append_child(&featured, &heading)?;

    if state.catalog.is_loading() {
        let loading = ElementBuilder::new("p")?
            .class("loading")
            .text("Cargando catálogo...")
            .build();
        append_child(&featured, &loading)?;
    } else {
        let grid = ElementBuilder::new("div")?.class("product-grid").build();
        let products = state.catalog.get_products();
        for product in products.iter().take(CONFIG.shop_config.featured_products) {
            append_child(&grid, &render_product_card(product)?)?;
        }
        append_child(&featured, &grid)?;
    }

    append_child(&view, &featured)?;
    Ok(view)
}
