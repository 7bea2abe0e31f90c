// ============================================================================
// HEADER - Marca + navegación + badge del carrito
// ============================================================================

use crate::dom::{append_child, on_link_click, ElementBuilder};
use crate::router::NavigationState;
use crate::state::app_state::AppState;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Enlaces del menú principal (label, path, nombre de ruta)
const NAV_LINKS: [(&str, &str, &str); 5] = [
    ("Inicio", "/", "Home"),
    ("Tienda", "/shop", "Shop"),
    ("Reserva tu tatuaje", "/book-tattoo", "BookTattoo"),
    ("Nosotros", "/about", "About"),
    ("Contacto", "/contact", "Contact"),
];

pub fn render_header(state: &AppState, nav: &NavigationState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("app-header").build();

    // Marca
    let brand = ElementBuilder::new("a")?
        .class("brand")
        .attr("href", "/")?
        .text("Tribal Tides")
        .build();
    on_link_click(&brand, "/")?;
    append_child(&header, &brand)?;

    // Navegación principal
    let menu = ElementBuilder::new("nav")?.class("main-nav").build();
    for (label, path, route_name) in NAV_LINKS {
        let mut link = ElementBuilder::new("a")?
            .class("nav-link")
            .attr("href", path)?
            .text(label);
        if nav.name == route_name {
            link = link.add_class("active")?;
        }
        let link = link.build();
        on_link_click(&link, path)?;
        append_child(&menu, &link)?;
    }
    append_child(&header, &menu)?;

    // Carrito con badge
    let mut cart_link = ElementBuilder::new("a")?
        .class("cart-link")
        .attr("href", "/cart")?
        .text("🛒");
    if nav.name == "Cart" {
        cart_link = cart_link.add_class("active")?;
    }
    let cart_link = cart_link.build();
    on_link_click(&cart_link, "/cart")?;

    let count = state.cart.count();
    let mut badge = ElementBuilder::new("span")?
        .class("cart-badge")
        .id("cart-badge")?
        .text(&count.to_string());
    if count == 0 {
        badge = badge.add_class("hidden")?;
    }
    append_child(&cart_link, &badge.build())?;
    append_child(&header, &cart_link)?;

    Ok(header)
}
