// ============================================================================
// PRODUCT CARD - Card de producto (grids de Home y Shop)
// ============================================================================

use crate::config::CONFIG;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::product::Product;
use crate::router::ParamMap;
use crate::utils::format::{format_price, image_src};
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

/// Card clickable: navega al detalle por nombre de ruta (sin hardcodear el path)
pub fn render_product_card(product: &Product) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article")?.class("product-card").build();

    let image = ElementBuilder::new("img")?
        .class("product-image")
        .attr("src", &image_src(product.image_url.as_deref(), CONFIG.backend_url()))?
        .attr("alt", &product.name)?
        .attr("loading", "lazy")?
        .build();
    append_child(&card, &image)?;

    let name = ElementBuilder::new("h3")?
        .class("product-name")
        .text(&product.name)
        .build();
    append_child(&card, &name)?;

    let category = ElementBuilder::new("span")?
        .class("product-category")
        .text(&product.category)
        .build();
    append_child(&card, &category)?;

    let price = ElementBuilder::new("span")?
        .class("product-price")
        .text(&format_price(product.price))
        .build();
    append_child(&card, &price)?;

    let product_id = product.id;
    on_click(&card, move |_e: MouseEvent| {
        let mut params = ParamMap::new();
        params.insert("id".to_string(), product_id.to_string());
        crate::navigate_named("ProductDetail", params);
    })?;

    Ok(card)
}
