// ============================================================================
// CART VIEW - Líneas del carrito + resumen
// ============================================================================
// `render_cart_lines` y `render_cart_summary` llevan ID fijo: son los
// nodos que reemplaza la actualización incremental (IncrementalUpdate::CartList).
// ============================================================================

use crate::config::CONFIG;
use crate::dom::{append_child, on_click, on_link_click, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::format::{format_price, image_src};
use crate::viewmodels::CartViewModel;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

pub fn render_cart(state: &AppState) -> Result<Element, JsValue> {
    let view = ElementBuilder::new("div")?.class("cart-view").build();
    let heading = ElementBuilder::new("h1")?.text("Tu carrito").build();
    append_child(&view, &heading)?;

    append_child(&view, &render_cart_lines(state)?)?;
    append_child(&view, &render_cart_summary(state)?)?;
    Ok(view)
}

/// Contenedor de líneas (reemplazable in situ)
pub fn render_cart_lines(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("cart-lines")
        .id("cart-lines")?
        .build();

    let items = state.cart.items();
    if items.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("cart-empty")
            .text("Tu carrito está vacío.")
            .build();
        append_child(&container, &empty)?;

        let go_shop = ElementBuilder::new("a")?
            .class("btn btn-secondary")
            .attr("href", "/shop")?
            .text("Ir a la tienda")
            .build();
        on_link_click(&go_shop, "/shop")?;
        append_child(&container, &go_shop)?;
        return Ok(container);
    }

    for item in &items {
        let line = ElementBuilder::new("div")?.class("cart-line").build();

        let image = ElementBuilder::new("img")?
            .class("cart-line-image")
            .attr("src", &image_src(item.image_url.as_deref(), CONFIG.backend_url()))?
            .attr("alt", &item.name)?
            .build();
        append_child(&line, &image)?;

        let info = ElementBuilder::new("div")?.class("cart-line-info").build();
        let name = ElementBuilder::new("span")?
            .class("cart-line-name")
            .text(&item.name)
            .build();
        append_child(&info, &name)?;
        if let Some(size) = &item.size {
            let size_el = ElementBuilder::new("span")?
                .class("cart-line-size")
                .text(&format!("Talla {}", size))
                .build();
            append_child(&info, &size_el)?;
        }
        let unit = ElementBuilder::new("span")?
            .class("cart-line-unit")
            .text(&format_price(item.price))
            .build();
        append_child(&info, &unit)?;
        append_child(&line, &info)?;

        // Controles de cantidad
        let controls = ElementBuilder::new("div")?.class("qty-controls").build();

        let minus = ElementBuilder::new("button")?
            .class("qty-btn")
            .text("−")
            .build();
        {
            let state = state.clone();
            let product_id = item.product_id;
            let size = item.size.clone();
            on_click(&minus, move |_e: MouseEvent| {
                CartViewModel::new().decrement(&state, product_id, size.as_deref());
            })?;
        }
        append_child(&controls, &minus)?;

        let qty = ElementBuilder::new("span")?
            .class("qty-value")
            .text(&item.quantity.to_string())
            .build();
        append_child(&controls, &qty)?;

        let plus = ElementBuilder::new("button")?
            .class("qty-btn")
            .text("+")
            .build();
        {
            let state = state.clone();
            let product_id = item.product_id;
            let size = item.size.clone();
            on_click(&plus, move |_e: MouseEvent| {
                CartViewModel::new().increment(&state, product_id, size.as_deref());
            })?;
        }
        append_child(&controls, &plus)?;
        append_child(&line, &controls)?;

        let total = ElementBuilder::new("span")?
            .class("cart-line-total")
            .text(&format_price(item.line_total()))
            .build();
        append_child(&line, &total)?;

        let remove = ElementBuilder::new("button")?
            .class("remove-btn")
            .attr("title", "Eliminar")?
            .text("✕")
            .build();
        {
            let state = state.clone();
            let product_id = item.product_id;
            let size = item.size.clone();
            on_click(&remove, move |_e: MouseEvent| {
                CartViewModel::new().remove(&state, product_id, size.as_deref());
            })?;
        }
        append_child(&line, &remove)?;

        append_child(&container, &line)?;
    }

    Ok(container)
}

/// Resumen con total + CTA de checkout (reemplazable in situ)
pub fn render_cart_summary(state: &AppState) -> Result<Element, JsValue> {
    let summary = ElementBuilder::new("div")?
        .class("cart-summary")
        .id("cart-summary")?
        .build();

    let total = state.cart.total();
    let total_row = ElementBuilder::new("div")?.class("summary-row").build();
    let label = ElementBuilder::new("span")?.text("Total").build();
    append_child(&total_row, &label)?;
    let amount = ElementBuilder::new("span")?
        .class("summary-total")
        .text(&format_price(total))
        .build();
    append_child(&total_row, &amount)?;
    append_child(&summary, &total_row)?;

    let threshold = CONFIG.shop_config.free_shipping_threshold;
    let shipping_text = if total >= threshold && total > 0.0 {
        "Envío gratis incluido".to_string()
    } else {
        format!("Envío gratis a partir de {}", format_price(threshold))
    };
    let shipping = ElementBuilder::new("p")?
        .class("shipping-hint")
        .text(&shipping_text)
        .build();
    append_child(&summary, &shipping)?;

    let mut checkout_builder = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Tramitar pedido");
    if state.cart.is_empty() {
        checkout_builder = checkout_builder.attr("disabled", "disabled")?;
    }
    let checkout_btn = checkout_builder.build();
    on_click(&checkout_btn, move |_e: MouseEvent| {
        crate::navigate("/checkout");
    })?;
    append_child(&summary, &checkout_btn)?;

    Ok(summary)
}
