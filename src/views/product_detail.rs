// ============================================================================
// PRODUCT DETAIL VIEW - Detalle + selector de talla + añadir al carrito
// ============================================================================

use crate::config::CONFIG;
use crate::dom::{append_child, on_click, on_link_click, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::format::{format_price, image_src};
use crate::viewmodels::{CartViewModel, CatalogViewModel};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement, MouseEvent};

pub fn render_product_detail(state: &AppState, raw_id: &str) -> Result<Element, JsValue> {
    CatalogViewModel::new().ensure_product_detail(state, raw_id);

    let view = ElementBuilder::new("div")?.class("product-detail-view").build();

    let back = ElementBuilder::new("a")?
        .class("back-link")
        .attr("href", "/shop")?
        .text("← Volver a la tienda")
        .build();
    on_link_click(&back, "/shop")?;
    append_child(&view, &back)?;

    if let Some(error) = state.catalog.detail_error.borrow().clone() {
        let error_box = ElementBuilder::new("div")?
            .class("error-box")
            .text(&error)
            .build();
        append_child(&view, &error_box)?;
        return Ok(view);
    }

    let product = match state.catalog.get_detail() {
        Some(product) => product,
        None => {
            let loading = ElementBuilder::new("p")?
                .class("loading")
                .text("Cargando producto...")
                .build();
            append_child(&view, &loading)?;
            return Ok(view);
        }
    };

    let detail = ElementBuilder::new("div")?.class("product-detail").build();

    let image = ElementBuilder::new("img")?
        .class("detail-image")
        .attr("src", &image_src(product.image_url.as_deref(), CONFIG.backend_url()))?
        .attr("alt", &product.name)?
        .build();
    append_child(&detail, &image)?;

    let info = ElementBuilder::new("div")?.class("detail-info").build();

    let name = ElementBuilder::new("h1")?.text(&product.name).build();
    append_child(&info, &name)?;

    let mut meta_text = product.category.clone();
    if let Some(material) = &product.material {
        meta_text = format!("{} · {}", meta_text, material);
    }
    let meta = ElementBuilder::new("p")?
        .class("detail-meta")
        .text(&meta_text)
        .build();
    append_child(&info, &meta)?;

    let price = ElementBuilder::new("p")?
        .class("detail-price")
        .text(&format_price(product.price))
        .build();
    append_child(&info, &price)?;

    if let Some(description) = &product.description {
        let desc = ElementBuilder::new("p")?
            .class("detail-description")
            .text(description)
            .build();
        append_child(&info, &desc)?;
    }

    // Selector de talla (solo si el producto tiene tallas)
    let sizes = product.size_options();
    let size_select: Option<HtmlSelectElement> = if sizes.is_empty() {
        None
    } else {
        let select_el = ElementBuilder::new("select")?.class("size-select").build();
        for size in &sizes {
            let option = ElementBuilder::new("option")?
                .attr("value", size)?
                .text(size)
                .build();
            append_child(&select_el, &option)?;
        }

        let label = ElementBuilder::new("label")?
            .class("size-label")
            .text("Talla")
            .build();
        append_child(&label, &select_el)?;
        append_child(&info, &label)?;

        Some(
            select_el
                .dyn_into()
                .map_err(|_| JsValue::from_str("select inválido"))?,
        )
    };

    let add_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Añadir al carrito")
        .build();
    {
        let state = state.clone();
        let product = product.clone();
        on_click(&add_btn, move |_e: MouseEvent| {
            let size = size_select.as_ref().map(|s| s.value());
            CartViewModel::new().add_to_cart(&state, &product, size);
        })?;
    }
    append_child(&info, &add_btn)?;

    append_child(&detail, &info)?;
    append_child(&view, &detail)?;
    Ok(view)
}
