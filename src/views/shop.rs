// ============================================================================
// SHOP VIEW - Grid de catálogo + filtros
// ============================================================================

use crate::dom::{append_child, on_change, on_click, ElementBuilder};
use crate::models::product::ProductFilter;
use crate::state::app_state::AppState;
use crate::viewmodels::CatalogViewModel;
use crate::views::render_product_card;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, MouseEvent};

/// Leer el filtro actual desde los controles de la barra
fn read_filter(
    category: &HtmlSelectElement,
    min_price: &HtmlInputElement,
    max_price: &HtmlInputElement,
) -> ProductFilter {
    let selected = category.value();
    ProductFilter {
        category: if selected.is_empty() { None } else { Some(selected) },
        min_price: min_price.value().parse().ok(),
        max_price: max_price.value().parse().ok(),
        material: None,
    }
}

pub fn render_shop(state: &AppState) -> Result<Element, JsValue> {
    CatalogViewModel::new().ensure_catalog(state);

    let view = ElementBuilder::new("div")?.class("shop-view").build();
    let heading = ElementBuilder::new("h1")?.text("Tienda").build();
    append_child(&view, &heading)?;

    let filter = state.catalog.get_filter();

    // Barra de filtros
    let bar = ElementBuilder::new("div")?.class("filter-bar").build();

    let select_el = ElementBuilder::new("select")?.class("category-filter").build();
    let all_option = ElementBuilder::new("option")?
        .attr("value", "")?
        .text("Todas las categorías")
        .build();
    append_child(&select_el, &all_option)?;
    for category in state.catalog.get_categories() {
        let mut option = ElementBuilder::new("option")?
            .attr("value", &category)?
            .text(&category);
        if filter.category.as_deref() == Some(category.as_str()) {
            option = option.attr("selected", "selected")?;
        }
        append_child(&select_el, &option.build())?;
    }
    let category_select: HtmlSelectElement = select_el
        .clone()
        .dyn_into()
        .map_err(|_| JsValue::from_str("select inválido"))?;
    append_child(&bar, &select_el)?;

    let mut min_builder = ElementBuilder::new("input")?
        .class("price-filter")
        .attr("type", "number")?
        .attr("placeholder", "Precio mín.")?;
    if let Some(min) = filter.min_price {
        min_builder = min_builder.attr("value", &min.to_string())?;
    }
    let min_el = min_builder.build();
    let min_input: HtmlInputElement = min_el
        .clone()
        .dyn_into()
        .map_err(|_| JsValue::from_str("input inválido"))?;
    append_child(&bar, &min_el)?;

    let mut max_builder = ElementBuilder::new("input")?
        .class("price-filter")
        .attr("type", "number")?
        .attr("placeholder", "Precio máx.")?;
    if let Some(max) = filter.max_price {
        max_builder = max_builder.attr("value", &max.to_string())?;
    }
    let max_el = max_builder.build();
    let max_input: HtmlInputElement = max_el
        .clone()
        .dyn_into()
        .map_err(|_| JsValue::from_str("input inválido"))?;
    append_child(&bar, &max_el)?;

    // Cambiar de categoría aplica el filtro directamente
    {
        let state = state.clone();
        let category_select = category_select.clone();
        let min_input = min_input.clone();
        let max_input = max_input.clone();
        on_change(&select_el, move |_e: Event| {
            let filter = read_filter(&category_select, &min_input, &max_input);
            CatalogViewModel::new().apply_filter(&state, filter);
        })?;
    }

    let apply_btn = ElementBuilder::new("button")?
        .class("btn btn-small")
        .text("Filtrar")
        .build();
    {
        let state = state.clone();
        on_click(&apply_btn, move |_e: MouseEvent| {
            let filter = read_filter(&category_select, &min_input, &max_input);
            CatalogViewModel::new().apply_filter(&state, filter);
        })?;
    }
    append_child(&bar, &apply_btn)?;
    append_child(&view, &bar)?;

    // Estados: error / cargando / grid
    if let Some(error) = state.catalog.get_error() {
        let error_box = ElementBuilder::new("div")?.class("error-box").build();
        let message = ElementBuilder::new("p")?
            .text(&format!("No se pudo cargar el catálogo: {}", error))
            .build();
        append_child(&error_box, &message)?;

        let retry = ElementBuilder::new("button")?
            .class("btn btn-small")
            .text("Reintentar")
            .build();
        let state = state.clone();
        on_click(&retry, move |_e: MouseEvent| {
            CatalogViewModel::new().retry(&state);
        })?;
        append_child(&error_box, &retry)?;
        append_child(&view, &error_box)?;
        return Ok(view);
    }

    if state.catalog.is_loading() {
        let loading = ElementBuilder::new("p")?
            .class("loading")
            .text("Cargando catálogo...")
            .build();
        append_child(&view, &loading)?;
        return Ok(view);
    }

    let products = state.catalog.get_products();
    if products.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty")
            .text("No hay productos con esos filtros.")
            .build();
        append_child(&view, &empty)?;
    } else {
        let grid = ElementBuilder::new("div")?.class("product-grid").build();
        for product in &products {
            append_child(&grid, &render_product_card(product)?)?;
        }
        append_child(&view, &grid)?;
    }

    Ok(view)
}
