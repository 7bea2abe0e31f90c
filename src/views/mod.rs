// ============================================================================
// VIEWS - Registro de vistas + shell de la aplicación
// ============================================================================

pub mod about;
pub mod book_tattoo;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod header;
pub mod home;
pub mod product_card;
pub mod product_detail;
pub mod shop;

pub use cart::render_cart;
pub use header::render_header;
pub use home::render_home;
pub use product_card::render_product_card;
pub use shop::render_shop;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::NavigationState;
use crate::state::app_state::{AppState, Notice, NoticeKind};
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

/// Identidad de cada vista registrada. Las rutas guardan esta key,
/// no la vista en sí: el registro de vistas es el dispatch de abajo.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewId {
    Home,
    Shop,
    ProductDetail,
    Cart,
    Checkout,
    BookTattoo,
    About,
    Contact,
}

/// Renderizar la aplicación completa: header + aviso global + vista activa
pub fn render_app(state: &AppState, nav: &NavigationState) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?.class("app-shell").build();

    append_child(&shell, &header::render_header(state, nav)?)?;

    if let Some(notice) = state.get_notice() {
        append_child(&shell, &render_notice(state, &notice)?)?;
    }

    let main = ElementBuilder::new("main")?.class("app-main").build();
    let content = match nav.view {
        ViewId::Home => home::render_home(state)?,
        ViewId::Shop => shop::render_shop(state)?,
        ViewId::ProductDetail => {
            let id = nav.params.get("id").cloned().unwrap_or_default();
            product_detail::render_product_detail(state, &id)?
        }
        ViewId::Cart => cart::render_cart(state)?,
        ViewId::Checkout => checkout::render_checkout(state)?,
        ViewId::BookTattoo => book_tattoo::render_book_tattoo(state)?,
        ViewId::About => about::render_about()?,
        ViewId::Contact => contact::render_contact(state)?,
    };
    append_child(&main, &content)?;
    append_child(&shell, &main)?;

    let footer = ElementBuilder::new("footer")?
        .class("app-footer")
        .text("Tribal Tides — ropa, joyería y tinta")
        .build();
    append_child(&shell, &footer)?;

    Ok(shell)
}

/// Banner de aviso global con botón de cierre
fn render_notice(state: &AppState, notice: &Notice) -> Result<Element, JsValue> {
    let class = match notice.kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Error => "notice notice-error",
    };
    let banner = ElementBuilder::new("div")?.class(class).build();

    let message = ElementBuilder::new("span")?
        .class("notice-message")
        .text(&notice.message)
        .build();
    append_child(&banner, &message)?;

    let close = ElementBuilder::new("button")?
        .class("notice-close")
        .text("✕")
        .build();
    let state = state.clone();
    on_click(&close, move |_e: MouseEvent| {
        state.set_notice(None);
    })?;
    append_child(&banner, &close)?;

    Ok(banner)
}
