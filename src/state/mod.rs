// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod cart_state;
pub mod catalog_state;

pub use app_state::*;
pub use cart_state::*;
pub use catalog_state::*;
