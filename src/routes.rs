// ============================================================================
// ROUTES - Tabla de rutas de la tienda
// ============================================================================
// Orden = prioridad de match. `name` es único (lo valida Router::register)
// y es lo que usan las vistas para la navegación programática.
// ============================================================================

use crate::router::RouteDef;
use crate::views::ViewId;

pub fn route_table() -> Vec<RouteDef> {
    vec![
        RouteDef { path: "/", name: "Home", view: ViewId::Home },
        RouteDef { path: "/shop", name: "Shop", view: ViewId::Shop },
        RouteDef { path: "/product/:id", name: "ProductDetail", view: ViewId::ProductDetail },
        RouteDef { path: "/cart", name: "Cart", view: ViewId::Cart },
        RouteDef { path: "/checkout", name: "Checkout", view: ViewId::Checkout },
        RouteDef { path: "/book-tattoo", name: "BookTattoo", view: ViewId::BookTattoo },
        RouteDef { path: "/about", name: "About", view: ViewId::About },
        RouteDef { path: "/contact", name: "Contact", view: ViewId::Contact },
    ]
}
