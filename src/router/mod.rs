// ============================================================================
// ROUTER - Tabla de rutas declarativa + resolución + navegación
// ============================================================================
// La tabla se registra una vez al arrancar y es inmutable después.
// El Navigation State tiene un único escritor (el router); cada navegación
// lo reemplaza por completo (last write wins, sin cola ni cancelación).
// ============================================================================

pub mod error;
pub mod history;
pub mod route;

pub use error::RouterError;
pub use route::{ParamMap, Route, RouteDef};

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Fase de navegación: Idle, o resolviendo un intent en curso
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPhase {
    Idle,
    Resolving,
}

/// Ruta resuelta actualmente + parámetros capturados.
/// Se recrea en cada navegación, nunca se mergea.
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub name: String,
    pub view: crate::views::ViewId,
    pub params: ParamMap,
    pub path: String,
}

pub struct Router {
    routes: Vec<Route>,
    current: RefCell<Option<NavigationState>>,
    phase: Cell<NavPhase>,
    subscribers: RefCell<Vec<Rc<dyn Fn()>>>,
}

impl Router {
    /// Construir el router desde una tabla fija de rutas.
    /// Falla si dos rutas comparten nombre: el startup debe abortar.
    pub fn register(defs: &[RouteDef]) -> Result<Self, RouterError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut routes = Vec::with_capacity(defs.len());

        for def in defs {
            if !seen.insert(def.name) {
                return Err(RouterError::DuplicateName(def.name.to_string()));
            }
            routes.push(Route::compile(def));
        }

        Ok(Self {
            routes,
            current: RefCell::new(None),
            phase: Cell::new(NavPhase::Idle),
            subscribers: RefCell::new(Vec::new()),
        })
    }

    /// Matchear un path contra la tabla, en orden (first-match-wins)
    pub fn resolve_by_path(&self, path: &str) -> Result<(&Route, ParamMap), RouterError> {
        for route in &self.routes {
            if let Some(params) = route.match_path(path) {
                return Ok((route, params));
            }
        }
        Err(RouterError::NoMatch(path.to_string()))
    }

    /// Reconstruir un path concreto desde un nombre de ruta + parámetros
    pub fn resolve_by_name(&self, name: &str, params: &ParamMap) -> Result<String, RouterError> {
        let route = self
            .routes
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?;
        route.build_path(params)
    }

    /// Navegar a un path: resuelve, actualiza el history y el Navigation
    /// State, y notifica para renderizar la vista matcheada.
    /// Los errores se devuelven al caller sin tocar el estado actual.
    pub fn navigate_path(&self, path: &str) -> Result<(), RouterError> {
        self.phase.set(NavPhase::Resolving);

        let resolved = self.resolve_by_path(path).map(|(route, params)| NavigationState {
            name: route.name.clone(),
            view: route.view,
            params,
            path: path.to_string(),
        });

        match resolved {
            Ok(nav) => {
                log::info!("🧭 Navegando a {} ({})", nav.path, nav.name);
                if let Err(e) = history::push(&nav.path) {
                    log::warn!("⚠️ No se pudo actualizar el history: {:?}", e);
                }
                *self.current.borrow_mut() = Some(nav);
                self.phase.set(NavPhase::Idle);
                self.notify();
                Ok(())
            }
            Err(e) => {
                self.phase.set(NavPhase::Idle);
                Err(e)
            }
        }
    }

    /// Navegar por nombre de ruta + parámetros
    pub fn navigate_named(&self, name: &str, params: &ParamMap) -> Result<(), RouterError> {
        let path = self.resolve_by_name(name, params)?;
        self.navigate_path(&path)
    }

    /// Resolver la ruta inicial desde la barra de direcciones (arranque en
    /// frío). Un path sin match cae a Home con replace, sin ensuciar el
    /// history. No notifica: el primer render viene después.
    pub fn sync_with_location(&self) {
        let path = history::current_path();
        let no_match = match self.resolve_by_path(&path) {
            Ok((route, params)) => {
                *self.current.borrow_mut() = Some(NavigationState {
                    name: route.name.clone(),
                    view: route.view,
                    params,
                    path,
                });
                return;
            }
            Err(e) => e,
        };

        log::warn!("⚠️ Path inicial sin match ({}), usando Home", no_match);
        if let Err(e) = history::replace("/") {
            log::warn!("⚠️ No se pudo reemplazar el history: {:?}", e);
        }
        if let Ok((route, params)) = self.resolve_by_path("/") {
            *self.current.borrow_mut() = Some(NavigationState {
                name: route.name.clone(),
                view: route.view,
                params,
                path: "/".to_string(),
            });
        }
    }

    /// Registrar el listener global de popstate para back/forward
    pub fn attach_popstate(router: &Rc<Self>) -> Result<(), JsValue> {
        let router = router.clone();
        history::on_popstate(move || {
            router.handle_popstate();
        })
    }

    /// Back/forward: re-resolver el path de la barra de direcciones
    fn handle_popstate(&self) {
        let path = history::current_path();
        match self.resolve_by_path(&path) {
            Ok((route, params)) => {
                log::info!("🧭 Popstate: {} ({})", path, route.name);
                *self.current.borrow_mut() = Some(NavigationState {
                    name: route.name.clone(),
                    view: route.view,
                    params,
                    path,
                });
                self.notify();
            }
            Err(e) => {
                log::warn!("⚠️ Popstate a path sin match: {}", e);
            }
        }
    }

    /// Navigation State actual (clonado; el router es el único escritor)
    pub fn current(&self) -> Option<NavigationState> {
        self.current.borrow().clone()
    }

    /// Fase de navegación actual
    pub fn phase(&self) -> NavPhase {
        self.phase.get()
    }

    /// Suscribirse a cambios de navegación
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Clonamos antes de invocar: un subscriber puede suscribir a otros
        let subscribers: Vec<Rc<dyn Fn()>> = self.subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::route_table;
    use crate::views::ViewId;

    fn router() -> Router {
        Router::register(&route_table()).expect("la tabla de rutas es válida")
    }

    #[test]
    fn las_ocho_rutas_resuelven_por_path() {
        let router = router();
        let cases = [
            ("/", "Home"),
            ("/shop", "Shop"),
            ("/product/42", "ProductDetail"),
            ("/cart", "Cart"),
            ("/checkout", "Checkout"),
            ("/book-tattoo", "BookTattoo"),
            ("/about", "About"),
            ("/contact", "Contact"),
        ];

        for (path, expected) in cases {
            let (route, _) = router.resolve_by_path(path).expect(path);
            assert_eq!(route.name, expected, "path {}", path);
        }
    }

    #[test]
    fn product_detail_captura_el_id() {
        let router = router();
        let (route, params) = router.resolve_by_path("/product/42").unwrap();
        assert_eq!(route.name, "ProductDetail");
        assert_eq!(route.view, ViewId::ProductDetail);
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn segmento_dinamico_vacio_es_no_match() {
        let router = router();
        assert_eq!(
            router.resolve_by_path("/product/"),
            Err(RouterError::NoMatch("/product/".to_string()))
        );
    }

    #[test]
    fn path_desconocido_es_no_match() {
        let router = router();
        assert_eq!(
            router.resolve_by_path("/nonexistent"),
            Err(RouterError::NoMatch("/nonexistent".to_string()))
        );
    }

    #[test]
    fn resuelve_por_nombre_con_parametros() {
        let router = router();
        let mut params = ParamMap::new();
        params.insert("id".to_string(), "42".to_string());
        assert_eq!(
            router.resolve_by_name("ProductDetail", &params).unwrap(),
            "/product/42"
        );
    }

    #[test]
    fn nombre_sin_parametro_requerido_falla() {
        let router = router();
        let err = router
            .resolve_by_name("ProductDetail", &ParamMap::new())
            .unwrap_err();
        assert!(matches!(err, RouterError::MissingParam { .. }));
    }

    #[test]
    fn nombre_desconocido_falla() {
        let router = router();
        assert_eq!(
            router.resolve_by_name("Admin", &ParamMap::new()),
            Err(RouterError::UnknownRoute("Admin".to_string()))
        );
    }

    #[test]
    fn nombres_duplicados_abortan_el_registro() {
        let defs = [
            RouteDef { path: "/", name: "Home", view: ViewId::Home },
            RouteDef { path: "/inicio", name: "Home", view: ViewId::Home },
        ];
        let err = Router::register(&defs).err().expect("debe fallar");
        assert_eq!(err, RouterError::DuplicateName("Home".to_string()));
    }

    #[test]
    fn arranca_en_idle() {
        let router = router();
        assert_eq!(router.phase(), NavPhase::Idle);
        assert!(router.current().is_none());
    }

    #[test]
    fn rutas_estaticas_no_capturan_parametros() {
        let router = router();
        let (_, params) = router.resolve_by_path("/book-tattoo").unwrap();
        assert!(params.is_empty());
    }
}
