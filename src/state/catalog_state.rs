// ============================================================================
// CATALOG STATE - Catálogo de productos + filtros + detalle activo
// ============================================================================

use crate::models::product::{Product, ProductFilter};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct CatalogState {
    pub products: Rc<RefCell<Vec<Product>>>,
    pub categories: Rc<RefCell<Vec<String>>>,
    pub loading: Rc<RefCell<bool>>,
    pub loaded: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
    pub filter: Rc<RefCell<ProductFilter>>,

    // Detalle activo (vista ProductDetail). `detail_id` es el id ya
    // solicitado: evita re-lanzar el fetch en cada render.
    pub detail_id: Rc<RefCell<Option<i64>>>,
    pub detail: Rc<RefCell<Option<Product>>>,
    pub detail_loading: Rc<RefCell<bool>>,
    pub detail_error: Rc<RefCell<Option<String>>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            products: Rc::new(RefCell::new(Vec::new())),
            categories: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(RefCell::new(false)),
            loaded: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
            filter: Rc::new(RefCell::new(ProductFilter::default())),
            detail_id: Rc::new(RefCell::new(None)),
            detail: Rc::new(RefCell::new(None)),
            detail_loading: Rc::new(RefCell::new(false)),
            detail_error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn get_products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.borrow_mut() = products;
        *self.loaded.borrow_mut() = true;
    }

    pub fn get_categories(&self) -> Vec<String> {
        self.categories.borrow().clone()
    }

    pub fn set_categories(&self, categories: Vec<String>) {
        *self.categories.borrow_mut() = categories;
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn is_loaded(&self) -> bool {
        *self.loaded.borrow()
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }

    pub fn get_filter(&self) -> ProductFilter {
        self.filter.borrow().clone()
    }

    /// Cambiar el filtro invalida el catálogo cargado
    pub fn set_filter(&self, filter: ProductFilter) {
        *self.filter.borrow_mut() = filter;
        *self.loaded.borrow_mut() = false;
    }

    pub fn get_detail(&self) -> Option<Product> {
        self.detail.borrow().clone()
    }

    pub fn set_detail(&self, product: Option<Product>) {
        *self.detail.borrow_mut() = product;
    }

    /// Buscar un producto ya cargado en el catálogo (evita un fetch)
    pub fn find_product(&self, id: i64) -> Option<Product> {
        self.products.borrow().iter().find(|p| p.id == id).cloned()
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64) -> Product {
        Product {
            id,
            name: format!("P{}", id),
            category: "Jewelry".to_string(),
            price: 100.0,
            description: None,
            image_url: None,
            material: None,
            sizes: None,
        }
    }

    #[test]
    fn set_products_marca_el_catalogo_como_cargado() {
        let state = CatalogState::new();
        assert!(!state.is_loaded());
        state.set_products(vec![product(1), product(2)]);
        assert!(state.is_loaded());
        assert_eq!(state.find_product(2).unwrap().id, 2);
        assert!(state.find_product(99).is_none());
    }

    #[test]
    fn cambiar_filtro_invalida_el_catalogo() {
        let state = CatalogState::new();
        state.set_products(vec![product(1)]);
        state.set_filter(ProductFilter {
            category: Some("Jewelry".to_string()),
            ..Default::default()
        });
        assert!(!state.is_loaded());
    }
}
