// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::state::{CartState, CatalogState};
use std::cell::RefCell;
use std::rc::Rc;

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (cambio de vista, notices, catálogo)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug)]
pub enum IncrementalUpdate {
    /// Actualizar el contador del carrito en el header
    CartBadge,
    /// Re-renderizar líneas + resumen del carrito (vista Cart)
    CartList,
}

/// Aviso global (pedido creado, reserva confirmada, errores de envío)
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub cart: CartState,
    pub catalog: CatalogState,

    // UI State
    pub notice: Rc<RefCell<Option<Notice>>>,
    pub checkout_submitting: Rc<RefCell<bool>>,
    pub booking_submitting: Rc<RefCell<bool>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            cart: CartState::new(),
            catalog: CatalogState::new(),
            notice: Rc::new(RefCell::new(None)),
            checkout_submitting: Rc::new(RefCell::new(false)),
            booking_submitting: Rc::new(RefCell::new(false)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado crítico
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> =
            self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback();
        }
    }

    /// Mostrar un aviso global y re-renderizar
    pub fn set_notice(&self, notice: Option<Notice>) {
        *self.notice.borrow_mut() = notice;
        self.notify_subscribers();
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.set_notice(Some(Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }));
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.set_notice(Some(Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }));
    }

    pub fn get_notice(&self) -> Option<Notice> {
        self.notice.borrow().clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notifica_a_los_subscribers() {
        let state = AppState::new();
        let fired = Rc::new(Cell::new(0));

        let fired_clone = fired.clone();
        state.subscribe_to_changes(move || {
            fired_clone.set(fired_clone.get() + 1);
        });

        state.notify_success("pedido creado");
        assert_eq!(fired.get(), 1);
        assert_eq!(
            state.get_notice(),
            Some(Notice {
                kind: NoticeKind::Success,
                message: "pedido creado".to_string()
            })
        );

        state.set_notice(None);
        assert_eq!(fired.get(), 2);
        assert!(state.get_notice().is_none());
    }
}
