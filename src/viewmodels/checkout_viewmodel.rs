// ============================================================================
// CHECKOUT VIEWMODEL - Validación y envío del pedido
// ============================================================================

use crate::models::order::CreateOrderRequest;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use wasm_bindgen_futures::spawn_local;

pub struct CheckoutViewModel {
    api_client: ApiClient,
}

impl CheckoutViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Enviar el pedido al backend. En éxito vacía el carrito y vuelve a
    /// Home con un aviso; en error deja al usuario en el checkout.
    pub fn submit_order(&self, state: &AppState, name: String, email: String, address: String) {
        if *state.checkout_submitting.borrow() {
            return;
        }

        let request = CreateOrderRequest::from_cart(name, email, address, &state.cart.items());
        if let Err(e) = request.validate() {
            state.notify_error(e);
            return;
        }

        *state.checkout_submitting.borrow_mut() = true;
        let state = state.clone();
        let api = self.api_client.clone();

        spawn_local(async move {
            let result = api.create_order(&request).await;
            *state.checkout_submitting.borrow_mut() = false;

            match result {
                Ok(resp) if resp.success => {
                    let order_ref = resp
                        .order_id
                        .map(|id| format!(" #{}", id))
                        .unwrap_or_default();
                    log::info!("✅ Pedido{} creado", order_ref);
                    state.cart.clear();
                    crate::navigate("/");
                    state.notify_success(format!(
                        "Pedido{} creado. ¡Gracias por tu compra!",
                        order_ref
                    ));
                }
                Ok(resp) => {
                    let error = resp
                        .error
                        .unwrap_or_else(|| "El backend rechazó el pedido".to_string());
                    state.notify_error(format!("No se pudo crear el pedido: {}", error));
                }
                Err(e) => {
                    state.notify_error(format!("Error creando el pedido: {}", e));
                }
            }
        });

        // Render inmediato para deshabilitar el botón de envío
        crate::rerender_app();
    }
}

impl Default for CheckoutViewModel {
    fn default() -> Self {
        Self::new()
    }
}
