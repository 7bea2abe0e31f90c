// ============================================================================
// BOOKING VIEWMODEL - Reserva de cita de tatuaje
// ============================================================================

use crate::models::booking::BookingRequest;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use wasm_bindgen_futures::spawn_local;

pub struct BookingViewModel {
    api_client: ApiClient,
}

impl BookingViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Enviar la solicitud de reserva. En éxito vuelve a Home con aviso.
    pub fn submit_booking(&self, state: &AppState, request: BookingRequest) {
        if *state.booking_submitting.borrow() {
            return;
        }

        if let Err(e) = request.validate() {
            state.notify_error(e);
            return;
        }

        *state.booking_submitting.borrow_mut() = true;
        let state = state.clone();
        let api = self.api_client.clone();

        spawn_local(async move {
            let result = api.book_tattoo(&request).await;
            *state.booking_submitting.borrow_mut() = false;

            match result {
                Ok(resp) if resp.success => {
                    let booking_ref = resp
                        .booking_id
                        .map(|id| format!(" #{}", id))
                        .unwrap_or_default();
                    log::info!("✅ Reserva{} confirmada", booking_ref);
                    crate::navigate("/");
                    state.notify_success(format!(
                        "Reserva{} confirmada para el {} a las {}",
                        booking_ref, request.date, request.time
                    ));
                }
                Ok(resp) => {
                    let error = resp
                        .error
                        .unwrap_or_else(|| "El backend rechazó la reserva".to_string());
                    state.notify_error(format!("No se pudo crear la reserva: {}", error));
                }
                Err(e) => {
                    state.notify_error(format!("Error creando la reserva: {}", e));
                }
            }
        });

        crate::rerender_app();
    }
}

impl Default for BookingViewModel {
    fn default() -> Self {
        Self::new()
    }
}
