// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use crate::config::CONFIG;
use crate::models::booking::{BookingRequest, BookingResponse};
use crate::models::order::{
    CartValidationRequest, CartValidationResponse, CreateOrderRequest, CreateOrderResponse,
};
use crate::models::product::{Product, ProductFilter};
use gloo_net::http::Request;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    /// Listar productos del catálogo, con filtros opcionales
    pub async fn get_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, String> {
        let url = format!("{}/api/products{}", self.base_url, filter.to_query_string());
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<Vec<Product>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Obtener un producto por ID
    pub async fn get_product(&self, id: &str) -> Result<Product, String> {
        let url = format!("{}/api/products/{}", self.base_url, id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() == 404 {
            return Err(format!("Producto {} no encontrado", id));
        }
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<Product>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Listar categorías de producto
    pub async fn get_categories(&self) -> Result<Vec<String>, String> {
        let url = format!("{}/api/categories", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<Vec<String>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Validar una línea de carrito contra el backend (el carrito vive en
    /// el cliente; el backend solo confirma que el producto sigue existiendo)
    pub async fn validate_cart_item(
        &self,
        product_id: i64,
        quantity: u32,
    ) -> Result<CartValidationResponse, String> {
        let url = format!("{}/api/cart", self.base_url);
        let request = CartValidationRequest { product_id, quantity };

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() == 404 {
            return Err("Producto no encontrado".to_string());
        }
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<CartValidationResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Crear un pedido
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, String> {
        let url = format!("{}/api/orders", self.base_url);

        log::info!("🧾 Creando pedido para {} ({} líneas)", request.customer_name, request.items.len());

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response.json::<CreateOrderResponse>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            let status = response.status();
            let error_text = response.text().await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(format!("HTTP {}: {}", status, error_text))
        }
    }

    /// Crear una reserva de tatuaje
    pub async fn book_tattoo(&self, request: &BookingRequest) -> Result<BookingResponse, String> {
        let url = format!("{}/api/book-tattoo", self.base_url);

        log::info!("🗓️ Reservando cita para {} el {} a las {}", request.name, request.date, request.time);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response.json::<BookingResponse>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            let status = response.status();
            let error_text = response.text().await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(format!("HTTP {}: {}", status, error_text))
        }
    }

}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
