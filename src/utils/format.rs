// ============================================================================
// FORMAT - Helpers de presentación (precios, imágenes)
// ============================================================================

use crate::config::CONFIG;

/// Formatear un precio con el símbolo de moneda configurado
pub fn format_price(price: f64) -> String {
    format_price_with_symbol(price, &CONFIG.shop_config.currency_symbol)
}

/// Variante con símbolo explícito (testable sin CONFIG)
pub fn format_price_with_symbol(price: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, price)
}

/// Resolver la URL de una imagen de producto.
/// El backend devuelve paths relativos (`/static/images/...`), los absolutos se respetan.
pub fn image_src(image_url: Option<&str>, backend_url: &str) -> String {
    match image_url {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url.to_string(),
        Some(url) if url.starts_with('/') => format!("{}{}", backend_url, url),
        Some(url) => format!("{}/{}", backend_url, url),
        None => format!("{}/static/images/placeholder.jpg", backend_url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatea_precio_con_dos_decimales() {
        assert_eq!(format_price_with_symbol(2499.0, "₹"), "₹2499.00");
        assert_eq!(format_price_with_symbol(99.5, "$"), "$99.50");
    }

    #[test]
    fn resuelve_imagenes_relativas_contra_el_backend() {
        let backend = "http://localhost:5000";
        assert_eq!(
            image_src(Some("/static/images/kaftan_dress.jpg"), backend),
            "http://localhost:5000/static/images/kaftan_dress.jpg"
        );
        assert_eq!(
            image_src(Some("https://cdn.example/x.jpg"), backend),
            "https://cdn.example/x.jpg"
        );
        assert_eq!(
            image_src(None, backend),
            "http://localhost:5000/static/images/placeholder.jpg"
        );
    }
}
