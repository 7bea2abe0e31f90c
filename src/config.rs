use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub retry_attempts: u32,
    pub shop_config: ShopConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:5000".to_string(),
            backend_url_production: "https://shop.tribaltides.example".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            retry_attempts: 3,
            shop_config: ShopConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    pub currency_symbol: String,
    pub featured_products: usize,
    pub free_shipping_threshold: f64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            featured_products: 4,
            free_shipping_threshold: 2000.0,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:5000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://shop.tribaltides.example").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            retry_attempts: option_env!("RETRY_ATTEMPTS")
                .unwrap_or("3").parse().unwrap_or(3),
            shop_config: ShopConfig {
                currency_symbol: option_env!("CURRENCY_SYMBOL")
                    .unwrap_or("₹").to_string(),
                featured_products: option_env!("FEATURED_PRODUCTS")
                    .unwrap_or("4").parse().unwrap_or(4),
                free_shipping_threshold: option_env!("FREE_SHIPPING_THRESHOLD")
                    .unwrap_or("2000.0").parse().unwrap_or(2000.0),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_sigue_al_entorno() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:5000");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://shop.tribaltides.example");
    }

    #[test]
    fn entorno_desconocido_usa_desarrollo() {
        let mut config = AppConfig::default();
        config.environment = "staging".to_string();
        assert_eq!(config.backend_url(), config.backend_url_development);
    }
}
