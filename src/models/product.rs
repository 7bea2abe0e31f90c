use serde::{Deserialize, Serialize};

/// Producto del catálogo (wire format de GET /api/products)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String, // Women's Wear, Men's Wear, Jewelry, ...
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub sizes: Option<String>, // CSV: "XS,S,M,L"
}

impl Product {
    /// Tallas disponibles (el backend las envía como CSV)
    pub fn size_options(&self) -> Vec<String> {
        self.sizes
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Filtros de catálogo - se serializan como query params de GET /api/products
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct ProductFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.material.is_none()
    }

    /// Query string listo para concatenar a la URL ("" si no hay filtros)
    pub fn to_query_string(&self) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(q) if !q.is_empty() => format!("?{}", q),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializa_el_wire_format_del_backend() {
        let json = r#"{
            "id": 3,
            "name": "Maxi Dress",
            "category": "Women's Wear",
            "price": 2899.0,
            "description": "Resort-ready maxi dress",
            "image_url": "/static/images/maxi_dress.jpg",
            "material": "Cotton & Viscose",
            "sizes": "S,M,L,XL"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.category, "Women's Wear");
        assert_eq!(product.size_options(), vec!["S", "M", "L", "XL"]);
    }

    #[test]
    fn campos_opcionales_pueden_faltar() {
        let json = r#"{"id": 9, "name": "Anklet", "category": "Jewelry", "price": 799.0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.sizes.is_none());
        assert!(product.size_options().is_empty());
    }

    #[test]
    fn filtro_vacio_no_genera_query() {
        assert_eq!(ProductFilter::default().to_query_string(), "");
    }

    #[test]
    fn filtro_se_urlencodea() {
        let filter = ProductFilter {
            category: Some("Men's Wear".to_string()),
            max_price: Some(99.5),
            ..Default::default()
        };
        assert_eq!(filter.to_query_string(), "?category=Men%27s+Wear&max_price=99.5");
    }
}
