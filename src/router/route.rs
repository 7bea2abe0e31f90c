// ============================================================================
// ROUTE - Patrón de path compilado + matching por segmentos
// ============================================================================
// Matching exacto segmento a segmento, en orden de tabla. Un segmento
// dinámico (`:id`) captura exactamente un segmento no vacío. Sin regex,
// sin backtracking, sin matching parcial.
// ============================================================================

use crate::router::error::RouterError;
use crate::views::ViewId;
use std::collections::HashMap;

/// Parámetros capturados de los segmentos dinámicos (p.ej. `{ id: "42" }`)
pub type ParamMap = HashMap<String, String>;

/// Definición declarativa de una ruta (la tabla vive en `routes.rs`)
#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub view: ViewId,
}

/// Un segmento del patrón, ya compilado
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// Ruta registrada: patrón compilado + nombre único + vista asociada.
/// La vista es una key al registro de vistas, la ruta no la posee.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: String,
    pub name: String,
    pub view: ViewId,
    segments: Vec<Segment>,
}

/// Partir un path en segmentos. `/` produce cero segmentos; el trailing
/// slash produce un segmento vacío (y por tanto nunca matchea un patrón
/// sin él: `/shop/` != `/shop`).
fn split_segments(path: &str) -> Vec<&str> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

impl Route {
    /// Compilar una definición a segmentos
    pub fn compile(def: &RouteDef) -> Self {
        let segments = split_segments(def.path)
            .into_iter()
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Static(s.to_string()),
            })
            .collect();

        Self {
            path: def.path.to_string(),
            name: def.name.to_string(),
            view: def.view,
            segments,
        }
    }

    /// Matchear un path concreto contra este patrón.
    /// Devuelve los parámetros capturados si hay match.
    pub fn match_path(&self, path: &str) -> Option<ParamMap> {
        // El pathname nunca trae query/fragment, pero los enlaces programáticos sí pueden
        let raw = path
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or(path);

        let segments = split_segments(raw);
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = ParamMap::new();
        for (pattern, value) in self.segments.iter().zip(segments) {
            match pattern {
                Segment::Static(expected) => {
                    if expected != value {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    // Un segmento dinámico vacío no es un match (`/product/`)
                    if value.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), value.to_string());
                }
            }
        }
        Some(params)
    }

    /// Reconstruir un path concreto a partir de parámetros (navegación por nombre)
    pub fn build_path(&self, params: &ParamMap) -> Result<String, RouterError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Static(s) => out.push_str(s),
                Segment::Param(name) => {
                    let value = params.get(name).ok_or_else(|| RouterError::MissingParam {
                        route: self.name.clone(),
                        param: name.clone(),
                    })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_route() -> Route {
        Route::compile(&RouteDef {
            path: "/product/:id",
            name: "ProductDetail",
            view: ViewId::ProductDetail,
        })
    }

    #[test]
    fn captura_segmento_dinamico() {
        let route = product_route();
        let params = route.match_path("/product/42").expect("debe matchear");
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn segmento_dinamico_vacio_no_matchea() {
        let route = product_route();
        assert!(route.match_path("/product/").is_none());
        assert!(route.match_path("/product").is_none());
    }

    #[test]
    fn ignora_query_y_fragment() {
        let route = product_route();
        let params = route.match_path("/product/7?ref=home#detalles").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("7"));
    }

    #[test]
    fn raiz_tiene_cero_segmentos() {
        let home = Route::compile(&RouteDef {
            path: "/",
            name: "Home",
            view: ViewId::Home,
        });
        assert!(home.match_path("/").is_some());
        assert!(home.match_path("/shop").is_none());
    }

    #[test]
    fn trailing_slash_no_es_equivalente() {
        let shop = Route::compile(&RouteDef {
            path: "/shop",
            name: "Shop",
            view: ViewId::Shop,
        });
        assert!(shop.match_path("/shop").is_some());
        assert!(shop.match_path("/shop/").is_none());
    }

    #[test]
    fn reconstruye_path_con_parametros() {
        let route = product_route();
        let mut params = ParamMap::new();
        params.insert("id".to_string(), "42".to_string());
        assert_eq!(route.build_path(&params).unwrap(), "/product/42");
    }

    #[test]
    fn build_path_sin_parametro_falla() {
        let route = product_route();
        let err = route.build_path(&ParamMap::new()).unwrap_err();
        assert_eq!(
            err,
            RouterError::MissingParam {
                route: "ProductDetail".to_string(),
                param: "id".to_string(),
            }
        );
    }
}
