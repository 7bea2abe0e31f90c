use thiserror::Error;

/// Errores del router. Todos son locales y síncronos:
/// - `DuplicateName` es fatal en el registro (la app no debe arrancar)
/// - el resto se devuelven al caller, que decide qué mostrar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("nombre de ruta duplicado: `{0}`")]
    DuplicateName(String),

    #[error("ningún patrón coincide con `{0}`")]
    NoMatch(String),

    #[error("ruta desconocida: `{0}`")]
    UnknownRoute(String),

    #[error("falta el parámetro `{param}` para la ruta `{route}`")]
    MissingParam { route: String, param: String },
}
