use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Solicitud de reserva de tatuaje (wire format de POST /api/book-tattoo)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookingRequest {
    pub name: String,
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:MM
    pub style: String,
}

impl BookingRequest {
    /// Validación del formulario antes de enviar al backend
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre es obligatorio".to_string());
        }
        if NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err("Fecha inválida (formato YYYY-MM-DD)".to_string());
        }
        if NaiveTime::parse_from_str(&self.time, "%H:%M").is_err() {
            return Err("Hora inválida (formato HH:MM)".to_string());
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookingResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            name: "Iker".to_string(),
            date: "2026-09-15".to_string(),
            time: "14:30".to_string(),
            style: "Polinesio".to_string(),
        }
    }

    #[test]
    fn acepta_fecha_y_hora_validas() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn rechaza_fecha_mal_formada() {
        let mut req = request();
        req.date = "15/09/2026".to_string();
        assert!(req.validate().is_err());

        req.date = "2026-13-40".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rechaza_hora_mal_formada() {
        let mut req = request();
        req.time = "25:99".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rechaza_nombre_vacio() {
        let mut req = request();
        req.name = "   ".to_string();
        assert!(req.validate().is_err());
    }
}
