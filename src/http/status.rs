//! # Códigos de Estado HTTP
//!
//! El servidor sólo responde con un conjunto fijo de códigos:
//!
//! - **2xx**: Éxito (200 OK, 201 Created)
//! - **4xx**: Error del cliente (400, 404)
//! - **5xx**: Error del servidor (500)

/// Códigos de estado que puede emitir el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 201 Created - Archivo creado con POST /files/<name>
    Created = 201,

    /// 400 Bad Request - Request line ilegible o falta un segmento requerido
    BadRequest = 400,

    /// 404 Not Found - Ruta o archivo inexistente
    NotFound = 404,

    /// 500 Internal Server Error - Fallo de almacenamiento
    InternalServerError = 500,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use rawhttp::http::StatusCode;
    /// assert_eq!(StatusCode::Created.as_u16(), 201);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Obtiene el código a partir de su valor numérico
    ///
    /// Cualquier código fuera del conjunto soportado se trata como 500.
    ///
    /// # Ejemplo
    /// ```
    /// use rawhttp::http::StatusCode;
    /// assert_eq!(StatusCode::from_u16(404), StatusCode::NotFound);
    /// assert_eq!(StatusCode::from_u16(418), StatusCode::InternalServerError);
    /// ```
    pub fn from_u16(code: u16) -> Self {
        match code {
            200 => StatusCode::Ok,
            201 => StatusCode::Created,
            400 => StatusCode::BadRequest,
            404 => StatusCode::NotFound,
            _ => StatusCode::InternalServerError,
        }
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Ok.as_u16(), 200);
        assert_eq!(StatusCode::Created.as_u16(), 201);
        assert_eq!(StatusCode::BadRequest.as_u16(), 400);
        assert_eq!(StatusCode::NotFound.as_u16(), 404);
        assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    }

    #[test]
    fn test_reason_phrases() {
        assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
        assert_eq!(StatusCode::Created.reason_phrase(), "Created");
        assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
        assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
        assert_eq!(StatusCode::InternalServerError.reason_phrase(), "Internal Server Error");
    }

    #[test]
    fn test_from_u16_known_codes() {
        for code in [200, 201, 400, 404, 500] {
            assert_eq!(StatusCode::from_u16(code).as_u16(), code);
        }
    }

    #[test]
    fn test_from_u16_unknown_falls_back_to_500() {
        assert_eq!(StatusCode::from_u16(302), StatusCode::InternalServerError);
        assert_eq!(StatusCode::from_u16(0).reason_phrase(), "Internal Server Error");
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::Ok.to_string(), "200 OK");
        assert_eq!(StatusCode::Created.to_string(), "201 Created");
        assert_eq!(StatusCode::InternalServerError.to_string(), "500 Internal Server Error");
    }
}
