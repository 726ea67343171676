//! # Construcción de Respuestas HTTP
//!
//! API para construir respuestas HTTP/1.1 y convertirlas a bytes para
//! enviar al cliente.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use rawhttp::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("hello");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

use super::StatusCode;
use std::collections::HashMap;

const CONTENT_LENGTH: &str = "Content-Length";

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP
    status: StatusCode,

    /// Headers HTTP. El orden no importa; un nombre aparece una sola vez.
    headers: HashMap<String, String>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Establece el cuerpo de la respuesta desde un string
    ///
    /// `Content-Length` no se fija aquí: lo calcula `to_bytes` si el
    /// handler no lo estableció.
    pub fn with_body(self, body: &str) -> Self {
        self.with_body_bytes(body.as_bytes().to_vec())
    }

    /// Establece el cuerpo de la respuesta desde bytes
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Respuesta 200 OK en texto plano
    ///
    /// # Ejemplo
    /// ```
    /// use rawhttp::http::{Response, StatusCode};
    ///
    /// let response = Response::text("pong");
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.header("Content-Type"), Some("text/plain"));
    /// ```
    pub fn text(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body(body)
    }

    /// Respuesta de error cuyo body es la status line, ej: `404 Not Found`
    pub fn error(status: StatusCode) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/plain")
            .with_body(&status.to_string())
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - `Content-Length` calculado si falta
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario, sin terminador
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(128 + self.body.len());

        // 1. Status line
        result.extend_from_slice(format!("HTTP/1.1 {}\r\n", self.status).as_bytes());

        // 2. Headers
        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        // 3. Content-Length, una sola vez
        if !self.headers.contains_key(CONTENT_LENGTH) {
            result.extend_from_slice(
                format!("{}: {}\r\n", CONTENT_LENGTH, self.body.len()).as_bytes(),
            );
        }

        // 4. Línea vacía y body
        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_text(response: &Response) -> String {
        String::from_utf8(response.to_bytes()).unwrap()
    }

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_with_header_overwrites() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/html")
            .with_header("Content-Type", "text/plain");

        assert_eq!(response.headers().len(), 1);
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
    }

    #[test]
    fn test_to_bytes() {
        let response = Response::text("Test");
        let text = as_text(&response);

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/plain\r\n"));
        assert!(text.contains("Content-Length: 4\r\n"));
        assert!(text.ends_with("\r\n\r\nTest"));
    }

    #[test]
    fn test_content_length_emitted_once_when_preset() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Length", "3")
            .with_body("abc");
        let text = as_text(&response);

        assert_eq!(text.matches("Content-Length").count(), 1);
        assert!(text.contains("Content-Length: 3\r\n"));
    }

    #[test]
    fn test_empty_body_response() {
        let text = as_text(&Response::new(StatusCode::Created));

        assert_eq!(text, "HTTP/1.1 201 Created\r\nContent-Length: 0\r\n\r\n");
    }

    #[test]
    fn test_error_response() {
        let response = Response::error(StatusCode::NotFound);

        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.body(), b"404 Not Found");
        assert!(as_text(&response).contains("Content-Length: 13\r\n"));
    }

    #[test]
    fn test_binary_body_length_counts_bytes() {
        let binary_data = vec![0x00, 0x01, 0x02, 0xFF];
        let response = Response::new(StatusCode::Ok).with_body_bytes(binary_data.clone());
        let bytes = response.to_bytes();

        assert!(bytes.ends_with(&binary_data));
        let head = String::from_utf8_lossy(&bytes[..bytes.len() - binary_data.len()]);
        assert!(head.contains("Content-Length: 4\r\n"));
    }

    #[test]
    fn test_multibyte_body_length_counts_bytes() {
        let text = as_text(&Response::text("ñandú"));
        assert!(text.contains("Content-Length: 7\r\n"));
    }
}
