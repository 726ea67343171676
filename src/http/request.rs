//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser HTTP/1.1 escrito desde cero, sin librerías de parsing.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/notes.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /target VERSION`
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: Exactamente `Content-Length` bytes (si el header existe)

use std::collections::HashMap;
use thiserror::Error;

/// Separador entre la cabecera y el body
pub(crate) const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Métodos HTTP
///
/// Sólo GET y POST distinguen rutas (en `/files`). Cualquier otro verbo
/// no es un error de parsing: se conserva en `Other` y el router decide por
/// el path, así que `PATCH /echo/x` responde como un echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    Other(String),
}

impl Method {
    fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(token) => token,
        }
    }
}

/// Path de la petición descompuesto en segmentos
///
/// `"/files/a.txt"` produce los segmentos `["files", "a.txt"]`; el segmento
/// vacío que genera la barra inicial se descarta. Para `"/"` el único
/// segmento es `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    full: String,
    segments: Vec<String>,
}

impl Path {
    fn parse(target: &str) -> Result<Self, ParseError> {
        if !target.starts_with('/') {
            return Err(ParseError::InvalidTarget(target.to_string()));
        }

        let segments = target.split('/').skip(1).map(str::to_string).collect();

        Ok(Path {
            full: target.to_string(),
            segments,
        })
    }

    /// Path completo, con la barra inicial
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Todos los segmentos en orden
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segmento en la posición `index`, si existe
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(|s| s.as_str())
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET, POST, ...)
    method: Method,

    /// Path de la petición (ej: "/echo/hello")
    path: Path,

    /// Versión declarada en la request line (puede faltar)
    version: Option<String>,

    /// Headers HTTP, sensibles a mayúsculas; el último duplicado gana
    headers: HashMap<String, String>,

    /// Body crudo, acotado por `Content-Length`
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Buffer vacío
    #[error("Empty request")]
    EmptyRequest,

    /// Request line con menos de dos tokens
    #[error("Invalid request line format")]
    InvalidRequestLine,

    /// El target no empieza con '/'
    #[error("Invalid request target: {0}")]
    InvalidTarget(String),

    /// La cabecera no es UTF-8 válido
    #[error("Request head is not valid UTF-8")]
    InvalidEncoding,
}

impl Request {
    /// Parsea un request HTTP/1.1 desde bytes
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use rawhttp::http::Request;
    ///
    /// let raw = b"GET /echo/hello HTTP/1.1\r\nUser-Agent: curl\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path().segments(), ["echo", "hello"]);
    /// assert_eq!(request.header("User-Agent"), Some("curl"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // Separar cabecera y body en el primer \r\n\r\n
        let (head, rest) = match find_subslice(buffer, HEAD_TERMINATOR) {
            Some(pos) => (&buffer[..pos], &buffer[pos + HEAD_TERMINATOR.len()..]),
            None => (buffer, &[][..]),
        };

        let head = std::str::from_utf8(head).map_err(|_| ParseError::InvalidEncoding)?;

        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default();
        if request_line.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // 1. Request line
        let (method, path, version) = Self::parse_request_line(request_line)?;

        // 2. Headers
        let headers = Self::parse_headers(lines);

        // 3. Body
        let body = Self::parse_body(&headers, rest);

        Ok(Request {
            method,
            path,
            version,
            headers,
            body,
        })
    }

    /// Formato: `GET /path HTTP/1.1`, separado por espacios simples
    fn parse_request_line(line: &str) -> Result<(Method, Path, Option<String>), ParseError> {
        let mut parts = line.split(' ');

        let (method, target) = match (parts.next(), parts.next()) {
            (Some(m), Some(t)) if !m.is_empty() && !t.is_empty() => (m, t),
            _ => return Err(ParseError::InvalidRequestLine),
        };

        let version = parts.next().map(str::to_string);

        Ok((Method::from_token(method), Path::parse(target)?, version))
    }

    /// Cada header tiene formato `Name: Value`; las líneas sin `": "` se ignoran
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for line in lines {
            if line.is_empty() {
                break;
            }

            if let Some((name, value)) = line.split_once(": ") {
                headers.insert(name.to_string(), value.to_string());
            }
        }

        headers
    }

    fn parse_body(headers: &HashMap<String, String>, rest: &[u8]) -> Vec<u8> {
        let length = match headers.get("Content-Length").map(|v| v.parse::<usize>()) {
            Some(Ok(n)) => n,
            _ => return Vec::new(),
        };

        rest[..length.min(rest.len())].to_vec()
    }

    // === Accesores ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Versión HTTP declarada, si la hubo
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (nombre exacto)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Posición de la primera aparición de `needle` en `haystack`
pub(crate) fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
