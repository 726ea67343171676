//! # Handlers de Texto
//! src/handlers/text.rs
//!
//! - /: ping informativo
//! - /echo/<value>: devuelve `<value>`, comprimido con gzip si se pide
//! - /user-agent: devuelve el header `User-Agent`

use crate::error::{Error, Result};
use crate::http::{ContentEncoding, Request, Response};

/// Body del ping en `/`
pub const PING_BODY: &str = "OK";

/// Handler para /
pub fn root() -> Response {
    Response::text(PING_BODY)
}

/// Handler para /echo/<value>
///
/// Si `Accept-Encoding` incluye `gzip`, el body se comprime y se agregan
/// `Content-Encoding` y `Content-Length` con el largo comprimido.
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain
/// Content-Length: 3
///
/// abc
/// ```
pub fn echo(req: &Request, value: &str) -> Result<Response> {
    let mut response = Response::text(value);

    if let Some(encoding) = ContentEncoding::negotiate(req.header("Accept-Encoding")) {
        let encoded = encoding
            .encode(value.as_bytes())
            .map_err(Error::EncodingFailure)?;

        response = response
            .with_header("Content-Encoding", encoding.as_str())
            .with_header("Content-Length", &encoded.len().to_string())
            .with_body_bytes(encoded);
    }

    Ok(response)
}

/// Handler para /user-agent
pub fn user_agent(req: &Request) -> Response {
    Response::text(req.header("User-Agent").unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn request(raw: &str) -> Request {
        Request::parse(raw.as_bytes()).unwrap()
    }

    #[test]
    fn test_root() {
        let response = root();
        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), PING_BODY.as_bytes());
    }

    #[test]
    fn test_echo_plain() {
        let response = echo(&request("GET /echo/hello HTTP/1.1\r\n\r\n"), "hello").unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"hello");
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("Content-Encoding"), None);
    }

    #[test]
    fn test_echo_gzip() {
        let req = request("GET /echo/hello HTTP/1.1\r\nAccept-Encoding: deflate, gzip\r\n\r\n");
        let response = echo(&req, "hello").unwrap();

        assert_eq!(response.header("Content-Encoding"), Some("gzip"));
        assert_eq!(
            response.header("Content-Length"),
            Some(response.body().len().to_string().as_str())
        );

        let mut decoded = String::new();
        GzDecoder::new(response.body()).read_to_string(&mut decoded).unwrap();
        assert_eq!(decoded, "hello");
    }

    #[test]
    fn test_echo_unsupported_encoding() {
        let req = request("GET /echo/hello HTTP/1.1\r\nAccept-Encoding: invalid-encoding\r\n\r\n");
        let response = echo(&req, "hello").unwrap();

        assert_eq!(response.header("Content-Encoding"), None);
        assert_eq!(response.body(), b"hello");
    }

    #[test]
    fn test_user_agent() {
        let req = request("GET /user-agent HTTP/1.1\r\nUser-Agent: test-client/1.0\r\n\r\n");
        assert_eq!(user_agent(&req).body(), b"test-client/1.0");
    }

    #[test]
    fn test_user_agent_absent() {
        let response = user_agent(&request("GET /user-agent HTTP/1.1\r\n\r\n"));
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
    }
}
