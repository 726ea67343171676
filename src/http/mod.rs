//! # Módulo HTTP
//!
//! Implementa el subconjunto de HTTP/1.1 que usa el servidor, sin
//! librerías de alto nivel:
//!
//! - Parsing de requests desde bytes crudos
//! - Serialización de responses con `Content-Length` calculado
//! - Códigos de estado
//! - Negociación de gzip vía `Accept-Encoding`
//!
//! No hay keep-alive, chunked encoding ni pipelining: un request por
//! conexión.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```

pub mod encoding;  // Negociación de gzip
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use encoding::ContentEncoding;
pub use request::{Method, Path, Request};
pub use response::Response;
pub use status::StatusCode;
