//! # Negociación de Content-Encoding
//! src/http/encoding.rs
//!
//! El único encoding soportado es gzip. El cliente lo pide con
//! `Accept-Encoding`, cuyos valores se separan por `", "`; basta con que uno
//! de ellos sea exactamente `gzip`.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Encodings que el servidor sabe aplicar al body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
}

impl ContentEncoding {
    /// Elige el encoding a partir del header `Accept-Encoding`
    ///
    /// # Ejemplo
    /// ```
    /// use rawhttp::http::ContentEncoding;
    ///
    /// assert_eq!(
    ///     ContentEncoding::negotiate(Some("deflate, gzip")),
    ///     Some(ContentEncoding::Gzip)
    /// );
    /// assert_eq!(ContentEncoding::negotiate(Some("br")), None);
    /// assert_eq!(ContentEncoding::negotiate(None), None);
    /// ```
    pub fn negotiate(accept_encoding: Option<&str>) -> Option<Self> {
        accept_encoding?
            .split(", ")
            .any(|token| token == "gzip")
            .then_some(ContentEncoding::Gzip)
    }

    /// Valor para el header `Content-Encoding`
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Gzip => "gzip",
        }
    }

    /// Codifica el body completo
    pub fn encode(&self, body: &[u8]) -> std::io::Result<Vec<u8>> {
        match self {
            ContentEncoding::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(body)?;
                encoder.finish()
            }
        }
    }
}
