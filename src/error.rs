//! # Errores del Servidor
//! src/error.rs
//!
//! Taxonomía de errores del servidor. Cada variante, salvo los errores de
//! transporte, se traduce a un código de estado HTTP.
//!
//! | Variante           | Status | Origen                                      |
//! |--------------------|--------|---------------------------------------------|
//! | `MalformedRequest` | 400    | request line ilegible, falta un segmento    |
//! | `NotFound`         | 404    | archivo inexistente, ruta desconocida       |
//! | `StorageFailure`   | 500    | error de lectura/escritura en el directorio |
//! | `EncodingFailure`  | 500    | fallo al comprimir el body                  |
//! | `TransportFailure` | -      | error del socket, se cierra la conexión     |

use crate::http::request::ParseError;
use crate::http::StatusCode;
use thiserror::Error;

/// Errores que puede producir el manejo de un request
#[derive(Debug, Error)]
pub enum Error {
    /// El request no se pudo interpretar
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// El recurso solicitado no existe
    #[error("not found")]
    NotFound,

    /// Fallo del almacenamiento de archivos
    #[error("storage failure: {0}")]
    StorageFailure(#[source] std::io::Error),

    /// Fallo al aplicar el Content-Encoding negociado
    #[error("encoding failure: {0}")]
    EncodingFailure(#[source] std::io::Error),

    /// Fallo al leer o escribir en el socket
    #[error("transport failure: {0}")]
    TransportFailure(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Código de estado con el que se responde a este error
    ///
    /// `TransportFailure` nunca se escribe al cliente; se mapea a 500 para
    /// que la función sea total.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MalformedRequest(_) => StatusCode::BadRequest,
            Error::NotFound => StatusCode::NotFound,
            Error::StorageFailure(_)
            | Error::EncodingFailure(_)
            | Error::TransportFailure(_) => {
                StatusCode::InternalServerError
            }
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::MalformedRequest(err.to_string())
    }
}
