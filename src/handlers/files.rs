//! # Handlers de Archivos
//! src/handlers/files.rs
//!
//! - GET /files/<name>: contenido binario del archivo, o 404
//! - POST /files/<name>: crea o sobrescribe el archivo con el body, 201 o 500

use crate::error::Result;
use crate::http::{Request, Response, StatusCode};
use crate::storage::FileStore;

/// Handler para GET /files/<name>
///
/// Un archivo inexistente sale por `?` como `Error::NotFound` antes de
/// construir la respuesta 200.
pub fn file_get(store: &dyn FileStore, name: &str) -> Result<Response> {
    let contents = store.read(name)?;

    Ok(Response::new(StatusCode::Ok)
        .with_header("Content-Type", "application/octet-stream")
        .with_body_bytes(contents))
}

/// Handler para POST /files/<name>
pub fn file_create(store: &dyn FileStore, req: &Request, name: &str) -> Result<Response> {
    store.write(name, req.body())?;

    tracing::info!(file = name, bytes = req.body().len(), "File written");

    Ok(Response::new(StatusCode::Created).with_body(&StatusCode::Created.to_string()))
}
