//! # Almacenamiento de Archivos
//! src/storage.rs
//!
//! Las rutas `/files/<name>` leen y escriben archivos bajo un directorio
//! raíz. El router no toca el sistema de archivos directamente: recibe un
//! `FileStore` al construirse.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Capacidad de lectura/escritura de archivos por nombre
///
/// `name` es siempre un único segmento de path ya validado por el router.
pub trait FileStore: Send + Sync {
    /// Lee el archivo completo. Si no existe retorna `Error::NotFound`.
    fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Crea o sobrescribe el archivo con `contents`
    fn write(&self, name: &str, contents: &[u8]) -> Result<()>;
}

/// `FileStore` respaldado por un directorio del sistema de archivos
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl FileStore for DirectoryStore {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        fs::read(self.resolve(name)).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound,
            _ => Error::StorageFailure(e),
        })
    }

    fn write(&self, name: &str, contents: &[u8]) -> Result<()> {
        fs::write(self.resolve(name), contents).map_err(Error::StorageFailure)
    }
}
