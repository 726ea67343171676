//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración del servidor con soporte para argumentos CLI y variables
//! de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./rawhttp --directory /tmp/files --port 4221
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! FILES_DIR=/tmp/files HTTP_PORT=4221 ./rawhttp
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Mínimo de bytes por request: debe caber al menos una request line
pub const MIN_REQUEST_BYTES: usize = 64;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "rawhttp")]
#[command(about = "Servidor HTTP/1.1 mínimo sobre sockets TCP crudos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Directorio desde donde se sirven y en donde se crean los archivos de /files
    #[arg(short, long, default_value = ".", env = "FILES_DIR")]
    pub directory: PathBuf,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Máximo de bytes que se leen por request (cabecera + body)
    #[arg(long = "max-request-bytes", default_value = "8192", env = "MAX_REQUEST_BYTES")]
    pub max_request_bytes: usize,

    /// Nivel de log por defecto si RUST_LOG no está definido
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use rawhttp::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.max_request_bytes < MIN_REQUEST_BYTES {
            return Err(format!(
                "Max request bytes must be >= {}",
                MIN_REQUEST_BYTES
            ));
        }

        if !self.directory.is_dir() {
            return Err(format!(
                "Files directory is not a directory: {}",
                self.directory.display()
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }

        Ok(())
    }

    /// Registra un resumen de la configuración efectiva
    pub fn log_summary(&self) {
        info!(
            address = %self.address(),
            directory = %self.directory.display(),
            max_request_bytes = self.max_request_bytes,
            log_level = %self.log_level,
            "Configuration loaded"
        );
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            host: "0.0.0.0".to_string(),
            port: 4221,
            max_request_bytes: 8192,
            log_level: "info".to_string(),
        }
    }
}
