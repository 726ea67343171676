//! # rawhttp
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado directamente sobre sockets TCP,
//! sin librerías HTTP. Cada conexión lleva un único request.
//!
//! ## Arquitectura
//!
//! ```text
//! server (TCP) → http::Request::parse → router::Route → handlers → Response::to_bytes → server
//! ```
//!
//! - `http`: Parsing de requests, serialización de responses, gzip
//! - `router`: Resolución de la ruta y despacho a handlers
//! - `handlers`: Lógica de cada ruta (echo, user-agent, files, ping)
//! - `storage`: Lectura/escritura de archivos bajo el directorio raíz
//! - `server`: Accept loop, lectura del request y escritura de la respuesta
//! - `config`, `logging`, `error`: configuración CLI, tracing, errores
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use rawhttp::config::Config;
//! use rawhttp::server::Server;
//!
//! let server = Server::new(Config::default());
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
pub mod storage;

pub use error::{Error, Result};
