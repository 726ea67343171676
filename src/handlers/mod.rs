//! # Handlers de Rutas
//!
//! Cada handler recibe el request (y lo que necesite de la ruta resuelta)
//! y produce una `Response`, o un `Error` que el router convierte en el
//! código de estado correspondiente.
//!
//! - **text**: `/`, `/echo/<value>`, `/user-agent`
//! - **files**: `GET` y `POST` de `/files/<name>`

pub mod files;
pub mod text;

pub use files::{file_create, file_get};
pub use text::{echo, root, user_agent};
