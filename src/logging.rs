//! # Logging Estructurado
//! src/logging.rs
//!
//! Inicializa `tracing` con un subscriber `fmt`. El filtro sale de
//! `RUST_LOG` si está definido; si no, del nivel configurado.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Instala el subscriber global
///
/// Llamadas repetidas no hacen nada (el primer subscriber se queda).
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
