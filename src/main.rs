//! # rawhttp - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, inicializa el logging y arranca el servidor.

use rawhttp::config::Config;
use rawhttp::logging;
use rawhttp::server::Server;

fn main() {
    let config = Config::new();

    logging::init(&config.log_level);
    tracing::info!("rawhttp v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    }
    config.log_summary();

    let server = Server::new(config);

    // Bloquea el thread principal atendiendo conexiones
    if let Err(e) = server.run() {
        tracing::error!(address = %server.address(), error = %e, "Fatal server error");
        std::process::exit(1);
    }
}
