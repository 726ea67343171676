//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP: un thread por conexión, un request por
//! conexión. Cada thread lee, parsea, despacha, escribe y cierra. Un error
//! en una conexión no afecta a las demás.

use crate::config::Config;
use crate::error::Error;
use crate::http::{Request, Response};
use crate::router::Router;
use crate::server::reader::read_request;
use crate::storage::DirectoryStore;
use std::io::{self, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Servidor HTTP/1.1 sobre sockets TCP crudos
pub struct Server {
    config: Config,
    router: Arc<Router<DirectoryStore>>,
}

impl Server {
    /// Construye el servidor; el directorio raíz de `/files` se fija aquí
    pub fn new(config: Config) -> Self {
        let router = Router::new(DirectoryStore::new(&config.directory));

        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Escucha en `config.address()` y atiende conexiones indefinidamente
    pub fn run(&self) -> io::Result<()> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;

        info!(address = %address, "Listening for connections");

        self.serve(listener)
    }

    /// Bucle de accept sobre un listener ya creado
    ///
    /// Los errores de accept se registran y el bucle continúa.
    pub fn serve(&self, listener: TcpListener) -> io::Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let limit = self.config.max_request_bytes;

                    let peer_addr = stream.peer_addr().ok();
                    debug!(peer = ?peer_addr, "Accepted connection");

                    thread::spawn(move || {
                        if let Err(e) = handle_connection(stream, &router, limit) {
                            error!(peer = ?peer_addr, error = %e, "Connection failed");
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }

        Ok(())
    }

    /// Dirección configurada (host:port)
    pub fn address(&self) -> String {
        self.config.address()
    }
}

/// Atiende una conexión: un request, una respuesta, cierre
///
/// Si la lectura falla no se intenta responder; el error sube como
/// `TransportFailure` y el socket se cierra al salir.
pub fn handle_connection(
    mut stream: TcpStream,
    router: &Router<DirectoryStore>,
    limit: usize,
) -> Result<(), Error> {
    let start = Instant::now();

    let buffer = read_request(&mut stream, limit)?;
    if buffer.is_empty() {
        debug!("Peer closed without sending a request");
        return Ok(());
    }

    let (response, method, path) = match Request::parse(&buffer) {
        Ok(request) => {
            let response = router.route(&request);
            (
                response,
                request.method().as_str().to_string(),
                request.path().full().to_string(),
            )
        }
        Err(e) => {
            warn!(error = %e, bytes = buffer.len(), "Failed to parse request");
            let response = Response::error(Error::from(e).status()).with_header("Connection", "close");
            (response, "-".to_string(), "-".to_string())
        }
    };

    stream.write_all(&response.to_bytes())?;
    stream.flush()?;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Request served"
    );

    Ok(())
}
