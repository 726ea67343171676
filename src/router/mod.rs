//! # Sistema de Routing
//! src/router/mod.rs
//!
//! ```text
//! Request → Route::resolve → Handler → Response
//! ```
//!
//! Las rutas son un conjunto fijo. El primer segmento del path (y el
//! método, para `/files`) decide la variante de `Route`; el primer match
//! gana:
//!
//! | Segmento      | Método | Ruta         |
//! |---------------|--------|--------------|
//! | `echo`        | any    | `Echo`       |
//! | `user-agent`  | any    | `UserAgent`  |
//! | `files`       | GET    | `FileGet`    |
//! | `files`       | POST   | `FileCreate` |
//! | path == `/`   | any    | `Root`       |
//! | otro          | any    | `NotFound`   |

use crate::error::{Error, Result};
use crate::handlers;
use crate::http::{Method, Request, Response};
use crate::storage::FileStore;

/// Ruta resuelta a partir del path y el método
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/echo/<value>`
    Echo(&'a str),
    /// `/user-agent`
    UserAgent,
    /// `GET /files/<name>`
    FileGet(&'a str),
    /// `POST /files/<name>`
    FileCreate(&'a str),
    /// `/`
    Root,
    NotFound,
}

impl<'a> Route<'a> {
    /// Determina la ruta de un request
    ///
    /// Falta el segmento de valor de `/echo` o el nombre de `/files`:
    /// `Error::MalformedRequest`.
    ///
    /// # Ejemplo
    /// ```
    /// use rawhttp::http::Request;
    /// use rawhttp::router::Route;
    ///
    /// let request = Request::parse(b"GET /echo/abc HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(Route::resolve(&request).unwrap(), Route::Echo("abc"));
    /// ```
    pub fn resolve(request: &'a Request) -> Result<Self> {
        let path = request.path();

        let route = match path.segment(0) {
            Some("echo") => Route::Echo(value_segment(request, "echo value")?),
            Some("user-agent") => Route::UserAgent,
            Some("files") => match request.method() {
                Method::GET => Route::FileGet(file_name(request)?),
                Method::POST => Route::FileCreate(file_name(request)?),
                _ => Route::NotFound,
            },
            _ if path.full() == "/" => Route::Root,
            _ => Route::NotFound,
        };

        Ok(route)
    }
}

/// El segmento que sigue a la ruta; exige exactamente dos segmentos
fn value_segment<'a>(request: &'a Request, what: &str) -> Result<&'a str> {
    match request.path().segments() {
        [_, value] => Ok(value.as_str()),
        _ => Err(Error::MalformedRequest(format!(
            "expected {} in {}",
            what,
            request.path().full()
        ))),
    }
}

fn file_name<'a>(request: &'a Request) -> Result<&'a str> {
    let name = value_segment(request, "file name")?;

    if name.is_empty() || name == "." || name == ".." {
        return Err(Error::MalformedRequest(format!("invalid file name: {:?}", name)));
    }

    Ok(name)
}

/// Router que despacha cada request a su handler
///
/// El almacenamiento de archivos se inyecta al construirlo.
pub struct Router<S: FileStore> {
    store: S,
}

impl<S: FileStore> Router<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Almacenamiento usado por las rutas `/files`
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ejecuta el handler apropiado para un request
    ///
    /// Nunca falla: cualquier `Error` se convierte en la respuesta de error
    /// de su código de estado.
    pub fn route(&self, request: &Request) -> Response {
        let mut response = match self.dispatch(request) {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    Error::StorageFailure(_) | Error::EncodingFailure(_) => {
                        tracing::error!(path = request.path().full(), error = %err, "Handler failed")
                    }
                    _ => tracing::debug!(path = request.path().full(), error = %err, "Request rejected"),
                }
                Response::error(err.status())
            }
        };

        self.add_common_headers(&mut response);
        response
    }

    fn dispatch(&self, request: &Request) -> Result<Response> {
        match Route::resolve(request)? {
            Route::Echo(value) => handlers::echo(request, value),
            Route::UserAgent => Ok(handlers::user_agent(request)),
            Route::FileGet(name) => handlers::file_get(&self.store, name),
            Route::FileCreate(name) => handlers::file_create(&self.store, request, name),
            Route::Root => Ok(handlers::root()),
            Route::NotFound => Err(Error::NotFound),
        }
    }

    /// Headers comunes a todas las respuestas
    fn add_common_headers(&self, response: &mut Response) {
        response.add_header("Connection", "close");
    }
}
