//! # Sistema de Routing
//! src/router/mod.rs
//!
//! El router evalúa las rutas en orden de registro y ejecuta el handler de
//! la primera que coincide. Si ninguna coincide, retorna 404 Not Found.
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! Rutas por defecto, en orden:
//!
//! | Matcher                 | Handler              |
//! |-------------------------|----------------------|
//! | path == `/`             | `root_handler`       |
//! | path contiene `/echo/`  | `echo_handler`       |
//! | path == `/user-agent`   | `user_agent_handler` |
//! | GET + prefijo `/files/` | `get_file_handler`   |
//! | POST + prefijo `/files/`| `post_file_handler`  |

use crate::handlers::{self, FileStore};
use crate::http::{find_bytes, Request, Response};
use tracing::debug;

/// Tipo de función handler
///
/// Un handler recibe el Request y el directorio de archivos configurado.
pub type Handler = fn(&Request, &FileStore) -> Response;

/// Prefijo de las rutas de archivos
pub const FILES_PREFIX: &str = "/files/";

/// Predicado que decide si una ruta atiende un request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Path exactamente igual, cualquier método
    Exact(String),

    /// Path que contiene la subcadena en cualquier posición, cualquier método
    Contains(String),

    /// Método exacto y path que empieza con el prefijo
    Prefix { method: String, prefix: String },
}

impl Route {
    pub fn exact(path: &str) -> Self {
        Route::Exact(path.to_string())
    }

    pub fn contains(fragment: &str) -> Self {
        Route::Contains(fragment.to_string())
    }

    pub fn prefix(method: &str, prefix: &str) -> Self {
        Route::Prefix {
            method: method.to_string(),
            prefix: prefix.to_string(),
        }
    }

    pub fn matches(&self, request: &Request) -> bool {
        let path = request.path();
        match self {
            Route::Exact(expected) => path == expected.as_bytes(),
            Route::Contains(fragment) => find_bytes(path, fragment.as_bytes()).is_some(),
            Route::Prefix { method, prefix } => {
                request.method() == method && path.starts_with(prefix.as_bytes())
            }
        }
    }
}

/// Router que mapea requests a handlers
pub struct Router {
    routes: Vec<(Route, Handler)>,

    /// Configuración inmutable compartida por todos los handlers
    files: FileStore,
}

impl Router {
    /// Crea un router vacío
    pub fn new(files: FileStore) -> Self {
        Self {
            routes: Vec::new(),
            files,
        }
    }

    /// Crea el router con las rutas del servidor
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::handlers::FileStore;
    /// use minihttp::http::{Request, StatusCode};
    /// use minihttp::router::Router;
    ///
    /// let router = Router::with_default_routes(FileStore::new("/tmp"));
    ///
    /// let request = Request::decode(b"GET /echo/hi HTTP/1.1\r\n\r\n").unwrap().request;
    /// let response = router.route(&request);
    ///
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.body(), b"hi");
    /// ```
    pub fn with_default_routes(files: FileStore) -> Self {
        let mut router = Self::new(files);

        router.register(Route::exact("/"), handlers::root_handler);
        router.register(Route::contains(handlers::ECHO_SEGMENT), handlers::echo_handler);
        router.register(Route::exact("/user-agent"), handlers::user_agent_handler);
        router.register(Route::prefix("GET", FILES_PREFIX), handlers::get_file_handler);
        router.register(Route::prefix("POST", FILES_PREFIX), handlers::post_file_handler);

        router
    }

    /// Registra una ruta al final de la lista
    pub fn register(&mut self, route: Route, handler: Handler) {
        self.routes.push((route, handler));
    }

    /// Ejecuta el handler de la primera ruta que coincide
    pub fn route(&self, request: &Request) -> Response {
        for (route, handler) in &self.routes {
            if route.matches(request) {
                debug!(?route, "ruta encontrada");
                return handler(request, &self.files);
            }
        }

        debug!(path = %String::from_utf8_lossy(request.path()), "ninguna ruta coincide");
        handlers::not_found_handler(request, &self.files)
    }

    pub fn files(&self) -> &FileStore {
        &self.files
    }
}
