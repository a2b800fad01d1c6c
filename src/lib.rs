//! # minihttp
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo sobre TCP, escrito desde cero: decodifica un
//! único request por conexión, lo despacha según método y path, y serializa
//! la respuesta de vuelta al socket.
//!
//! ## Arquitectura
//!
//! ```text
//! bytes ─▶ http::Request::decode ─▶ router::Router ─▶ handlers ─▶ http::Response::encode ─▶ bytes
//! ```
//!
//! - `http`: formato de wire (decoder, encoder, status codes, headers)
//! - `router`: rutas evaluadas en orden, gana la primera que coincide
//! - `handlers`: raíz, echo, user-agent y archivos
//! - `server`: listener TCP, un thread por conexión
//! - `config`: flags de CLI
//! - `logging`: inicialización de `tracing`
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use minihttp::config::Config;
//! use minihttp::server::Server;
//!
//! let config = Config { directory: "/tmp/files".into() };
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
