//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Un thread por conexión. Cada worker hace exactamente un intercambio:
//! un `read` de tamaño fijo, decode, dispatch, encode, un `write` y cierre.
//! Los workers no comparten estado mutable; el router se comparte en solo
//! lectura a través de un `Arc`.

use crate::config::Config;
use crate::handlers::FileStore;
use crate::http::{Request, Response, StatusCode, DEFAULT_VERSION};
use crate::router::Router;
use std::io::{self, Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, error, info, info_span, warn};

/// Capacidad del único `read` por conexión; lo que no entra se ignora
pub const READ_BUFFER_SIZE: usize = 1024;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let files = FileStore::new(&config.directory);
        let router = Router::with_default_routes(files);

        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Hace bind en la dirección configurada y atiende conexiones
    ///
    /// Solo retorna si el bind falla.
    pub fn run(&self) -> io::Result<()> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;
        info!(%address, "servidor escuchando");

        self.serve(listener)
    }

    /// Loop de accept sobre un listener ya abierto
    pub fn serve(&self, listener: TcpListener) -> io::Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    thread::spawn(move || {
                        let span = info_span!("conn", peer = %peer_addr);
                        let _enter = span.enter();

                        if let Err(e) = Self::handle_connection(stream, &router) {
                            error!(error = %e, "conexión abandonada");
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "error al aceptar conexión");
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión; el socket se cierra al salir en todos los casos
    ///
    /// Los bytes que no entran en el único `read` se ignoran.
    fn handle_connection<S: Read + Write>(mut stream: S, router: &Router) -> io::Result<()> {
        let start = Instant::now();

        let mut buffer = [0u8; READ_BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            debug!("conexión cerrada sin datos");
            return Ok(());
        }

        let response = Self::respond(&buffer[..bytes_read], router);

        stream.write_all(&response.encode())?;
        stream.flush()?;

        info!(
            status = %response.status(),
            bytes_read,
            latency_ms = start.elapsed().as_secs_f64() * 1000.0,
            "respuesta enviada"
        );

        Ok(())
    }

    /// Convierte los bytes leídos en la respuesta a enviar
    ///
    /// Las líneas malformadas no son fatales; un request sin terminador de
    /// headers se responde con `400 Bad Request`.
    pub fn respond(raw: &[u8], router: &Router) -> Response {
        match Request::decode(raw) {
            Ok(decoded) => {
                let request = decoded.request;
                info!(
                    method = request.method(),
                    path = %String::from_utf8_lossy(request.path()),
                    dropped_lines = decoded.diagnostics.len(),
                    "request"
                );
                router.route(&request)
            }
            Err(e) => {
                warn!(error = %e, "request no decodificable");
                Response::new(DEFAULT_VERSION).with_status(StatusCode::BadRequest)
            }
        }
    }
}
