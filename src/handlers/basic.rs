//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! - `/`: 200 OK sin body
//! - `/echo/{texto}`: devuelve `{texto}` como text/plain
//! - `/user-agent`: devuelve el header `User-Agent` del request

use super::files::FileStore;
use crate::http::{find_bytes, Request, Response, StatusCode};
use tracing::debug;

/// Segmento que activa el handler de echo
pub const ECHO_SEGMENT: &str = "/echo/";

pub const TEXT_PLAIN: &str = "text/plain";

/// Handler para `/`
pub fn root_handler(req: &Request, _files: &FileStore) -> Response {
    Response::for_request(req)
}

/// Handler para `/echo/{texto}`
///
/// El body es todo lo que sigue a la PRIMERA aparición de `/echo/` en el
/// path, así que `/x/echo/y` responde `y`.
pub fn echo_handler(req: &Request, _files: &FileStore) -> Response {
    let content = echo_content(req.path());

    Response::for_request(req)
        .with_header("Content-Type", TEXT_PLAIN)
        .with_body(content.to_vec())
}

fn echo_content(path: &[u8]) -> &[u8] {
    match find_bytes(path, ECHO_SEGMENT.as_bytes()) {
        Some(index) => &path[index + ECHO_SEGMENT.len()..],
        None => &[],
    }
}

/// Handler para `/user-agent`
///
/// El valor se devuelve byte a byte, sea o no UTF-8. Sin header
/// `User-Agent` el body queda vacío (`Content-Length: 0`).
pub fn user_agent_handler(req: &Request, _files: &FileStore) -> Response {
    let user_agent = req.header_bytes("User-Agent").unwrap_or_else(|| {
        debug!("request sin header User-Agent");
        &[]
    });

    Response::for_request(req)
        .with_header("Content-Type", TEXT_PLAIN)
        .with_body(user_agent.to_vec())
}

/// Respuesta cuando ninguna ruta coincide
pub fn not_found_handler(req: &Request, _files: &FileStore) -> Response {
    Response::for_request(req).with_status(StatusCode::NotFound)
}
