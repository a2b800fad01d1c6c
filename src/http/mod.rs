//! # Módulo HTTP
//!
//! Manejo del formato de wire de HTTP/1.1, sin librerías de alto nivel:
//!
//! - Decodificación de requests (request line, headers, body)
//! - Encoding determinista de responses
//! - Tabla de status codes
//! - Mapa de headers con política explícita
//!
//! ## Alcance
//!
//! Un request por conexión, leído con un único `read` de tamaño fijo. No hay
//! keep-alive, chunked transfer encoding, pipelining ni continuación de
//! headers.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /user-agent HTTP/1.1\r\n
//! User-Agent: curl/8.4.0\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 10\r\n
//! \r\n
//! curl/8.4.0
//! ```

pub mod headers;
pub mod request;
pub mod response;
pub mod status;

pub use headers::Headers;
pub use request::{DecodeError, Decoded, LineError, Request};
pub use response::Response;
pub use status::StatusCode;

/// Terminador de línea
pub const CRLF: &str = "\r\n";

/// Fin de la sección de headers
pub const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Separador exacto entre nombre y valor de un header
pub const HEADER_DELIMITER: &str = ": ";

/// Versión usada cuando el request no pudo decodificarse
pub const DEFAULT_VERSION: &str = "HTTP/1.1";

/// Posición de la primera aparición de `needle` dentro de `haystack`
///
/// Paths y headers se manejan como bytes crudos, sin pasar por `str`.
pub(crate) fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Equivalente a `str::split` sobre bytes: conserva los tramos vacíos
pub(crate) fn split_bytes<'a>(
    input: &'a [u8],
    delimiter: &'a [u8],
) -> impl Iterator<Item = &'a [u8]> + 'a {
    let mut rest = Some(input);
    std::iter::from_fn(move || {
        let current = rest?;
        match find_bytes(current, delimiter).filter(|_| !delimiter.is_empty()) {
            Some(index) => {
                rest = Some(&current[index + delimiter.len()..]);
                Some(&current[..index])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
