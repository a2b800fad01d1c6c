//! # Decodificación de Requests HTTP/1.1
//! src/http/request.rs
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/foo.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/8.4.0\r\n
//! \r\n
//! hello
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD SP PATH SP VERSION`, separado por un único espacio
//! 2. **Headers**: `Name: Value`, separados exactamente por `": "`
//! 3. **Terminador**: `\r\n\r\n` marca el fin de los headers
//! 4. **Body**: todos los bytes que quedan en el buffer tras el terminador,
//!    sin validar contra `Content-Length`
//!
//! El decoder es permisivo: una request line o un header malformado no aborta
//! la decodificación, queda registrado como [`LineError`] en [`Decoded`]. Solo
//! la ausencia del terminador (o un buffer vacío) es un [`DecodeError`].

use super::{find_bytes, split_bytes, Headers, CRLF, HEADER_DELIMITER, HEADER_TERMINATOR};
use thiserror::Error;
use tracing::warn;

/// Vista decodificada de un request HTTP
///
/// Los tokens no se validan: el método no se compara contra una lista
/// conocida, el path no se decodifica y la versión no se verifica.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Método HTTP tal como llegó (ej: "GET")
    method: String,

    /// Path crudo (ej: "/echo/abc"), sin exigir UTF-8
    path: Vec<u8>,

    /// Versión HTTP (ej: "HTTP/1.1")
    version: String,

    /// Headers, sensibles a mayúsculas, gana el último
    headers: Headers,

    /// Bytes posteriores al terminador de headers
    body: Vec<u8>,
}

/// Errores que impiden decodificar el request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No se leyó ningún byte
    #[error("empty request")]
    Empty,

    /// El buffer no contiene `\r\n\r\n`
    #[error("incomplete request: no header terminator in {0} bytes")]
    Incomplete(usize),
}

/// Línea descartada durante la decodificación (no fatal)
///
/// `line` es el índice (desde cero) de la línea dentro de la sección de
/// headers; la request line es siempre la línea 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("malformed request line {line}: {content:?}")]
    MalformedRequestLine { line: usize, content: String },

    #[error("malformed header at line {line}: {content:?}")]
    MalformedHeader { line: usize, content: String },
}

impl LineError {
    pub fn line(&self) -> usize {
        match self {
            LineError::MalformedRequestLine { line, .. } => *line,
            LineError::MalformedHeader { line, .. } => *line,
        }
    }
}

/// Resultado de [`Request::decode`]: el request más las líneas descartadas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub request: Request,
    pub diagnostics: Vec<LineError>,
}

impl Decoded {
    /// `true` si ninguna línea fue descartada
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl Request {
    /// Decodifica un request desde el buffer leído del socket
    ///
    /// La sección de headers se tokeniza sobre bytes. El path y los valores
    /// de los headers se conservan tal cual; el método, la versión y los
    /// nombres de headers tienen que ser UTF-8 o la línea se descarta.
    ///
    /// # Retorna
    ///
    /// * `Ok(Decoded)` - Request decodificado, posiblemente con diagnósticos
    /// * `Err(DecodeError)` - Buffer vacío o sin terminador de headers
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use minihttp::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let decoded = Request::decode(raw).unwrap();
    ///
    /// assert!(decoded.is_clean());
    /// assert_eq!(decoded.request.path(), b"/echo/abc");
    /// assert_eq!(decoded.request.header("Host"), Some("localhost"));
    /// ```
    pub fn decode(buffer: &[u8]) -> Result<Decoded, DecodeError> {
        if buffer.is_empty() {
            return Err(DecodeError::Empty);
        }

        // 1. Localizar el fin de los headers
        let body_start =
            find_header_end(buffer).ok_or(DecodeError::Incomplete(buffer.len()))?;

        // 2. Sección de headers sin el terminador
        let head = &buffer[..body_start - HEADER_TERMINATOR.len()];

        let mut request = Request::default();
        let mut diagnostics = Vec::new();

        for (index, line) in split_bytes(head, CRLF.as_bytes()).enumerate() {
            if index == 0 {
                // 3. Request line
                match parse_request_line(line) {
                    Some((method, path, version)) => {
                        request.method = method.to_string();
                        request.path = path.to_vec();
                        request.version = version.to_string();
                    }
                    None => diagnostics.push(LineError::MalformedRequestLine {
                        line: index,
                        content: String::from_utf8_lossy(line).into_owned(),
                    }),
                }
            } else {
                // 4. Headers
                match parse_header(line) {
                    Some((key, value)) => request.headers.insert(key, value),
                    None => diagnostics.push(LineError::MalformedHeader {
                        line: index,
                        content: String::from_utf8_lossy(line).into_owned(),
                    }),
                }
            }
        }

        for diagnostic in &diagnostics {
            warn!(%diagnostic, "línea descartada al decodificar request");
        }

        // 5. Body verbatim
        request.body = buffer[body_start..].to_vec();

        Ok(Decoded { request, diagnostics })
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Path crudo, byte a byte como llegó
    pub fn path(&self) -> &[u8] {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Obtiene un header específico como texto (comparación exacta)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Obtiene un header específico sin interpretar su valor
    pub fn header_bytes(&self, name: &str) -> Option<&[u8]> {
        self.headers.get_bytes(name)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Offset donde empieza el body, justo después de `\r\n\r\n`
pub(crate) fn find_header_end(buffer: &[u8]) -> Option<usize> {
    find_bytes(buffer, HEADER_TERMINATOR).map(|index| index + HEADER_TERMINATOR.len())
}

/// `METHOD SP PATH SP VERSION`: exactamente 3 tokens
fn parse_request_line(line: &[u8]) -> Option<(&str, &[u8], &str)> {
    let parts: Vec<&[u8]> = line.split(|&byte| byte == b' ').collect();
    match parts.as_slice() {
        [method, path, version] => {
            let method = std::str::from_utf8(*method).ok()?;
            let version = std::str::from_utf8(*version).ok()?;
            Some((method, *path, version))
        }
        _ => None,
    }
}

/// `KEY: VALUE`: exactamente 2 tokens alrededor de `": "`
fn parse_header(line: &[u8]) -> Option<(&str, &[u8])> {
    let parts: Vec<&[u8]> = split_bytes(line, HEADER_DELIMITER.as_bytes()).collect();
    match parts.as_slice() {
        [key, value] => Some((std::str::from_utf8(*key).ok()?, *value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_simple_get() {
        let decoded = Request::decode(b"GET / HTTP/1.1\r\n\r\n").unwrap();

        assert!(decoded.is_clean());
        assert_eq!(decoded.request.method(), "GET");
        assert_eq!(decoded.request.path(), b"/");
        assert_eq!(decoded.request.version(), "HTTP/1.1");
        assert!(decoded.request.headers().is_empty());
        assert!(decoded.request.body().is_empty());
    }

    #[test]
    fn test_decode_headers_and_body() {
        let raw = b"POST /files/a HTTP/1.1\r\nHost: localhost:4221\r\nContent-Length: 5\r\n\r\nhello";
        let decoded = Request::decode(raw).unwrap();
        let request = &decoded.request;

        assert!(decoded.is_clean());
        assert_eq!(request.method(), "POST");
        assert_eq!(request.header("Host"), Some("localhost:4221"));
        assert_eq!(request.header("Content-Length"), Some("5"));
        assert_eq!(request.body(), b"hello");
    }

    #[test]
    fn test_body_not_checked_against_content_length() {
        let raw = b"POST /x HTTP/1.1\r\nContent-Length: 2\r\n\r\nhello world";
        let decoded = Request::decode(raw).unwrap();

        assert_eq!(decoded.request.body(), b"hello world");
    }

    #[test]
    fn test_body_is_binary_safe() {
        let mut raw = b"POST /x HTTP/1.1\r\n\r\n".to_vec();
        raw.extend_from_slice(&[0x00, 0xFF, b'\r', b'\n', b'\r', b'\n', 0x7F]);
        let decoded = Request::decode(&raw).unwrap();

        assert_eq!(
            decoded.request.body(),
            &[0x00, 0xFF, b'\r', b'\n', b'\r', b'\n', 0x7F]
        );
    }

    #[test]
    fn test_duplicate_header_last_write_wins() {
        let raw = b"GET / HTTP/1.1\r\nA: 1\r\nA: 2\r\n\r\n";
        let decoded = Request::decode(raw).unwrap();

        assert_eq!(decoded.request.header("A"), Some("2"));
        assert_eq!(decoded.request.headers().len(), 1);
    }

    #[test]
    fn test_header_case_preserved() {
        let raw = b"GET / HTTP/1.1\r\nuser-agent: lower\r\n\r\n";
        let decoded = Request::decode(raw).unwrap();

        assert_eq!(decoded.request.header("user-agent"), Some("lower"));
        assert_eq!(decoded.request.header("User-Agent"), None);
    }

    #[test]
    fn test_header_value_whitespace_not_trimmed() {
        let raw = b"GET / HTTP/1.1\r\nX-Pad:  two spaces \r\n\r\n";
        let decoded = Request::decode(raw).unwrap();

        assert_eq!(decoded.request.header("X-Pad"), Some(" two spaces "));
    }

    #[test]
    fn test_malformed_header_dropped() {
        let raw = b"GET / HTTP/1.1\r\nHost: a\r\ngarbage\r\nAccept: */*\r\n\r\n";
        let decoded = Request::decode(raw).unwrap();

        assert_eq!(decoded.request.header("Host"), Some("a"));
        assert_eq!(decoded.request.header("Accept"), Some("*/*"));
        assert_eq!(decoded.request.headers().len(), 2);
        assert_eq!(
            decoded.diagnostics,
            vec![LineError::MalformedHeader {
                line: 2,
                content: "garbage".to_string()
            }]
        );
    }

    #[test]
    fn test_header_with_extra_delimiter_dropped() {
        let raw = b"GET / HTTP/1.1\r\nX-Time: 12: 30\r\n\r\n";
        let decoded = Request::decode(raw).unwrap();

        assert_eq!(decoded.request.header("X-Time"), None);
        assert_eq!(decoded.diagnostics.len(), 1);
        assert_eq!(decoded.diagnostics[0].line(), 1);
    }

    #[test]
    fn test_colon_without_space_dropped() {
        let raw = b"GET / HTTP/1.1\r\nHost:localhost\r\n\r\n";
        let decoded = Request::decode(raw).unwrap();

        assert!(decoded.request.headers().is_empty());
        assert!(!decoded.is_clean());
    }

    #[test]
    fn test_malformed_request_line_continues() {
        let raw = b"GET /\r\nUser-Agent: x\r\n\r\nbody";
        let decoded = Request::decode(raw).unwrap();
        let request = &decoded.request;

        assert_eq!(request.method(), "");
        assert!(request.path().is_empty());
        assert_eq!(request.version(), "");
        assert_eq!(request.header("User-Agent"), Some("x"));
        assert_eq!(request.body(), b"body");
        assert!(matches!(
            decoded.diagnostics.as_slice(),
            [LineError::MalformedRequestLine { line: 0, .. }]
        ));
    }

    #[test]
    fn test_request_line_double_space_is_malformed() {
        let decoded = Request::decode(b"GET  / HTTP/1.1\r\n\r\n").unwrap();

        assert_eq!(decoded.request.method(), "");
        assert_eq!(decoded.diagnostics.len(), 1);
    }

    #[test]
    fn test_method_not_validated() {
        let decoded = Request::decode(b"BREW /pot HTCPCP/1.0\r\n\r\n").unwrap();

        assert!(decoded.is_clean());
        assert_eq!(decoded.request.method(), "BREW");
        assert_eq!(decoded.request.version(), "HTCPCP/1.0");
    }

    #[test]
    fn test_path_not_decoded() {
        let decoded = Request::decode(b"GET /echo/a%20b?x=1 HTTP/1.1\r\n\r\n").unwrap();

        assert_eq!(decoded.request.path(), b"/echo/a%20b?x=1");
    }

    #[test]
    fn test_non_utf8_path_kept_verbatim() {
        let decoded = Request::decode(b"GET /echo/\xff HTTP/1.1\r\n\r\n").unwrap();

        assert!(decoded.is_clean());
        assert_eq!(decoded.request.path(), b"/echo/\xff");
    }

    #[test]
    fn test_distinct_non_utf8_paths_stay_distinct() {
        let a = Request::decode(b"POST /files/a\xfe HTTP/1.1\r\n\r\n").unwrap();
        let b = Request::decode(b"POST /files/a\xff HTTP/1.1\r\n\r\n").unwrap();

        assert_ne!(a.request.path(), b.request.path());
    }

    #[test]
    fn test_non_utf8_header_value_kept_verbatim() {
        let raw = b"GET /user-agent HTTP/1.1\r\nUser-Agent: bot\xff\r\n\r\n";
        let decoded = Request::decode(raw).unwrap();

        assert!(decoded.is_clean());
        assert_eq!(decoded.request.header_bytes("User-Agent"), Some(&b"bot\xff"[..]));
        assert_eq!(decoded.request.header("User-Agent"), None);
    }

    #[test]
    fn test_non_utf8_method_is_malformed() {
        let decoded = Request::decode(b"G\xffT / HTTP/1.1\r\nHost: a\r\n\r\n").unwrap();

        assert_eq!(decoded.request.method(), "");
        assert!(decoded.request.path().is_empty());
        assert_eq!(decoded.request.header("Host"), Some("a"));
        assert!(matches!(
            decoded.diagnostics.as_slice(),
            [LineError::MalformedRequestLine { line: 0, .. }]
        ));
    }

    #[test]
    fn test_non_utf8_header_name_is_malformed() {
        let decoded = Request::decode(b"GET / HTTP/1.1\r\nX-\xff: 1\r\n\r\n").unwrap();

        assert!(decoded.request.headers().is_empty());
        assert_eq!(decoded.diagnostics[0].line(), 1);
    }

    #[test]
    fn test_terminator_only() {
        let decoded = Request::decode(b"\r\n\r\n").unwrap();

        assert_eq!(decoded.request.method(), "");
        assert!(matches!(
            decoded.diagnostics.as_slice(),
            [LineError::MalformedRequestLine { line: 0, .. }]
        ));
    }

    #[test]
    fn test_empty_request() {
        assert_eq!(Request::decode(b""), Err(DecodeError::Empty));
    }

    #[test]
    fn test_missing_terminator_is_incomplete() {
        let raw = b"GET / HTTP/1.1\r\nHost: a\r\n";
        assert_eq!(Request::decode(raw), Err(DecodeError::Incomplete(raw.len())));
    }

    #[test]
    fn test_find_header_end() {
        assert_eq!(find_header_end(b"A\r\n\r\nB"), Some(5));
        assert_eq!(find_header_end(b"\r\n\r\n"), Some(4));
        assert_eq!(find_header_end(b"\r\n\r"), None);
    }
}
