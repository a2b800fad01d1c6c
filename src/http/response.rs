//! # Construcción y Encoding de Respuestas HTTP
//! src/http/response.rs
//!
//! ## Formato en el wire
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use minihttp::http::{Response, StatusCode};
//!
//! let response = Response::new("HTTP/1.1")
//!     .with_header("Content-Type", "text/plain")
//!     .with_body(b"abc".to_vec());
//!
//! let bytes = response.encode();
//! assert!(bytes.ends_with(b"\r\n\r\nabc"));
//! assert_eq!(response.status(), StatusCode::Ok);
//! ```

use super::{Headers, Request, StatusCode, CRLF, HEADER_DELIMITER};

/// Representa una respuesta HTTP lista para serializar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Versión HTTP, normalmente copiada del request
    version: String,

    /// Código de estado; el reason phrase sale de la tabla
    status: StatusCode,

    /// Headers, emitidos en orden de inserción
    headers: Headers,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta `200 OK` sin headers ni body
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            status: StatusCode::Ok,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Crea una respuesta con la misma versión que el request
    pub fn for_request(request: &Request) -> Self {
        Self::new(request.version())
    }

    /// Fija el código de estado (y con él su reason phrase)
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.set_status(status);
        self
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe.
    pub fn with_header(mut self, name: &str, value: impl AsRef<[u8]>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Versión mutable de [`Response::with_header`]
    pub fn add_header(&mut self, name: &str, value: impl AsRef<[u8]>) {
        self.headers.insert(name, value);
    }

    /// Establece el cuerpo de la respuesta
    ///
    /// Automáticamente agrega el header `Content-Length` con la longitud
    /// en bytes, así que una respuesta construida así siempre es coherente.
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::http::Response;
    ///
    /// let response = Response::new("HTTP/1.1").with_body(vec![0x00, 0xFF]);
    /// assert_eq!(response.headers().get("Content-Length"), Some("2"));
    /// ```
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self.headers
            .insert("Content-Length", self.body.len().to_string());
        self
    }

    /// Serializa la respuesta a los bytes exactos del wire
    ///
    /// - Status line: `{version} {code} {reason}\r\n`
    /// - Headers: `{name}: {value}\r\n` en orden de inserción
    /// - Línea vacía: `\r\n`, incluso sin headers
    /// - Body: verbatim
    ///
    /// No valida nada: un body sin `Content-Length` correcto produce una
    /// respuesta incorrecta en el wire, y es responsabilidad de quien la arma.
    pub fn encode(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        // 1. Status line
        let status_line = format!(
            "{} {} {}{}",
            self.version,
            self.status.as_u16(),
            self.status.reason_phrase(),
            CRLF
        );
        result.extend_from_slice(status_line.as_bytes());

        // 2. Headers
        for (name, value) in self.headers.iter() {
            result.extend_from_slice(name.as_bytes());
            result.extend_from_slice(HEADER_DELIMITER.as_bytes());
            result.extend_from_slice(value);
            result.extend_from_slice(CRLF.as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(CRLF.as_bytes());

        // 4. Body
        result.extend_from_slice(&self.body);

        result
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
