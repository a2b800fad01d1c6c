//! # Lectura y Escritura de Archivos
//! src/handlers/files.rs
//!
//! - `GET /files/{name}`: lee `{directory}/{name}`
//! - `POST /files/{name}`: escribe el body en `{directory}/{name}`
//!
//! Los archivos se direccionan solo por su nombre base: cualquier componente
//! de directorio del path se descarta, así `/files/a/b/c.txt` y
//! `/files/c.txt` apuntan al mismo archivo.

use crate::http::{Request, Response, StatusCode};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Content-Type de los archivos servidos
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Directorio raíz de `/files/*`, fijado una vez al arrancar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ruta en disco para un path de request
    ///
    /// El nombre es el último segmento del path, ignorando las `/` finales
    /// (`/files/foo/` apunta a `foo`). Los bytes del nombre se usan tal cual,
    /// así que nombres distintos en el wire son archivos distintos en disco.
    /// Retorna `None` si no queda nombre o si es `.`/`..`.
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::handlers::files::FileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = FileStore::new("/tmp/data");
    /// assert_eq!(
    ///     store.resolve(b"/files/nested/dir/foo.txt"),
    ///     Some(PathBuf::from("/tmp/data/foo.txt"))
    /// );
    /// assert_eq!(store.resolve(b"/files/foo/"), Some(PathBuf::from("/tmp/data/foo")));
    /// assert_eq!(store.resolve(b"/files/.."), None);
    /// ```
    pub fn resolve(&self, request_path: &[u8]) -> Option<PathBuf> {
        let trimmed = match request_path.iter().rposition(|&byte| byte != b'/') {
            Some(last) => &request_path[..=last],
            None => return None,
        };
        let name = trimmed.rsplit(|&byte| byte == b'/').next().unwrap_or(b"");
        if name.is_empty() || name == b"." || name == b".." {
            return None;
        }
        Some(self.root.join(file_name(name)?))
    }

    /// Lee el archivo; `Ok(None)` si no existe
    pub fn read(&self, request_path: &[u8]) -> io::Result<Option<Vec<u8>>> {
        let path = match self.resolve(request_path) {
            Some(path) => path,
            None => return Ok(None),
        };

        if !path.exists() {
            return Ok(None);
        }

        fs::read(&path).map(Some)
    }

    /// Escribe (trunca y sobrescribe) el archivo
    ///
    /// No hay locking: dos escrituras concurrentes al mismo nombre compiten.
    pub fn write(&self, request_path: &[u8], contents: &[u8]) -> io::Result<()> {
        let path = self.resolve(request_path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "invalid file name in path: {}",
                    String::from_utf8_lossy(request_path)
                ),
            )
        })?;

        fs::write(&path, contents)
    }
}

#[cfg(unix)]
fn file_name(name: &[u8]) -> Option<&OsStr> {
    use std::os::unix::ffi::OsStrExt;
    Some(OsStr::from_bytes(name))
}

// Fuera de unix un nombre de archivo no es una secuencia de bytes arbitraria
#[cfg(not(unix))]
fn file_name(name: &[u8]) -> Option<&OsStr> {
    std::str::from_utf8(name).ok().map(OsStr::new)
}

/// Handler para `GET /files/{name}`
///
/// Un error de lectura sobre un archivo existente se registra y se responde
/// `200 OK` con body vacío.
pub fn get_file_handler(req: &Request, files: &FileStore) -> Response {
    let response = Response::for_request(req);
    let path = String::from_utf8_lossy(req.path());

    match files.read(req.path()) {
        Ok(Some(contents)) => {
            debug!(%path, bytes = contents.len(), "archivo leído");
            response
                .with_header("Content-Type", OCTET_STREAM)
                .with_body(contents)
        }
        Ok(None) => {
            debug!(%path, "archivo no encontrado");
            response.with_status(StatusCode::NotFound)
        }
        Err(e) => {
            error!(%path, error = %e, "error leyendo archivo");
            response
                .with_header("Content-Type", OCTET_STREAM)
                .with_body(Vec::new())
        }
    }
}

/// Handler para `POST /files/{name}`
///
/// Siempre responde `201 Created`; un error de escritura solo se registra.
pub fn post_file_handler(req: &Request, files: &FileStore) -> Response {
    let path = String::from_utf8_lossy(req.path());

    match files.write(req.path(), req.body()) {
        Ok(()) => debug!(%path, bytes = req.body().len(), "archivo escrito"),
        Err(e) => warn!(%path, error = %e, "error escribiendo archivo"),
    }

    Response::for_request(req).with_status(StatusCode::Created)
}
