//! # Handlers del Servidor
//!
//! Cada handler recibe el request decodificado y el [`FileStore`]
//! configurado, y retorna una Response.
//!
//! - **basic**: raíz, echo y user-agent
//! - **files**: lectura/escritura bajo el directorio configurado

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::{get_file_handler, post_file_handler, FileStore};
