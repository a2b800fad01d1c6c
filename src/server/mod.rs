//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Servidor TCP que:
//! 1. Escucha en `0.0.0.0:4221`
//! 2. Acepta conexiones y lanza un thread por cada una
//! 3. Lee y decodifica un único request
//! 4. Genera y envía la response, y cierra la conexión

pub mod tcp;

pub use tcp::{Server, READ_BUFFER_SIZE};
