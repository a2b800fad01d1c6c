//! # Configuración del Servidor
//! src/config.rs
//!
//! Un único flag de CLI, `--directory`, con el directorio raíz de
//! `/files/*`. También puede venir de la variable `MINIHTTP_DIRECTORY`.
//!
//! ```bash
//! ./minihttp --directory /tmp/files
//! MINIHTTP_DIRECTORY=/tmp/files ./minihttp
//! ```
//!
//! La configuración se construye una vez en `main` y se pasa por valor al
//! servidor; no hay estado global.

use clap::Parser;
use std::convert::Infallible;
use std::path::PathBuf;

/// Dirección fija de escucha
pub const LISTEN_ADDRESS: &str = "0.0.0.0:4221";

/// Configuración del servidor HTTP
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "minihttp")]
#[command(about = "Servidor HTTP/1.1 mínimo: echo, user-agent y archivos")]
#[command(version)]
pub struct Config {
    /// Directorio donde se leen/escriben los archivos de /files/*
    #[arg(long, default_value = "", env = "MINIHTTP_DIRECTORY", value_parser = parse_directory)]
    pub directory: PathBuf,
}

// El parser por defecto de `PathBuf` rechaza el valor vacío, que acá
// significa "directorio actual"
fn parse_directory(value: &str) -> Result<PathBuf, Infallible> {
    Ok(PathBuf::from(value))
}

impl Config {
    /// Crea la configuración parseando los argumentos de la línea de comandos
    pub fn new() -> Self {
        Config::parse()
    }

    /// Dirección completa para bind
    ///
    /// # Ejemplo
    /// ```rust
    /// use minihttp::config::Config;
    ///
    /// assert_eq!(Config::default().address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> &'static str {
        LISTEN_ADDRESS
    }
}
