//! # Logging
//! src/logging.rs
//!
//! Subscriber de `tracing` con salida formateada a stderr. El nivel se
//! controla con `RUST_LOG`; por defecto `minihttp=info`.
//!
//! ```bash
//! RUST_LOG=minihttp=debug ./minihttp --directory /tmp
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filtro usado cuando `RUST_LOG` no está definido
pub const DEFAULT_FILTER: &str = "minihttp=info";

/// Inicializa el subscriber global. Llamar una sola vez, desde `main`.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
