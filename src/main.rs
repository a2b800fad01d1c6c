//! # minihttp - Entry Point
//! src/main.rs

use minihttp::config::Config;
use minihttp::logging;
use minihttp::server::Server;
use tracing::{error, info};

fn main() {
    logging::init();

    let config = Config::new();
    info!(directory = %config.directory.display(), "servidor iniciado");

    let server = Server::new(config);

    // Solo retorna si el bind falla
    if let Err(e) = server.run() {
        error!(error = %e, "no se pudo hacer bind en el puerto 4221");
        std::process::exit(1);
    }
}
