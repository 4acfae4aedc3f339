// API server implementation
// Author: Gabriel Demetrios Lafis

use std::net::SocketAddr;

use actix_cors::Cors;
use actix_web::middleware::Condition;
use actix_web::{App, HttpServer};
use log::info;

use super::routes;

/// API server configuration
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: num_cpus::get(),
            enable_cors: false,
        }
    }
}

/// API server
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a new API server
    pub fn new(config: ServerConfig) -> Self {
        Server { config }
    }

    /// Run the API server.
    ///
    /// Requests are stateless and share nothing, so workers need no
    /// coordination beyond the listener itself.
    pub async fn run(&self) -> std::io::Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = addr
            .parse()
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

        let enable_cors = self.config.enable_cors;

        info!("Starting server at http://{}", addr);

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(Condition::new(enable_cors, cors))
                .configure(routes::configure)
        })
        .workers(self.config.workers)
        .bind(addr)?
        .run()
        .await
    }
}
