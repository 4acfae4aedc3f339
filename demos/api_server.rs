// API server example
// Author: Gabriel Demetrios Lafis

use census_toy_service::{
    api::{Server, ServerConfig},
    utils::init_logging,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    init_logging(log::LevelFilter::Info).unwrap();

    // Create server config
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        workers: num_cpus::get(),
        enable_cors: true,
    };

    // Create and run server
    println!("Starting API server at http://{}:{}", config.host, config.port);
    println!("POST a census batch to /toy-census");
    println!("Press Ctrl+C to stop");

    let server = Server::new(config);
    server.run().await
}
