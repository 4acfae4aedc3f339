// Census Toy Service - Main executable
// Author: Gabriel Demetrios Lafis

use clap::{App, Arg, SubCommand};
use log::info;

use census_toy_service::{
    api::{Server, ServerConfig},
    utils::{init_logging, Config},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Parse command line arguments
    let matches = App::new("Census Toy Service")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Gabriel Demetrios Lafis")
        .about("A census toy aggregation service")
        .arg(
            Arg::with_name("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file")
                .takes_value(true),
        )
        .subcommand(
            SubCommand::with_name("server")
                .about("Run the API server")
                .arg(
                    Arg::with_name("host")
                        .long("host")
                        .value_name("HOST")
                        .help("Sets the server host")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("port")
                        .short('p')
                        .long("port")
                        .value_name("PORT")
                        .help("Sets the server port")
                        .takes_value(true),
                ),
        )
        .get_matches();

    // Load configuration
    let config = if let Some(config_path) = matches.value_of("config") {
        match Config::from_file(config_path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error loading config file: {}", err);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Initialize logging
    if let Err(err) = init_logging(config.log_level_filter()) {
        eprintln!("Error initializing logger: {}", err);
    }

    // Handle subcommands
    if let Some(matches) = matches.subcommand_matches("server") {
        // Override config with command line arguments
        let host = matches.value_of("host").unwrap_or(&config.server.host);
        let port = matches
            .value_of("port")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(config.server.port);

        // Create server config
        let server_config = ServerConfig {
            host: host.to_string(),
            port,
            workers: config.server.workers.unwrap_or_else(num_cpus::get),
            enable_cors: config.server.enable_cors,
        };

        // Create and run server
        info!("Starting server at {}:{}", host, port);
        let server = Server::new(server_config);
        server.run().await?;
    } else {
        println!("No subcommand specified. Use --help for usage information.");
    }

    Ok(())
}
