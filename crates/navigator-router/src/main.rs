//! Character Navigator server binary
//!
//! Starts the HTTP server that analyzes uploaded EPUB files.

use navigator_router::{config::RouterConfig, start_server, RouterError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), RouterError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        RouterConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("No config file specified, using defaults");
        RouterConfig::default()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Character Navigator - EPUB character profile server");
    println!();
    println!("USAGE:");
    println!("    navigator-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: Port number (default: 8080)");
    println!("    - analysis_timeout_secs: Budget per upload (default: 120)");
    println!("    - max_upload_bytes: Request body limit");
    println!("    - [pipeline]: Extraction settings (thresholds, noise words, vocabulary)");
    println!();
    println!("ENDPOINTS:");
    println!("    POST /api/analyze   multipart form, field 'file'");
    println!("    GET  /health");
    println!();
}
