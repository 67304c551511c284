//! Admin tool entry point.
//!
//! Reads connection settings from the environment (and `.env`), then runs
//! one index lifecycle command.

use std::env;
use std::fs;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use search_store_admin::{AdminError, Dependencies};
use search_store_shared::IndexMetadata;

const USAGE: &str = "Usage: search-store-admin <command>\n\
    \n\
    Commands:\n\
    \x20 create <index> <mapping.json>   Create an index from a mapping file\n\
    \x20 exists <index>                  Print true/false\n\
    \x20 describe <index>                Print the index mapping JSON\n\
    \x20 delete <index>                  Delete an index";

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenv::dotenv();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if env::var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false) {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn run() -> Result<(), AdminError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let deps = Dependencies::new()?;
    let client = deps.client;

    match args.as_slice() {
        ["create", name, mapping_path] => {
            let content = fs::read_to_string(mapping_path)?;
            client
                .create_index(name, &IndexMetadata::new(content))
                .await?;
            println!("Created index {}", name);
            Ok(())
        }
        ["exists", name] => {
            let exists = client.index_exists(name).await?;
            println!("{}", exists);
            Ok(())
        }
        ["describe", name] => {
            let metadata = client.index_metadata(name).await?;
            // Pretty-print when the blob parses; otherwise show it as-is
            match serde_json::from_str::<serde_json::Value>(metadata.content()) {
                Ok(value) => println!("{:#}", value),
                Err(_) => println!("{}", metadata.content()),
            }
            Ok(())
        }
        ["delete", name] => {
            client.delete_index(name).await?;
            println!("Deleted index {}", name);
            Ok(())
        }
        _ => Err(AdminError::usage(USAGE)),
    }
}
