//! Write the booking API's OpenAPI document
//!
//! Usage:
//!   cargo run --bin export_openapi                      # stdout
//!   cargo run --bin export_openapi -- --output api.json # file

use anyhow::Context;
use utoipa::OpenApi;

use hotel_orders::gateway::openapi::ApiDoc;

fn main() -> anyhow::Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .context("failed to serialize OpenAPI document")?;

    let args: Vec<String> = std::env::args().collect();
    match args.iter().position(|a| a == "--output") {
        Some(i) => {
            let path = args.get(i + 1).context("--output needs a path")?;
            std::fs::write(path, &json).with_context(|| format!("failed to write {}", path))?;
            eprintln!("OpenAPI document written to {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
