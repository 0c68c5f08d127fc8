//! Compare two items by price per unit from the command line
//! Usage: cargo run --bin compare_items -- <first> <second>
//!
//! Each argument is either inline JSON or a path to a JSON file describing a
//! named item, e.g. '{"name": "2L", "quantity": 1, "items_per_purchase": 1,
//! "weight": 2, "unit_type": "liters", "price": 3.49}'

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use unit_price::models::NamedItem;
use unit_price::tools::comparison;

fn load_item(arg: &str) -> Result<NamedItem, Box<dyn std::error::Error>> {
    let json = if Path::new(arg).is_file() {
        std::fs::read_to_string(arg)?
    } else {
        arg.to_string()
    };
    Ok(serde_json::from_str(&json)?)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("unit_price=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        let program = args.first().map(String::as_str).unwrap_or("compare_items");
        eprintln!("Usage: {} <first-item> <second-item>", program);
        return Ok(ExitCode::from(2));
    }

    let first = load_item(&args[1])?;
    let second = load_item(&args[2])?;

    match comparison::compare_items(&first, &second) {
        Ok(response) => {
            for line in &response.message {
                println!("{}", line);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
