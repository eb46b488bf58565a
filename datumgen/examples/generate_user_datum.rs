//! Generates `UserDatum.java` from a derived template.
//!
//! Run with: `cargo run --example generate_user_datum -- [output-dir]`
//!
//! Without an output directory the source is printed. Set `RUST_LOG=debug`
//! to see generation logs.

use datumgen::prelude::*;
use std::path::PathBuf;
use std::time::SystemTime;

#[allow(dead_code)]
#[derive(DatumTemplate)]
#[datum(package = "com.example", name = "UserDatumTemplate")]
struct User {
    /// Account identifier
    _user_id: i32,
    /// When the account was created
    _signup_date: SystemTime,
    _display_name: Option<String>,
    _roles: Vec<String>,
    #[datum(enumeration = "com.example.AccountStatus")]
    _status: i32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = GeneratorConfig::default().max_line_width(120);
    let unit = Generator::with_config(config).generate(&User::template_description())?;

    match std::env::args().nth(1).map(PathBuf::from) {
        Some(dir) => {
            let outcome = write_unit(&unit, &dir)?;
            if outcome.written {
                println!("Wrote {}", outcome.path.display());
            } else {
                println!("{} is up to date", outcome.path.display());
            }
        }
        None => print!("{}", unit.source),
    }

    Ok(())
}
