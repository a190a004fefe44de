use std::env;
use std::error;
use std::process::exit;

use reqwest::Url;

// Readiness probe for container health checks.
fn main() -> Result<(), Box<dyn error::Error>> {
    let target = env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:8080/health".to_string());
    let url = Url::parse(&target)?;

    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        eprintln!(
            "Health check against {} failed with status {}",
            target,
            response.status()
        );
        exit(1);
    }

    Ok(())
}
