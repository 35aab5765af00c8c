//! Batch draw: reads a draw request (roster, confirmed names, config) as JSON and prints the
//! report as JSON.
//! Run with: cargo run --bin balance -- request.json   (or pipe the request on stdin)
//! Environment overrides: BALANCE_FIELD_COUNT (5, 6 or "auto"), BALANCE_MAX_ITERATIONS,
//! BALANCE_TOLERANCE, BALANCE_SEED, BALANCE_TIME_LIMIT_MS. RUST_LOG controls logging.

use squad_balancer::{draw, DrawRequest};
use std::io::Read;
use std::str::FromStr;

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let value = std::env::var(key).ok()?;
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a valid value", key, value);
            None
        }
    }
}

/// Layer environment overrides on top of the request's own config.
fn apply_env(request: &mut DrawRequest) {
    match std::env::var("BALANCE_FIELD_COUNT").ok().as_deref().map(str::trim) {
        Some("auto") => request.auto_field_count = true,
        Some(_) => {
            if let Some(n) = env_parse("BALANCE_FIELD_COUNT") {
                request.config.field_count = n;
                request.auto_field_count = false;
            }
        }
        None => {}
    }
    if let Some(n) = env_parse("BALANCE_MAX_ITERATIONS") {
        request.config.max_iterations = n;
    }
    if let Some(t) = env_parse("BALANCE_TOLERANCE") {
        request.config.tolerance = t;
    }
    if let Some(seed) = env_parse("BALANCE_SEED") {
        request.config.seed = Some(seed);
    }
    if let Some(ms) = env_parse("BALANCE_TIME_LIMIT_MS") {
        request.config.time_limit_ms = Some(ms);
    }
}

fn read_input() -> std::io::Result<String> {
    match std::env::args().nth(1) {
        Some(path) if path != "-" => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let input = read_input()?;
    let mut request: DrawRequest = serde_json::from_str(&input)?;
    apply_env(&mut request);
    log::info!(
        "Drawing {} confirmed name(s) from a roster of {} ({} iterations max)",
        request.confirmed.len(),
        request.roster.len(),
        request.config.max_iterations
    );

    let report = match draw(&request) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Draw failed: {}", e);
            return Err(e.into());
        }
    };
    for squad in &report.squads {
        log::info!(
            "Squad {:?} {}: average {:.2}",
            squad.side,
            squad.formation_label,
            squad.average_score
        );
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
