use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use termcolor::{ColorChoice, StandardStream};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Print a command result as pretty JSON on stdout.
///
/// Commands with a human-friendly rendering check [`is_json`] first and
/// write to [`stdout`] themselves in the human branch.
pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(ColorChoice::Auto)
}
