pub mod frequency;
pub mod readability;
pub mod replay;

use anyhow::{Context, Result};
use std::io::Read;

/// Read all of stdin as UTF-8 text.
pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}
