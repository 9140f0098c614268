//! Bump level classification command.
use std::io::{self, BufRead};

use crate::{bump, result::Result};

/// Read changelog text from stdin and print the bump level.
pub fn execute() -> Result<()> {
    let stdin = io::stdin();
    let lines: Vec<String> =
        stdin.lock().lines().collect::<io::Result<_>>()?;

    println!("{}", bump::classify(&lines));

    Ok(())
}
