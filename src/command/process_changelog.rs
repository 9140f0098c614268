//! Changelog entry merging command.
use std::io::{self, Read};

use crate::{changelog::merge, config::Config, result::Result};

/// Read changelog lines from stdin, merge duplicate entries, and print the
/// re-rendered lines with PR links.
pub fn execute(config: &Config) -> Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let output = merge::merge_lines(input.lines(), &config.repo_url())?;

    println!("{output}");

    Ok(())
}
