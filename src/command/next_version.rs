//! Next semantic version command.
use crate::{
    bump::{self, Bump},
    result::Result,
};

/// Print the next version for the given current version and bump level.
pub fn execute(version: &str, level: Bump) -> Result<()> {
    println!("{}", bump::next_version(version, level)?);

    Ok(())
}
