//! Bump level classification and semantic version incrementing.

use clap::ValueEnum;
use semver::Version;
use std::fmt;

use crate::{error::HeraldError, result::Result};

/// Semantic-version bump levels.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Bump {
    Major,
    Minor,
    #[default]
    Patch,
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bump::Major => write!(f, "major"),
            Bump::Minor => write!(f, "minor"),
            Bump::Patch => write!(f, "patch"),
        }
    }
}

/// Scan changelog lines for bump-level markers.
///
/// A case-insensitive `(major)` or `#major` marker wins immediately and
/// stops the scan. A `(minor)` / `#minor` marker is recorded but scanning
/// continues so that a later major marker still overrides it. Anything else
/// classifies as a patch release.
pub fn classify<I, S>(lines: I) -> Bump
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut bump = Bump::Patch;

    for line in lines {
        let line = line.as_ref().to_lowercase();

        if line.contains("(major)") || line.contains("#major") {
            return Bump::Major;
        }

        if line.contains("(minor)") || line.contains("#minor") {
            bump = Bump::Minor;
        }
    }

    bump
}

/// Compute the next version for a bump level.
///
/// Accepts an optional leading `v` on the current version. Prerelease and
/// build metadata are cleared by every bump so the result is always a
/// stable version strictly greater than the input.
pub fn next_version(current: &str, level: Bump) -> Result<Version> {
    let current = Version::parse(current.trim_start_matches('v'))
        .map_err(HeraldError::InvalidVersion)?;

    let next = match level {
        Bump::Major => Version::new(current.major + 1, 0, 0),
        Bump::Minor => Version::new(current.major, current.minor + 1, 0),
        Bump::Patch => {
            Version::new(current.major, current.minor, current.patch + 1)
        }
    };

    Ok(next)
}
