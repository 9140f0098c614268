//! Extracts the latest release from a changelog document.

use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};

use crate::{error::HeraldError, result::Result};

/// Release heading format: `## [<version>](<compare_url>) (<date>)`.
static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^#+ \[(?P<version>.*?)\]\((?P<compare_url>.*?)\) \((?P<date>.*?)\)$",
    )
    .unwrap()
});

/// Fixed 0-indexed line of the latest release heading. The changelog
/// generator always emits a title, a description, and a blank separator
/// before the first release section.
const HEADING_LINE: usize = 4;

/// The latest release parsed from a changelog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    pub version: String,
    pub compare_url: String,
    pub date: String,
    /// Notes body: trimmed lines up to the first blank line, joined by `\n`.
    pub notes: String,
    /// PR numbers referenced via links in the notes body, in order of
    /// appearance, not deduplicated.
    pub pulls: Vec<u64>,
}

impl ReleaseNotes {
    /// Read and parse the changelog file at `path`.
    pub fn from_file(path: &Path, repo_url: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, repo_url)
    }

    /// Parse the fixed-offset release heading and collect the notes body.
    ///
    /// The heading must sit at line 5 of the document and match the
    /// generated `#+ [version](compare_url) (date)` format; anything else
    /// is a parse error. The body is every non-blank line after the
    /// separator line, stopping at the first blank line.
    pub fn parse(content: &str, repo_url: &str) -> Result<Self> {
        let lines: Vec<&str> = content.lines().collect();

        let heading = lines.get(HEADING_LINE).ok_or_else(|| {
            HeraldError::parse("changelog is missing a release heading")
        })?;

        let caps = HEADING_REGEX.captures(heading).ok_or_else(|| {
            HeraldError::parse(format!(
                "release heading does not match expected format: {heading}"
            ))
        })?;

        let mut notes = vec![];

        for line in lines.iter().skip(HEADING_LINE + 2) {
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            notes.push(line);
        }

        let notes = notes.join("\n");

        let pull_regex = Regex::new(&format!(
            r"{}/pull/([0-9]+)",
            regex::escape(repo_url)
        ))?;

        let mut pulls = vec![];
        for caps in pull_regex.captures_iter(&notes) {
            pulls.push(caps[1].parse::<u64>()?);
        }

        Ok(Self {
            version: caps["version"].to_string(),
            compare_url: caps["compare_url"].to_string(),
            date: caps["date"].to_string(),
            notes,
            pulls,
        })
    }

    /// Anchor link for this release's heading in the rendered changelog,
    /// used as the target of the truncation "more" link.
    pub fn changelog_url(&self, repo_url: &str) -> String {
        let anchor =
            format!("{}-{}", self.version, self.date).replace('.', "");
        format!("{repo_url}/blob/master/CHANGELOG.md#{anchor}")
    }
}
