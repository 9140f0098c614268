//! Merges consecutive changelog entries that share a title.

use regex::Regex;
use std::sync::LazyLock;

use crate::result::Result;

/// Matches a PR-linked changelog entry line: `- <title> #<number>`.
static ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- (.*) #([0-9]+)$").unwrap());

/// Bump-marker annotation in an entry title, e.g. ` (major)` or ` #minor`.
static MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+#?[\(\[]?(major|minor|patch)[\]\)]?").unwrap()
});

/// One changelog entry: a normalized title plus the PR numbers merged into
/// it, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub pulls: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Text(String),
    Entry(Entry),
}

/// Merge consecutive PR-linked entries with identical titles and render
/// their PR references as markdown links against `repo_url`.
///
/// Titles are compared after stripping any bump-marker annotation. Lines
/// that are not PR-linked entries pass through unchanged and break the
/// current grouping run, so a repeated title further down starts a fresh
/// entry.
pub fn merge_lines<'a, I>(lines: I, repo_url: &str) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut merged: Vec<Line> = vec![];

    for line in lines {
        let Some(caps) = ENTRY_REGEX.captures(line) else {
            merged.push(Line::Text(line.to_string()));
            continue;
        };

        let title = MARKER_REGEX.replace_all(&caps[1], "").to_string();
        let number: u64 = caps[2].parse()?;

        if let Some(Line::Entry(previous)) = merged.last_mut()
            && previous.title == title
        {
            previous.pulls.push(number);
            continue;
        }

        merged.push(Line::Entry(Entry {
            title,
            pulls: vec![number],
        }));
    }

    let rendered: Vec<String> = merged
        .iter()
        .map(|line| match line {
            Line::Text(text) => text.clone(),
            Line::Entry(entry) => render_entry(entry, repo_url),
        })
        .collect();

    Ok(rendered.join("\n"))
}

fn render_entry(entry: &Entry, repo_url: &str) -> String {
    let links: Vec<String> = entry
        .pulls
        .iter()
        .map(|number| format!("[#{number}]({repo_url}/pull/{number})"))
        .collect();

    format!("- {} {}", entry.title, links.join(" "))
}
