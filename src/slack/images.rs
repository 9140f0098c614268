//! Screenshot extraction from pull request bodies.

use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};

use crate::forge::types::Pull;

/// HTML image tags: `<img ... alt="A" ... src="S" ...>`.
static IMAGE_HTML_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img.*?alt="(.*?)".*?src="(.*?)".*?>"#).unwrap()
});

/// Markdown images: `![A](S)`.
static IMAGE_MD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

/// A captioned image destined for a Slack image block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub caption: String,
    pub url: String,
}

/// Collect captioned images for the referenced PRs.
///
/// PRs are visited in the order of `numbers`; unknown numbers are skipped.
/// Within a PR, HTML-style matches come before markdown-style matches.
/// Badge images are never screenshots, so any URL containing `badge` is
/// dropped.
pub fn collect_images(pulls: &[Pull], numbers: &[u64]) -> Vec<Image> {
    let by_number: HashMap<u64, &Pull> =
        pulls.iter().map(|pull| (pull.number, pull)).collect();

    let mut images = vec![];

    for number in numbers {
        let Some(pull) = by_number.get(number) else {
            continue;
        };

        let body = pull.body.as_deref().unwrap_or("");

        for (alt, url) in find_images(body) {
            if url.contains("badge") {
                continue;
            }

            let caption = format!("{} #{}: {}", pull.title, pull.number, alt);
            // drops the trailing bare colon left by an empty alt text
            let caption =
                caption.trim_matches(|c| c == ':' || c == ' ').to_string();

            images.push(Image {
                caption,
                url: url.to_string(),
            });
        }
    }

    images
}

/// Find embedded images in a PR body: HTML matches first, then markdown.
fn find_images(body: &str) -> Vec<(&str, &str)> {
    let mut found = vec![];

    for caps in IMAGE_HTML_REGEX.captures_iter(body) {
        found.push((
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ));
    }

    for caps in IMAGE_MD_REGEX.captures_iter(body) {
        found.push((
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ));
    }

    found
}
