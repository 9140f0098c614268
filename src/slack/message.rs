//! Slack webhook payload types and the message builder.

use serde::Serialize;

use crate::{
    changelog::release::ReleaseNotes,
    config::Config,
    forge::traits::Forge,
    result::Result,
    slack::{images, markup},
};

/// A typed text object inside a block.
#[derive(Debug, Clone, Serialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl TextObject {
    fn mrkdwn(text: String) -> Self {
        Self {
            kind: "mrkdwn",
            text,
        }
    }

    fn plain(text: String) -> Self {
        Self {
            kind: "plain_text",
            text,
        }
    }
}

/// Slack layout blocks used by the two message templates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        text: TextObject,
    },
    Image {
        title: TextObject,
        image_url: String,
        alt_text: String,
    },
}

/// Slack webhook message payload.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub text: String,
    pub blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfurl_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfurl_media: Option<bool>,
}

/// Build the webhook payload for a release.
///
/// The default template produces a mrkdwn section carrying the transformed
/// and truncated release notes. The `images` template produces a gallery of
/// PR screenshots instead; when the release references no images the
/// result is `None` and no message should be sent.
pub async fn build_message(
    config: &Config,
    forge: &dyn Forge,
    release: &ReleaseNotes,
) -> Result<Option<Message>> {
    let user = forge.get_user(&config.actor).await?;
    let actor = user.name.clone().unwrap_or_else(|| config.actor.clone());

    let project = format!("{} {}", config.project_name, release.version);
    let project = project.trim().to_string();

    let verb = if config.project_type == "package" {
        "released"
    } else {
        "deployed"
    };

    let text = format!(
        "🚀 {actor} {verb} {project} to {}",
        config.target_name
    );

    if config.message_template == "images" {
        let pulls = forge.list_closed_pulls().await?;
        let found = images::collect_images(&pulls, &release.pulls);

        if found.is_empty() {
            return Ok(None);
        }

        let blocks = found
            .into_iter()
            .map(|image| Block::Image {
                title: TextObject::plain(image.caption.clone()),
                image_url: image.url,
                alt_text: image.caption,
            })
            .collect();

        return Ok(Some(Message {
            username: None,
            icon_url: None,
            text,
            blocks,
            unfurl_links: None,
            unfurl_media: None,
        }));
    }

    let header = format!(
        "[{}]({}) [{}]({}) {} [{}]({}) to [{}]({})",
        config.status_icon,
        config.run_url(),
        actor,
        config.actor_url(),
        verb,
        project,
        release.compare_url,
        config.target_name,
        config.target_url,
    );

    let body =
        markup::transform_markdown(&format!("{header}\n{}", release.notes));

    let mrkdwn = markup::truncate_message(
        &body,
        markup::MAX_MESSAGE_LENGTH,
        &release.changelog_url(&config.repo_url()),
    );

    Ok(Some(Message {
        username: Some(actor),
        icon_url: Some(user.avatar_url),
        text,
        blocks: vec![Block::Section {
            text: TextObject::mrkdwn(mrkdwn),
        }],
        unfurl_links: Some(false),
        unfurl_media: Some(false),
    }))
}
