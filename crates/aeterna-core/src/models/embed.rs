//! Outbound webhook notification document.
//!
//! The notification sent to each delivery endpoint is a Discord-compatible
//! webhook payload: one lead embed describing the entry, followed by one
//! bare embed per supporting image. `WebhookMessage::build` is pure — the
//! timestamp is an input, so identical inputs always produce an identical
//! document.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use super::submission::SubmissionFields;

/// Title of the lead embed.
const EMBED_TITLE: &str = "Sanctum Aeterna Alliance Event";

/// Shared link that groups the gallery embeds into one message.
const GALLERY_LINK_URL: &str = "https://discord.com";

/// Webhooks render at most this many image embeds per message.
pub const MAX_GALLERY_IMAGES: usize = 9;

/// Rendering options carried over from configuration.
#[derive(Debug, Clone)]
pub struct EmbedOptions {
    pub color: u32,
    pub thumbnail_url: Option<String>,
    pub form_link: Option<String>,
}

impl From<&Config> for EmbedOptions {
    fn from(config: &Config) -> Self {
        Self {
            color: config.embed_color,
            thumbnail_url: config.avatar_image.clone(),
            form_link: config.form_link.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedThumbnail {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedImage {
    pub url: String,
}

/// One rich embed. The lead embed carries the full description; gallery
/// embeds carry only the grouping link and an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
}

/// Webhook message payload: `{content, embeds}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub content: String,
    pub embeds: Vec<Embed>,
}

impl WebhookMessage {
    /// Build the notification document for one validated submission.
    ///
    /// `captura_urls` holds the successfully uploaded supporting images in
    /// slot order (failed slots are simply absent). More than
    /// [`MAX_GALLERY_IMAGES`] entries are truncated.
    pub fn build(
        fields: &SubmissionFields,
        captura_urls: &[String],
        arsenal_url: &str,
        submission_number: u64,
        timestamp: DateTime<Utc>,
        options: &EmbedOptions,
    ) -> Self {
        let description = build_description(fields, captura_urls.len(), options);

        let lead = Embed {
            title: Some(EMBED_TITLE.to_string()),
            url: None,
            color: Some(options.color),
            description: Some(description),
            timestamp: Some(timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
            footer: Some(EmbedFooter {
                text: format!("Submission #{}", submission_number),
            }),
            thumbnail: options
                .thumbnail_url
                .as_ref()
                .map(|url| EmbedThumbnail { url: url.clone() }),
            image: Some(EmbedImage {
                url: arsenal_url.to_string(),
            }),
        };

        let mut embeds = vec![lead];
        for url in captura_urls.iter().take(MAX_GALLERY_IMAGES) {
            embeds.push(Embed {
                title: None,
                url: Some(GALLERY_LINK_URL.to_string()),
                color: None,
                description: None,
                timestamp: None,
                footer: None,
                thumbnail: None,
                image: Some(EmbedImage { url: url.clone() }),
            });
        }

        Self {
            content: " ".to_string(),
            embeds,
        }
    }
}

/// Assemble the lead-embed description in its fixed order: supporting-image
/// count (when any), arsenal confirmation, the identifying fields, optional
/// notes, optional call-to-action link.
fn build_description(fields: &SubmissionFields, captura_count: usize, options: &EmbedOptions) -> String {
    let mut sections: Vec<String> = Vec::new();

    if captura_count > 0 {
        sections.push(format!(
            "\u{1F4F8} {} Captura image{} uploaded",
            captura_count,
            if captura_count > 1 { "s" } else { "" }
        ));
    }

    sections.push("**Arsenal Screenshot**\n\u{2694}\u{FE0F} Image uploaded".to_string());
    sections.push(format!("**In-Game Name:**\n{}", fields.in_game_name));
    sections.push(format!("**Clan:**\n{}", fields.clan));
    sections.push(format!("**Warframe:**\n{}", fields.warframe));

    if let Some(notes) = &fields.notes {
        sections.push(format!("**Notes:**\n{}", notes));
    }

    let mut description = format!("New contest entry received!\n\n{}", sections.join("\n\n"));

    if let Some(link) = &options.form_link {
        description.push_str(&format!(
            "\n\n\u{1F4DD} **[Click here to submit your entry!]({})**",
            link
        ));
    }

    description
}
