//! Configuration module
//!
//! Environment-backed configuration for the intake service, read once at
//! process start and passed into the handler state.

use std::env;

const DEFAULT_IMGBB_ENDPOINT: &str = "https://api.imgbb.com/1/upload";
const DEFAULT_EMBED_COLOR: &str = "#596D69";
const DEFAULT_AVATAR_IMAGE: &str = "https://i.imgur.com/9aiqU0r.png";
const DEFAULT_MAX_IMAGE_SIZE_MB: usize = 8;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// Delivery endpoints for the entry notification. May be empty; dispatch
    /// fails at request time, matching the upstream behavior.
    pub webhook_urls: Vec<String>,
    /// Image host credential. May be empty; uploads fail at request time.
    pub imgbb_api_key: String,
    pub imgbb_endpoint: String,
    /// Embed accent color, parsed from a `#RRGGBB` hex string.
    pub embed_color: u32,
    pub avatar_image: Option<String>,
    pub form_link: Option<String>,
    pub starting_count: u64,
    pub max_image_size_bytes: usize,
    pub http_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = split_list(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()));

        let webhook_urls = split_list(&env::var("DISCORD_WEBHOOKS").unwrap_or_default());

        let embed_color_hex =
            env::var("EMBED_COLOR").unwrap_or_else(|_| DEFAULT_EMBED_COLOR.to_string());
        let embed_color = parse_hex_color(&embed_color_hex)
            .map_err(|e| anyhow::anyhow!("EMBED_COLOR: {}", e))?;

        let max_image_size_mb = env::var("MAX_IMAGE_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_IMAGE_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_IMAGE_SIZE_MB);

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8787".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            webhook_urls,
            imgbb_api_key: env::var("IMGBB_API_KEY").unwrap_or_default(),
            imgbb_endpoint: env::var("IMGBB_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_IMGBB_ENDPOINT.to_string()),
            embed_color,
            avatar_image: env::var("AVATAR_IMAGE")
                .ok()
                .filter(|s| !s.is_empty())
                .or_else(|| Some(DEFAULT_AVATAR_IMAGE.to_string())),
            form_link: env::var("FORM_LINK").ok().filter(|s| !s.is_empty()),
            starting_count: env::var("SUBMISSION_COUNT")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0),
            max_image_size_bytes: max_image_size_mb * 1024 * 1024,
            http_timeout_seconds: env::var("HTTP_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_HTTP_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_image_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_IMAGE_SIZE_MB must be greater than 0"));
        }

        if self.imgbb_endpoint.trim().is_empty() {
            return Err(anyhow::anyhow!("IMGBB_ENDPOINT must not be empty"));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse a `#RRGGBB` (or bare `RRGGBB`) hex string into a color value.
pub fn parse_hex_color(raw: &str) -> Result<u32, anyhow::Error> {
    let digits = raw.trim().trim_start_matches('#');
    if digits.is_empty() || digits.len() > 6 {
        return Err(anyhow::anyhow!(
            "expected an RGB hex string like '#596D69', got '{}'",
            raw
        ));
    }
    u32::from_str_radix(digits, 16)
        .map_err(|_| anyhow::anyhow!("expected an RGB hex string like '#596D69', got '{}'", raw))
}
