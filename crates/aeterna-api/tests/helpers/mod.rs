//! Test helpers: build the router against mocked external services.
//!
//! Run from the workspace root: `cargo test -p aeterna-api`.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aeterna_core::Config;

/// Full path of the submission endpoint.
pub fn entries_path() -> String {
    aeterna_api::constants::entries_path()
}

/// Config pointing the uploader at a mock image host and the dispatcher at
/// the given endpoints.
pub fn test_config(imgbb_endpoint: String, webhook_urls: Vec<String>) -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        webhook_urls,
        imgbb_api_key: "test-key".to_string(),
        imgbb_endpoint,
        embed_color: 0x596D69,
        avatar_image: Some("https://i.imgur.com/9aiqU0r.png".to_string()),
        form_link: None,
        starting_count: 0,
        max_image_size_bytes: 8 * 1024 * 1024,
        http_timeout_seconds: 5,
    }
}

/// In-process test server over the real router.
pub fn setup_test_app(config: Config) -> TestServer {
    let (_state, router) =
        aeterna_api::setup::initialize_app(config).expect("Failed to initialize app");
    TestServer::new(router).expect("Failed to create test server")
}

/// An image file part. The bytes are ASCII so mock matchers can inspect the
/// multipart body; the handler never decodes image data.
pub fn image_part(filename: &str) -> Part {
    Part::bytes(format!("fake-image-bytes-{}", filename).into_bytes())
        .file_name(filename)
        .mime_type("image/png")
}

/// A complete, valid submission form with only the arsenal image.
pub fn complete_form() -> MultipartForm {
    MultipartForm::new()
        .add_text("inGameName", "Tenno01")
        .add_text("clan", "Aeterna")
        .add_text("warframe", "Excalibur")
        .add_text("notes", "")
        .add_part("arsenalImage", image_part("arsenal.png"))
}

/// Mount a catch-all image-host mock that returns `url` for every upload.
pub async fn mount_imgbb_success(server: &MockServer, url: &str) {
    Mock::given(method("POST"))
        .and(path("/1/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "url": url },
            "success": true,
            "status": 200
        })))
        .mount(server)
        .await;
}

/// Mount a webhook endpoint answering with the given status.
pub async fn mount_webhook(server: &MockServer, hook_path: &str, status: u16) {
    Mock::given(method("POST"))
        .and(path(hook_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// The image-host upload URL on a mock server.
pub fn imgbb_endpoint(server: &MockServer) -> String {
    format!("{}/1/upload", server.uri())
}
