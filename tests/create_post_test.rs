//! Integration tests for publishing a post with and without media.

mod common;

use common::{post_json, TestEnv};
use serde_json::json;
use zoneblog::media::SelectedFile;
use zoneblog::routes::Route;
use zoneblog::view::MediaStage;

#[tokio::test]
async fn test_create_then_upload_in_order() {
    let env = TestEnv::start().await;
    env.seed_session("tok");
    env.respond("POST", "/posts", 201, post_json("p-42", 0, false)).await;
    let mut with_media = post_json("p-42", 0, false);
    with_media["mediaUrl"] = json!("/uploads/p-42.png");
    with_media["mediaType"] = json!("image");
    env.respond("POST", "/posts/p-42/media", 200, with_media).await;

    let client = env.client();
    let mut form = client.create_post_form();
    form.title = "Sunset".to_string();
    form.description = "From the roof".to_string();
    assert!(form.select_file(SelectedFile::new("cat.png", "image/png", b"\x89PNG".to_vec())).await);

    let outcome = form.publish().await.expect("published");
    assert_eq!(outcome.route, Route::Home);
    assert!(outcome.latest_post().has_media());

    assert_eq!(
        env.request_lines().await,
        vec!["POST /api/v1/posts".to_string(), "POST /api/v1/posts/p-42/media".to_string()]
    );

    let requests = env.server.received_requests().await.unwrap();
    let content_type = requests[1]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[1].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"cat.png\""));
}

#[tokio::test]
async fn test_upload_failure_keeps_post_and_navigates() {
    let env = TestEnv::start().await;
    env.seed_session("tok");
    env.respond("POST", "/posts", 201, post_json("p-43", 0, false)).await;
    env.respond("POST", "/posts/p-43/media", 500, json!({"message": "Storage full"})).await;

    let client = env.client();
    let mut form = client.create_post_form();
    form.title = "Clip".to_string();
    form.description = "Short video".to_string();
    form.select_file(SelectedFile::new("clip.mp4", "video/mp4", b"mp4".to_vec())).await;

    let outcome = form.publish().await.expect("post still created");
    assert_eq!(outcome.post.id, "p-43");
    assert!(matches!(outcome.media, MediaStage::Failed(_)));
    assert_eq!(outcome.route, Route::Home);
    assert!(form.error().is_none());
}

#[tokio::test]
async fn test_create_failure_never_uploads() {
    let env = TestEnv::start().await;
    env.seed_session("tok");
    env.respond("POST", "/posts", 400, json!({"message": "Title is required"})).await;

    let client = env.client();
    let mut form = client.create_post_form();
    form.title = "x".to_string();
    form.description = "y".to_string();
    form.select_file(SelectedFile::new("cat.png", "image/png", b"png".to_vec())).await;

    assert!(form.publish().await.is_none());
    assert_eq!(form.error(), Some("Title is required"));
    assert_eq!(env.request_lines().await, vec!["POST /api/v1/posts".to_string()]);
}

#[tokio::test]
async fn test_pdf_rejected_before_any_request() {
    let env = TestEnv::start().await;
    env.seed_session("tok");

    let client = env.client();
    let mut form = client.create_post_form();
    assert!(!form.select_file(SelectedFile::new("doc.pdf", "application/pdf", b"%PDF".to_vec())).await);
    assert_eq!(form.error(), Some("Please select an image or video file"));
    assert!(form.preview().is_none());
    assert!(env.request_lines().await.is_empty());
}
