use reqwest::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    PUBLIC_URL, TRACK_URL, assert_full_page, mount_oembed, spawn_app, spawn_app_at,
    spawn_app_with_oembed_mock,
};

#[tokio::test]
async fn compose_page_renders_form() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.page_url("/"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert_full_page(&body);
    assert!(body.contains(r#"type="url" name="track""#));
    assert!(body.contains(r#"name="note""#));
    assert!(body.contains("Generate Link"));
    assert!(body.contains(r#"formaction="/play" formmethod="get""#));
    assert!(
        !body.contains("share-panel"),
        "Share panel should only appear after generating a link"
    );
}

#[tokio::test]
async fn generate_link_shows_share_panel() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(app.page_url("/"))
        .form(&[("track", TRACK_URL), ("note", "For you")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert_full_page(&body);
    assert!(body.contains("share-panel"));
    assert!(body.contains(&format!(
        "{PUBLIC_URL}/play?track=https%3A%2F%2Fopen.spotify.com%2Ftrack%2F4uLU6hMCjMI75M1A2tKUQC"
    )));
    assert!(body.contains("note=For+you"));
    assert!(body.contains("Share this link with someone you care about!"));
    assert!(body.contains("spotify:track:4uLU6hMCjMI75M1A2tKUQC"));
    assert!(body.contains(&format!(r#"value="{TRACK_URL}""#)), "Track input should keep its value");
}

#[tokio::test]
async fn generate_link_reports_missing_note() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(app.page_url("/"))
        .form(&[("track", TRACK_URL), ("note", "   ")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("a note is required"));
    assert!(!body.contains("share-panel"));
    assert!(body.contains(&format!(r#"value="{TRACK_URL}""#)));
}

#[tokio::test]
async fn generate_link_rejects_non_url_track() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(app.page_url("/"))
        .form(&[("track", "not a url"), ("note", "hi")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("track is not a valid URL"));
}

#[tokio::test]
async fn play_page_displays_note_without_preview() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.play_url(TRACK_URL, "Thinking of you ✨"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert_full_page(&body);
    assert!(body.contains("Thinking of you ✨"));
    assert!(body.contains("Play in Spotify"));
    assert!(body.contains(&format!(r#"href="{TRACK_URL}""#)));
    assert!(body.contains(r#"rel="noopener noreferrer""#));
    assert!(body.contains("Send a note and track"));
    assert!(body.contains("https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC"));
    assert!(
        !body.contains("track-preview"),
        "No metadata card expected when oEmbed is unreachable"
    );
}

#[tokio::test]
async fn play_page_shows_track_metadata() {
    let app = spawn_app_with_oembed_mock().await;
    mount_oembed(&app, TRACK_URL, "Never Gonna Give You Up").await;

    let client = reqwest::Client::new();
    let response = client
        .get(app.play_url(TRACK_URL, "For you"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("track-preview"));
    assert!(body.contains("Never Gonna Give You Up"));
    assert!(body.contains("via Spotify"));
    assert!(body.contains("https://image-cdn-ak.spotifycdn.com/image/ab67616d00001e02"));
}

#[tokio::test]
async fn play_page_falls_back_when_oembed_fails() {
    let app = spawn_app_with_oembed_mock().await;

    Mock::given(method("GET"))
        .and(path("/oembed"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(app.mock_server())
        .await;

    let client = reqwest::Client::new();
    let response = client
        .get(app.play_url(TRACK_URL, "Still here"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Still here"));
    assert!(!body.contains("track-preview"));
}

#[tokio::test]
async fn play_page_does_not_double_decode_note() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.play_url(TRACK_URL, "100%25 yours"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("100%25 yours"));
}

#[tokio::test]
async fn play_page_escapes_note_markup() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.play_url(TRACK_URL, "<script>alert(1)</script>"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert!(!body.contains("<script>alert(1)"));
    assert!(body.contains("&#60;script&#62;alert(1)"));
}

#[tokio::test]
async fn play_page_requires_both_parameters() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    for path in [
        "/play".to_string(),
        format!("/play?track={TRACK_URL}"),
        "/play?note=hello".to_string(),
        "/play?track=&note=hello".to_string(),
    ] {
        let response = client
            .get(app.page_url(&path))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "path: {path}");

        let body = response.text().await.expect("Failed to read body");
        assert_full_page(&body);
        assert!(body.contains("Missing track or note."), "path: {path}");
        assert!(body.contains("Please provide both track and note query parameters."));
    }
}

#[tokio::test]
async fn play_page_rejects_script_track() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.play_url("javascript:alert(1)", "hi"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("look right"));
    assert!(!body.contains(r#"href="javascript:"#));
}

#[tokio::test]
async fn pages_carry_security_headers() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.page_url("/"))
        .send()
        .await
        .expect("Failed to execute request");

    let headers = response.headers();
    assert_eq!(
        headers.get("x-frame-options").and_then(|v| v.to_str().ok()),
        Some("DENY")
    );
    assert_eq!(
        headers
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );
    let csp = headers
        .get("content-security-policy")
        .and_then(|v| v.to_str().ok())
        .expect("CSP header");
    assert!(csp.contains("frame-src https://open.spotify.com"));
}

#[tokio::test]
async fn play_page_uses_first_of_repeated_parameters() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let url = format!("{}&note=second&track=javascript:alert(1)", app.play_url(TRACK_URL, "first"));
    let response = client
        .get(url)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/html"))
    );

    let body = response.text().await.expect("Failed to read body");
    assert_full_page(&body);
    assert!(body.contains(r#"<p class="note">first</p>"#));
    assert!(!body.contains(">second<"));
    assert!(body.contains(&format!(r#"href="{TRACK_URL}""#)));
}

#[tokio::test]
async fn pages_follow_public_url_prefix() {
    let app = spawn_app_at("http://notedrop.test/notes/").await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.page_url("/notes"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains(r#"action="/notes""#));
    assert!(body.contains(r#"formaction="/notes/play""#));
    assert!(body.contains(r#"href="/notes/static/css/styles.css""#));

    let response = client
        .post(app.page_url("/notes"))
        .form(&[("track", TRACK_URL), ("note", "hi")])
        .send()
        .await
        .expect("Failed to execute request");
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("http://notedrop.test/notes/play?track="));

    let response = client
        .get(app.page_url("/notes/static/css/styles.css"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(app.page_url("/static/css/styles.css"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
