//! Tests for [`behnevis_client::BehnevisClient`] against a mockito server.
//!
//! Covers: request shape (method, content type, body), response assembly, and error surfacing
//! for non-2xx status and undecodable bodies.

use behnevis_client::BehnevisClient;
use transliterator::Transliterate;

/// **Test: Raw text is POSTed as text/plain and the word map is assembled in input order.**
#[tokio::test]
async fn transliterate_posts_text_and_assembles_words() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/convert")
        .match_header("content-type", "text/plain")
        .match_header("origin", "https://behnevis.com")
        .match_body("salam khoobi")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"khoobi":"خوبی","salam":"سلام"}"#)
        .create_async()
        .await;

    let client = BehnevisClient::with_api_url(format!("{}/convert", server.url())).unwrap();
    let farsi = client.transliterate("salam khoobi").await.unwrap();

    assert_eq!(farsi, "سلام خوبی");
    assert_eq!(client.name(), "behnevis");
    mock.assert_async().await;
}

/// **Test: Non-success status is an error.**
#[tokio::test]
async fn transliterate_fails_on_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/convert")
        .with_status(502)
        .create_async()
        .await;

    let client = BehnevisClient::with_api_url(format!("{}/convert", server.url())).unwrap();
    let err = client.transliterate("salam").await.unwrap_err();

    assert!(err.to_string().contains("502"));
}

/// **Test: A body that is not a string map is an error.**
#[tokio::test]
async fn transliterate_fails_on_bad_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/convert")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = BehnevisClient::with_api_url(format!("{}/convert", server.url())).unwrap();
    let err = client.transliterate("salam").await.unwrap_err();

    assert!(err.to_string().contains("decoding"));
}

/// **Test: Line breaks survive and a word missing from the response is converted locally.**
#[tokio::test]
async fn transliterate_keeps_lines_and_converts_missing_words() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/convert")
        .match_body("salam\nshoma khoobi")
        .with_status(200)
        .with_body(r#"{"salam":"سلام","khoobi":"خوبی"}"#)
        .create_async()
        .await;

    let client = BehnevisClient::with_api_url(format!("{}/convert", server.url())).unwrap();
    let farsi = client.transliterate("salam\nshoma khoobi").await.unwrap();

    assert_eq!(farsi, "سلام\nشوما خوبی");
}
