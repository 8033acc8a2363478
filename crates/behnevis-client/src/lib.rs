//! # behnevis client
//!
//! Remote Finglish → Farsi transliteration over the behnevis HTTP API. The endpoint takes the raw
//! text as a `text/plain` POST body and answers with a JSON object mapping each input word to its
//! Farsi spelling. [`BehnevisClient`] implements [`Transliterate`] so it can stand in for the
//! local engine.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use transliterator::{convert, Transliterate};

/// Public behnevis conversion endpoint.
pub const DEFAULT_API_URL: &str =
    "https://9mkhzfaym3.execute-api.us-east-1.amazonaws.com/production/convert";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The endpoint only answers requests that look like they come from the behnevis web page.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64; rv:102.0) Gecko/20100101 Firefox/102.0",
        ),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://behnevis.com"));
    headers.insert(REFERER, HeaderValue::from_static("https://behnevis.com/"));
    headers
}

/// Rebuilds the text in input order. Each word is replaced by its converted form from the
/// response, or by the local engine's output when the response has none. Whitespace runs are
/// kept verbatim.
pub fn assemble(finglish: &str, words: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(finglish.len() * 2);
    let mut word_start = None;

    for (i, c) in finglish.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                push_word(&mut out, &finglish[start..i], words);
            }
            out.push(c);
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        push_word(&mut out, &finglish[start..], words);
    }
    out
}

fn push_word(out: &mut String, word: &str, words: &HashMap<String, String>) {
    match words.get(word) {
        Some(farsi) => out.push_str(farsi),
        None => out.push_str(&convert(word)),
    }
}

/// behnevis API client.
#[derive(Clone)]
pub struct BehnevisClient {
    http: reqwest::Client,
    api_url: String,
}

impl BehnevisClient {
    /// Client for [`DEFAULT_API_URL`].
    pub fn new() -> anyhow::Result<Self> {
        Self::with_api_url(DEFAULT_API_URL.to_string())
    }

    /// Client for a custom endpoint (e.g. a proxy or a mock server in tests).
    pub fn with_api_url(api_url: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(default_headers())
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, api_url })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Sends `finglish` to the API and returns the raw word → Farsi map.
    #[tracing::instrument(skip(self, finglish), fields(api_url = %self.api_url))]
    pub async fn convert_words(&self, finglish: &str) -> anyhow::Result<HashMap<String, String>> {
        tracing::info!(input_len = finglish.len(), "behnevis convert request");

        let response = self
            .http
            .post(&self.api_url)
            .body(finglish.to_string())
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("err sending request: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("behnevis returned HTTP {}", status);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| anyhow::anyhow!("err reading response body: {}", e))?;

        let words: HashMap<String, String> = serde_json::from_slice(&body)
            .map_err(|e| anyhow::anyhow!("err decoding response body: {}", e))?;

        tracing::info!(word_count = words.len(), "behnevis convert response");
        Ok(words)
    }
}

#[async_trait]
impl Transliterate for BehnevisClient {
    fn name(&self) -> &'static str {
        "behnevis"
    }

    async fn transliterate(&self, finglish: &str) -> anyhow::Result<String> {
        let words = self.convert_words(finglish).await?;
        Ok(assemble(finglish, &words))
    }
}
