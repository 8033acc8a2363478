//! Transliteration backends: [`Transliterate`] trait and the in-process [`LocalTransliterator`].
//!
//! Remote implementations (e.g. `behnevis-client`) implement the same trait so the handler can
//! switch backends from config.

use async_trait::async_trait;

use crate::engine::convert;

/// Converts Finglish text to Farsi. Implementations may do I/O; the local engine never fails.
#[async_trait]
pub trait Transliterate: Send + Sync {
    /// Short backend name for logs (e.g. "local", "behnevis").
    fn name(&self) -> &'static str;

    async fn transliterate(&self, finglish: &str) -> anyhow::Result<String>;
}

/// Backend running the rule-table engine in process.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTransliterator;

impl LocalTransliterator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transliterate for LocalTransliterator {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn transliterate(&self, finglish: &str) -> anyhow::Result<String> {
        let farsi = convert(finglish);
        tracing::debug!(
            input_len = finglish.len(),
            output_len = farsi.len(),
            "Local transliteration done"
        );
        Ok(farsi)
    }
}
