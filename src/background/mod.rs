//! Decorative board backgrounds.
//!
//! A background is a cosmetic image behind the grid. It never touches game
//! logic: the session stores an opaque `ImageRef` and hands it to the
//! renderer. Providers may fail for any reason (no credential, network,
//! no image in the response); `request_background` turns every failure into
//! `None` and logs it, so callers never have to handle a provider error.
//!
//! Providers are synchronous. A host that wants the request off its UI
//! thread runs it elsewhere and passes the result to
//! `Session::set_background`.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Prompt used when the caller does not supply one.
pub const DEFAULT_BACKGROUND_PROMPT: &str = "A cute, top-down view of a kindergarten classroom map \
for a board game. Light wooden floor, a colorful rug in the center, simple toy blocks, bright \
lighting. Vector art style, clean, high contrast. No text.";

/// Opaque reference to a background image (URL or data URL).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap an image URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Build a PNG data URL from base64-encoded image bytes.
    ///
    /// ```
    /// use bee_grid::background::ImageRef;
    ///
    /// let image = ImageRef::png_base64("iVBORw0KGgo=");
    /// assert_eq!(image.as_str(), "data:image/png;base64,iVBORw0KGgo=");
    /// ```
    pub fn png_base64(data: impl AsRef<str>) -> Self {
        Self(format!("data:image/png;base64,{}", data.as_ref()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Data URLs can be megabytes; only show the head.
        let head: String = self.0.chars().take(48).collect();
        if head.len() < self.0.len() {
            write!(f, "{head}...")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Why a provider could not produce a background.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackgroundError {
    #[error("no credential configured for the image service")]
    MissingCredential,
    #[error("image request failed: {0}")]
    Request(String),
    #[error("response contained no image")]
    NoImage,
}

/// Source of background images.
pub trait BackgroundProvider {
    /// Produce an image for the given prompt.
    fn generate(&self, prompt: &str) -> Result<ImageRef, BackgroundError>;
}

impl<F> BackgroundProvider for F
where
    F: Fn(&str) -> Result<ImageRef, BackgroundError>,
{
    fn generate(&self, prompt: &str) -> Result<ImageRef, BackgroundError> {
        self(prompt)
    }
}

/// Provider for builds without an image service.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBackground;

impl BackgroundProvider for NoBackground {
    fn generate(&self, _prompt: &str) -> Result<ImageRef, BackgroundError> {
        Err(BackgroundError::MissingCredential)
    }
}

/// Ask a provider for a background, swallowing any failure.
///
/// Uses `DEFAULT_BACKGROUND_PROMPT` when `prompt` is `None`.
pub fn request_background<P>(provider: &P, prompt: Option<&str>) -> Option<ImageRef>
where
    P: BackgroundProvider + ?Sized,
{
    let prompt = prompt.unwrap_or(DEFAULT_BACKGROUND_PROMPT);
    match provider.generate(prompt) {
        Ok(image) => {
            debug!(image = %image, "background ready");
            Some(image)
        }
        Err(err) => {
            warn!(error = %err, "background unavailable, keeping default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_background_provider() {
        assert_eq!(
            NoBackground.generate("anything"),
            Err(BackgroundError::MissingCredential)
        );
        assert_eq!(request_background(&NoBackground, None), None);
    }

    #[test]
    fn test_closure_provider_receives_default_prompt() {
        let provider = |prompt: &str| -> Result<ImageRef, BackgroundError> {
            assert_eq!(prompt, DEFAULT_BACKGROUND_PROMPT);
            Ok(ImageRef::new("https://example.test/map.png"))
        };

        let image = request_background(&provider, None);
        assert_eq!(image, Some(ImageRef::new("https://example.test/map.png")));
    }

    #[test]
    fn test_custom_prompt() {
        let provider =
            |prompt: &str| -> Result<ImageRef, BackgroundError> { Ok(ImageRef::new(format!("img:{prompt}"))) };
        let image = request_background(&provider, Some("meadow"));

        assert_eq!(image.unwrap().as_str(), "img:meadow");
    }

    #[test]
    fn test_failures_become_none() {
        let failing = |_: &str| -> Result<ImageRef, BackgroundError> {
            Err(BackgroundError::Request("timeout".into()))
        };
        assert_eq!(request_background(&failing, None), None);

        let empty = |_: &str| -> Result<ImageRef, BackgroundError> { Err(BackgroundError::NoImage) };
        assert_eq!(request_background(&empty, None), None);
    }

    #[test]
    fn test_display_truncates_data_urls() {
        let image = ImageRef::png_base64("A".repeat(200));
        let shown = image.to_string();

        assert!(shown.ends_with("..."));
        assert!(shown.len() < 60);
        assert_eq!(ImageRef::new("short").to_string(), "short");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BackgroundError::Request("dns".into()).to_string(),
            "image request failed: dns"
        );
    }
}
