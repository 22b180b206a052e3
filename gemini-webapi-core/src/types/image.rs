use crate::config::constants::{defaults, model};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an image attached to a candidate came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    /// Retrieved from the web and cited by the answer
    #[default]
    Web,
    /// Produced by the model itself
    Generated,
}

/// A single image returned alongside a candidate answer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub kind: ImageKind,
}

fn default_title() -> String {
    model::DEFAULT_IMAGE_TITLE.to_string()
}

impl Image {
    pub fn web(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: default_title(),
            alt: String::new(),
            kind: ImageKind::Web,
        }
    }

    pub fn generated(url: impl Into<String>) -> Self {
        Self {
            kind: ImageKind::Generated,
            ..Self::web(url)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn is_generated(&self) -> bool {
        self.kind == ImageKind::Generated
    }

    /// Shortened form of the URL used by `Display`
    pub fn short_url(&self) -> String {
        let count = self.url.chars().count();
        if count <= defaults::IMAGE_URL_DISPLAY_LIMIT {
            return self.url.clone();
        }
        let head: String = self.url.chars().take(8).collect();
        let tail: String = self.url.chars().skip(count - 12).collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Image(title='{}', url='{}', alt='{}')",
            self.title,
            self.short_url(),
            self.alt
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_on_deserialize() {
        let image: Image = serde_json::from_str(r#"{"url": "https://a.b/c.png"}"#).unwrap();
        assert_eq!(image.title, "[Image]");
        assert_eq!(image.alt, "");
        assert_eq!(image.kind, ImageKind::Web);
    }

    #[test]
    fn test_generated_kind_round_trips_as_snake_case() {
        let image = Image::generated("https://a.b/c.png");
        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(value["kind"], "generated");
        assert!(image.is_generated());
    }

    #[test]
    fn test_display_keeps_short_urls() {
        let image = Image::web("https://x.io/a").with_title("cat").with_alt("a cat");
        assert_eq!(
            image.to_string(),
            "Image(title='cat', url='https://x.io/a', alt='a cat')"
        );
    }

    #[test]
    fn test_display_shortens_long_urls() {
        let image = Image::web("https://lh3.googleusercontent.com/abcdefgh/image-0001.png");
        assert_eq!(image.short_url(), "https://...age-0001.png");
    }

    #[test]
    fn test_short_url_respects_char_boundaries() {
        let image = Image::web("https://例え.jp/画像/とても長いファイル名の画像.png");
        let short = image.short_url();
        assert!(short.starts_with("https://"));
        assert!(short.ends_with("ル名の画像.png"));
    }
}
