use super::image::{Image, ImageKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One alternative answer returned for a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate-level continuation identifier
    pub rcid: String,
    pub text: String,
    /// Reasoning text, only present for thinking models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoughts: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Candidate {
    /// Create a candidate with no thoughts or images
    pub fn new(rcid: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            rcid: rcid.into(),
            text: text.into(),
            thoughts: None,
            images: Vec::new(),
        }
    }

    /// Attach reasoning text
    pub fn with_thoughts(mut self, thoughts: impl Into<String>) -> Self {
        self.thoughts = Some(thoughts.into());
        self
    }

    /// Append one image, keeping insertion order
    pub fn with_image(mut self, image: Image) -> Self {
        self.images.push(image);
        self
    }

    /// Append several images in order
    pub fn with_images(mut self, images: impl IntoIterator<Item = Image>) -> Self {
        self.images.extend(images);
        self
    }

    /// Candidate-level continuation identifier
    pub fn rcid(&self) -> &str {
        &self.rcid
    }

    /// Answer text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn thoughts(&self) -> Option<&str> {
        self.thoughts.as_deref()
    }

    /// Every attached image, web and generated, in received order
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Images retrieved from the web
    pub fn web_images(&self) -> impl Iterator<Item = &Image> {
        self.images_of(ImageKind::Web)
    }

    /// Images produced by the model
    pub fn generated_images(&self) -> impl Iterator<Item = &Image> {
        self.images_of(ImageKind::Generated)
    }

    fn images_of(&self, kind: ImageKind) -> impl Iterator<Item = &Image> {
        self.images.iter().filter(move |image| image.kind == kind)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
