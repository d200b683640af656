use serde::{Deserialize, Serialize};

use crate::model::ids::SlideId;

/// One narrated unit of lesson content.
///
/// Field names mirror the generator's wire shape. `image_prompt` is the
/// prompt the backend used to render the visual; it is carried through as
/// opaque metadata and never consumed by the presentation logic. The image
/// and audio locators stay plain strings: the backend emits relative
/// `/static/...` paths as well as absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub text: String,
    pub image_prompt: String,
    pub image_url: String,
    pub audio_url: String,
}

impl Slide {
    /// Narration text for this slide.
    #[must_use]
    pub fn narration(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_deserializes_wire_shape() {
        let json = r#"{
            "id": 1,
            "title": "What is a Router?",
            "text": "A router forwards packets between networks.",
            "imagePrompt": "a network router, flat illustration",
            "imageUrl": "/static/img_1.png",
            "audioUrl": "/static/audio_1.mp3"
        }"#;

        let slide: Slide = serde_json::from_str(json).unwrap();
        assert_eq!(slide.id, SlideId::new(1));
        assert_eq!(slide.image_url, "/static/img_1.png");
        assert_eq!(slide.narration(), "A router forwards packets between networks.");
    }
}
