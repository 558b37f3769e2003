use std::path::Path;

use rocket::http::RawStr;
use serde_derive::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub caption: String,
}

impl GalleryImage {
    pub fn new(base_url: &str, file_name: &str, caption: String) -> Self {
        Self {
            src: format!(
                "{}/images/gallery/{}",
                base_url.trim_end_matches('/'),
                RawStr::new(file_name).percent_encode().as_str()
            ),
            caption,
        }
    }
}

pub fn is_image_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// "swift-dzire__front_view.jpg" -> "Swift Dzire Front View"
pub fn caption_from_file_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);

    stem.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_match_case_insensitively() {
        assert!(is_image_file("innova.JPG"));
        assert!(is_image_file("fleet.webp"));
        assert!(is_image_file("a.b.jpeg"));
        assert!(!is_image_file("captions.json"));
        assert!(!is_image_file("README"));
    }

    #[test]
    fn captions_are_prettified_file_stems() {
        assert_eq!(
            caption_from_file_name("swift-dzire__front_view.jpg"),
            "Swift Dzire Front View"
        );
        assert_eq!(caption_from_file_name(" ertiga  night .png"), "Ertiga Night");
        assert_eq!(caption_from_file_name("innova.gif"), "Innova");
    }

    #[test]
    fn captions_only_capitalise_after_separators() {
        assert_eq!(caption_from_file_name("driver's car.v2.jpg"), "Driver's Car.v2");
        assert_eq!(caption_from_file_name("tempo_traveller.12-seat.png"), "Tempo Traveller.12 Seat");
    }

    #[test]
    fn src_is_percent_encoded() {
        let image = GalleryImage::new("http://localhost:8000/", "my car.jpg", "My Car".into());
        assert_eq!(image.src, "http://localhost:8000/images/gallery/my%20car.jpg");
    }
}
