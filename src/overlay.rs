//! Full-size image preview for certificate thumbnails.

pub const DEFAULT_CAPTION: &str = "Certificate Image";
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    pub src: String,
    pub full_image: Option<String>,
    pub alt: Option<String>,
}

impl Thumbnail {
    fn display_src(&self) -> String {
        self.full_image
            .as_deref()
            .filter(|value| !value.is_empty())
            .unwrap_or(&self.src)
            .to_string()
    }

    fn caption(&self) -> String {
        self.alt
            .as_deref()
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_CAPTION)
            .to_string()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImagePreview {
    open: bool,
    image: String,
    caption: String,
}

impl ImagePreview {
    pub fn closed() -> Self {
        Self::default()
    }

    /// Shows `thumbnail`, replacing whatever is on screen.
    pub fn open(&mut self, thumbnail: &Thumbnail) {
        self.image = thumbnail.display_src();
        self.caption = thumbnail.caption();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns whether the key closed the overlay.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY && self.open {
            self.close();
            return true;
        }
        false
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Value for `body.style.overflow`: scrolling is locked while open.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumbnail(src: &str, full: Option<&str>, alt: Option<&str>) -> Thumbnail {
        Thumbnail {
            src: src.to_string(),
            full_image: full.map(str::to_string),
            alt: alt.map(str::to_string),
        }
    }

    #[test]
    fn open_prefers_full_image_and_alt() {
        let mut preview = ImagePreview::closed();
        preview.open(&thumbnail("thumb-a.jpg", Some("full-a.jpg"), Some("AWS Certified")));

        assert!(preview.is_open());
        assert_eq!(preview.image(), "full-a.jpg");
        assert_eq!(preview.caption(), "AWS Certified");
        assert_eq!(preview.body_overflow(), "hidden");
    }

    #[test]
    fn open_falls_back_to_thumbnail_and_default_caption() {
        let mut preview = ImagePreview::closed();
        preview.open(&thumbnail("thumb-b.jpg", None, Some("")));

        assert_eq!(preview.image(), "thumb-b.jpg");
        assert_eq!(preview.caption(), DEFAULT_CAPTION);
    }

    #[test]
    fn second_open_replaces_in_place() {
        let mut preview = ImagePreview::closed();
        preview.open(&thumbnail("a.jpg", Some("a-full.jpg"), Some("A")));
        preview.open(&thumbnail("b.jpg", Some("b-full.jpg"), Some("B")));

        assert!(preview.is_open());
        assert_eq!(preview.image(), "b-full.jpg");
        assert_eq!(preview.caption(), "B");
    }

    #[test]
    fn escape_only_acts_while_open() {
        let mut preview = ImagePreview::closed();

        assert!(!preview.handle_key(ESCAPE_KEY));
        assert_eq!(preview, ImagePreview::closed());

        preview.open(&thumbnail("a.jpg", None, Some("A")));
        assert!(!preview.handle_key("Enter"));
        assert!(preview.is_open());
        assert!(preview.handle_key(ESCAPE_KEY));
        assert!(!preview.is_open());
        assert_eq!(preview.body_overflow(), "");
    }
}
