pub const AVATAR_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='200' height='200'%3E%3Crect width='200' height='200' fill='%234A90E2'/%3E%3Ctext x='50%25' y='50%25' dominant-baseline='middle' text-anchor='middle' font-family='Arial, sans-serif' font-size='48' fill='white'%3EAvatar%3C/text%3E%3C/svg%3E";
pub const AVATAR_FALLBACK_ALT: &str = "Avatar failed to load";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarImage {
    src: String,
    alt: String,
    fell_back: bool,
}

impl AvatarImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            fell_back: false,
        }
    }

    /// Swaps in the inline placeholder. Returns false when the placeholder is
    /// already showing, so a failing placeholder cannot loop.
    pub fn handle_load_error(&mut self) -> bool {
        if self.fell_back {
            return false;
        }

        self.src = AVATAR_PLACEHOLDER.to_string();
        self.alt = AVATAR_FALLBACK_ALT.to_string();
        self.fell_back = true;
        true
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn fell_back(&self) -> bool {
        self.fell_back
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_swaps_in_placeholder_once() {
        let mut avatar = AvatarImage::new("/images/avatar.jpg", "Portrait");

        assert!(avatar.handle_load_error());
        assert_eq!(avatar.src(), AVATAR_PLACEHOLDER);
        assert_eq!(avatar.alt(), AVATAR_FALLBACK_ALT);
        assert!(!avatar.handle_load_error());
        assert!(avatar.fell_back());
    }

    #[test]
    fn placeholder_is_inline_svg() {
        assert!(AVATAR_PLACEHOLDER.starts_with("data:image/svg+xml,"));
        assert!(AVATAR_PLACEHOLDER.contains("%234A90E2"));
    }
}
