use std::path::Path;

/// Image formats the gallery accepts.
///
/// The same whitelist gates inbound uploads and outbound listings, so the
/// two can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageExtension {
    Png,
    Jpg,
    Jpeg,
    Gif,
    Webp,
}

impl ImageExtension {
    pub const ALL: [ImageExtension; 5] = [
        ImageExtension::Png,
        ImageExtension::Jpg,
        ImageExtension::Jpeg,
        ImageExtension::Gif,
        ImageExtension::Webp,
    ];

    /// Parse the extension of a filename, case-insensitively.
    ///
    /// Only the extension is inspected; file contents are never sniffed.
    /// A filename without an extension (including bare dotfiles like
    /// `.png`) yields `None`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageExtension::Png),
            "jpg" => Some(ImageExtension::Jpg),
            "jpeg" => Some(ImageExtension::Jpeg),
            "gif" => Some(ImageExtension::Gif),
            "webp" => Some(ImageExtension::Webp),
            _ => None,
        }
    }

    /// The lowercase extension including the leading dot
    pub fn as_suffix(&self) -> &'static str {
        match self {
            ImageExtension::Png => ".png",
            ImageExtension::Jpg => ".jpg",
            ImageExtension::Jpeg => ".jpeg",
            ImageExtension::Gif => ".gif",
            ImageExtension::Webp => ".webp",
        }
    }

    /// Whether a stored object key ends in one of the recognized extensions.
    ///
    /// Used by the listing side to discard non-image objects placed in the
    /// bucket by other means.
    pub fn matches_key(key: &str) -> bool {
        let lower = key.to_ascii_lowercase();
        Self::ALL.iter().any(|ext| lower.ends_with(ext.as_suffix()))
    }
}
