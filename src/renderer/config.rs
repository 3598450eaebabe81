//! Output options for SVG frames

/// How [`SvgCanvas`](super::SvgCanvas) writes a frame
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Emit the `<?xml ...?>` prolog so the frame can be saved as a file
    pub standalone: bool,

    /// One element per line, indented; off gives a single-line document
    pub pretty_print: bool,

    /// Prepended to the `background`, `text`, `image` and `debug` classes
    pub class_prefix: Option<String>,

    /// Inline image pixels as PNG data URIs. When off, images reference the
    /// filename given in the deck.
    pub embed_images: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: Some("ill-".to_string()),
            embed_images: true,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Use bare class names
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    pub fn with_embed_images(mut self, embed: bool) -> Self {
        self.embed_images = embed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_writes_self_contained_files() {
        assert_eq!(
            SvgConfig::default(),
            SvgConfig {
                standalone: true,
                pretty_print: true,
                class_prefix: Some("ill-".to_string()),
                embed_images: true,
            }
        );
    }

    #[test]
    fn test_compact_linked_frames() {
        let config = SvgConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
            .with_embed_images(false)
            .with_class_prefix("deck-");
        assert_eq!(config.class_prefix.as_deref(), Some("deck-"));
        assert!(!(config.standalone || config.pretty_print || config.embed_images));

        let bare = config.without_class_prefix();
        assert_eq!(bare.class_prefix, None);
    }
}
