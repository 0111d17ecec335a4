//! Configuration options for page parsing.
//!
//! The `Options` struct controls how relative links are resolved and whether
//! rich-text fragments are additionally rendered as Markdown.

use crate::error::{Error, Result};
use crate::url_utils;

/// Configuration options for page parsing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_mikan::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Point at a mirror
/// let options = Options {
///     base_url: "https://mikanime.tv".to_string(),
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Site root prepended to every relative href and image source.
    ///
    /// A trailing `/` is ignored.
    ///
    /// Default: `https://mikanani.me`
    pub base_url: String,

    /// Render the episode intro fragment as Markdown as well as HTML.
    ///
    /// Default: `false`
    pub intro_markdown: bool,

    /// Keep hyperlinks when rendering Markdown.
    ///
    /// Default: `true`
    pub markdown_links: bool,
}

impl Options {
    /// Known site mirrors, primary last.
    pub const MIRRORS: [&'static str; 2] = ["https://mikanime.tv", "https://mikanani.me"];

    /// Check that `base_url` is an absolute http(s) URL with a host.
    pub fn validate(&self) -> Result<()> {
        let (is_abs, _) = url_utils::is_absolute_url(&self.base_url);
        if is_abs {
            Ok(())
        } else {
            Err(Error::InvalidBaseUrl(self.base_url.clone()))
        }
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: Self::MIRRORS[Self::MIRRORS.len() - 1].to_string(),
            intro_markdown: false,
            markdown_links: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.base_url, "https://mikanani.me");
        assert!(!opts.intro_markdown);
        assert!(opts.markdown_links);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_base_strips_trailing_slash() {
        let opts = Options {
            base_url: "https://mikanime.tv/".to_string(),
            ..Options::default()
        };

        assert_eq!(opts.base(), "https://mikanime.tv");
    }

    #[test]
    fn test_relative_base_url_rejected() {
        let opts = Options {
            base_url: "/Home".to_string(),
            ..Options::default()
        };

        assert!(matches!(opts.validate(), Err(Error::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let opts = Options {
            base_url: "ftp://mikanani.me".to_string(),
            ..Options::default()
        };

        assert!(opts.validate().is_err());
    }
}
