//! External lookup links offered by the link picker.

use url::form_urlencoded::byte_serialize;

use crate::corpus::sanitize_word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// RAE dictionary entry.
    Dictionary,
    /// Goodreads search.
    Community,
}

impl LinkTarget {
    pub const ALL: [LinkTarget; 2] = [LinkTarget::Dictionary, LinkTarget::Community];

    pub fn label(self) -> &'static str {
        match self {
            LinkTarget::Dictionary => "RAE dictionary",
            LinkTarget::Community => "Goodreads search",
        }
    }

    fn template(self) -> &'static str {
        match self {
            LinkTarget::Dictionary => "https://dle.rae.es/",
            LinkTarget::Community => "https://www.goodreads.com/search?q=",
        }
    }

    /// Builds the lookup URL for `word` (sanitized, then query-escaped).
    pub fn url_for(self, word: &str) -> String {
        let escaped: String = byte_serialize(sanitize_word(word).as_bytes()).collect();
        format!("{}{}", self.template(), escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_url_sanitizes_word() {
        assert_eq!(
            LinkTarget::Dictionary.url_for("¡casa!"),
            "https://dle.rae.es/casa"
        );
    }

    #[test]
    fn test_url_escapes_non_ascii() {
        assert_eq!(
            LinkTarget::Community.url_for("niño,"),
            "https://www.goodreads.com/search?q=ni%C3%B1o"
        );
    }

    #[test]
    fn test_url_for_empty_word() {
        assert_eq!(LinkTarget::Dictionary.url_for(""), "https://dle.rae.es/");
    }
}
