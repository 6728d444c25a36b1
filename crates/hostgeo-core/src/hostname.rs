//! Hostname extraction from free-form user input.

use crate::error::{LookupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Extract the bare hostname from a URL or host string.
///
/// Accepts anything a user might type: `https://example.com:8080/path?x=1`,
/// `example.com/page`, `example.com?x=1`. The scheme, port, path and query are
/// stripped. No character-set validation happens here, so malformed input is
/// passed through and simply fails to resolve later. May return an empty string.
///
/// ```rust
/// use hostgeo_core::extract_hostname;
///
/// assert_eq!(extract_hostname("https://example.com:8080/path?x=1"), "example.com");
/// assert_eq!(extract_hostname("example.com/page"), "example.com");
/// ```
#[must_use]
pub fn extract_hostname(input: &str) -> &str {
    let host = if input.contains("//") {
        input.split('/').nth(2).unwrap_or_default()
    } else {
        input.split('/').next().unwrap_or_default()
    };

    let host = host.split(':').next().unwrap_or_default();
    host.split('?').next().unwrap_or_default()
}

/// Build the URL used to fetch the page itself.
///
/// Input that does not start with `http` gets an `http://` prefix.
#[must_use]
pub fn fetchable_url(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("http://{input}")
    }
}

/// A bare host name with no scheme, port, path or query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hostname(String);

impl Hostname {
    /// Derive a hostname from raw user input.
    ///
    /// Fails only when nothing is left after trimming and stripping.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(LookupError::InvalidInput("Please enter a URL.".into()));
        }

        let host = extract_hostname(input);
        if host.is_empty() {
            return Err(LookupError::InvalidInput(format!(
                "No hostname found in '{input}'."
            )));
        }

        Ok(Self(host.to_string()))
    }

    /// The hostname as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scheme_port_path_and_query() {
        assert_eq!(
            extract_hostname("https://example.com:8080/path?x=1"),
            "example.com"
        );
        assert_eq!(extract_hostname("http://example.com"), "example.com");
        assert_eq!(extract_hostname("//cdn.example.net/v.mp4"), "cdn.example.net");
    }

    #[test]
    fn test_bare_inputs() {
        assert_eq!(extract_hostname("example.com/page"), "example.com");
        assert_eq!(extract_hostname("example.com:443"), "example.com");
        assert_eq!(extract_hostname("example.com?q=1"), "example.com");
        assert_eq!(extract_hostname("google.com"), "google.com");
    }

    #[test]
    fn test_degenerate_inputs_return_empty() {
        assert_eq!(extract_hostname(""), "");
        assert_eq!(extract_hostname("/path/only"), "");
        assert_eq!(extract_hostname("https://"), "");
    }

    #[test]
    fn test_hostname_parse() {
        let host = Hostname::parse("  https://www.bbc.com/news  ").unwrap();
        assert_eq!(host.as_str(), "www.bbc.com");
        assert_eq!(host.to_string(), "www.bbc.com");

        assert!(matches!(
            Hostname::parse("   "),
            Err(LookupError::InvalidInput(msg)) if msg == "Please enter a URL."
        ));
        assert!(Hostname::parse("/nothing-here").is_err());
    }

    #[test]
    fn test_input_without_host_is_rejected_before_lookup() {
        // A `//` anywhere switches to scheme splitting, which leaves no host here
        assert_eq!(extract_hostname("example.com/r?to=http://x.com"), "");
        assert!(matches!(
            Hostname::parse("example.com/r?to=http://x.com"),
            Err(LookupError::InvalidInput(msg))
                if msg == "No hostname found in 'example.com/r?to=http://x.com'."
        ));
    }

    #[test]
    fn test_fetchable_url() {
        assert_eq!(fetchable_url("example.com/page"), "http://example.com/page");
        assert_eq!(fetchable_url("https://example.com"), "https://example.com");
        assert_eq!(fetchable_url(" http://example.com "), "http://example.com");
    }
}
