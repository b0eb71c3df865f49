pub(crate) mod domain;
pub(crate) mod extension;
pub(crate) mod pattern;

use std::fmt::Display;

use crate::config::FilterConfig;

use self::{domain::DomainFilter, extension::ExtensionFilter, pattern::RegexFilter};

/// UrlFilter is the trait every allow-list category implements
pub trait UrlFilter: Send + Sync {
    /// the category reported when this filter lets a url pass
    fn verdict(&self) -> Verdict;

    /// true if the url matches at least one line of the allow-list
    fn matches(&self, url: &str) -> bool;
}

/// Verdict tells which category admitted a url, if any
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    Domain,
    Extension,
    Regex,
    Rejected,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::Domain => "domain",
            Verdict::Extension => "extension",
            Verdict::Regex => "url-regex",
            Verdict::Rejected => "rejected",
        };
        f.pad(s)
    }
}

/// splits a newline separated allow-list into its non-empty lines
pub(crate) fn allow_list_lines(list: &str) -> impl Iterator<Item = &str> {
    list.lines().filter(|l| !l.is_empty())
}

/// FilterEngine combines the domain, extension and regex filters by logical OR
pub struct FilterEngine {
    filters: Vec<Box<dyn UrlFilter>>,
}

impl FilterEngine {
    /// Builds all three filters from the configuration. Invalid regex lines
    /// are dropped while building.
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            filters: vec![
                Box::new(DomainFilter::new(&config.domain_allow_list)),
                Box::new(ExtensionFilter::new(&config.extension_allow_list)),
                Box::new(RegexFilter::new(&config.url_regex_allow_list)),
            ],
        }
    }

    /// Create with specific filters
    #[cfg(test)]
    pub fn with_filters(filters: Vec<Box<dyn UrlFilter>>) -> Self {
        Self { filters }
    }

    /// returns the first category admitting the url or `Verdict::Rejected`
    pub fn evaluate(&self, url: &str) -> Verdict {
        self.filters
            .iter()
            .find(|f| f.matches(url))
            .map(|f| f.verdict())
            .unwrap_or(Verdict::Rejected)
    }

    pub fn keep(&self, url: &str) -> bool {
        self.evaluate(url) != Verdict::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(domains: &str, extensions: &str, regexes: &str) -> FilterConfig {
        FilterConfig {
            domain_allow_list: domains.to_string(),
            extension_allow_list: extensions.to_string(),
            url_regex_allow_list: regexes.to_string(),
        }
    }

    #[test]
    fn test_allow_list_lines_skips_empty() {
        let got: Vec<&str> = allow_list_lines("a\n\nb\n").collect();
        assert_eq!(got, vec!["a", "b"]);
        assert_eq!(allow_list_lines("").count(), 0);
    }

    #[test]
    fn test_empty_lists_reject_everything() {
        let engine = FilterEngine::new(&config("", "", ""));
        assert!(!engine.keep("https://www.youtube.com/watch?v=1"));
        assert!(!engine.keep("https://example.com/video.mp4"));
        assert_eq!(engine.evaluate("https://a.b"), Verdict::Rejected);
    }

    #[test]
    fn test_categories_are_combined_by_or() {
        let engine = FilterEngine::new(&config("youtube.com", "mp4", "vimeo\\.com/\\d+"));
        assert_eq!(
            engine.evaluate("https://www.youtube.com/watch?v=1"),
            Verdict::Domain
        );
        assert_eq!(
            engine.evaluate("http://example.com/video.mp4"),
            Verdict::Extension
        );
        assert_eq!(engine.evaluate("http://vimeo.com/42"), Verdict::Regex);
        assert_eq!(engine.evaluate("http://example.com/page"), Verdict::Rejected);
    }

    #[test]
    fn test_first_matching_category_is_reported() {
        let engine = FilterEngine::new(&config("example.com", "mp4", ""));
        assert_eq!(
            engine.evaluate("https://example.com/video.mp4"),
            Verdict::Domain
        );
    }

    #[test]
    fn test_invalid_regex_does_not_affect_other_lines() {
        let engine = FilterEngine::new(&config("", "", "([unclosed\nexample\\.org"));
        assert!(engine.keep("https://example.org/clip"));
        assert!(!engine.keep("https://example.net/clip"));
    }

    #[test]
    fn test_default_config() {
        let engine = FilterEngine::new(&FilterConfig::default());
        assert!(engine.keep("https://youtu.be/dQw4w9WgXcQ"));
        assert!(engine.keep("https://old.reddit.com/r/videos"));
        assert!(engine.keep("http://files.example.com/movie.mkv"));
        assert!(!engine.keep("https://docs.rs/regex"));
    }

    #[test]
    fn test_with_filters() {
        let engine = FilterEngine::with_filters(vec![Box::new(ExtensionFilter::new("webm"))]);
        assert!(engine.keep("https://a.b/c.webm"));
        assert!(!engine.keep("https://www.youtube.com/watch?v=1"));
    }
}
