use std::sync::LazyLock;

use regex::Regex;

/// matches markdown inline links of the form `[label](url)` and captures the url.
/// Labels may contain one level of nested brackets. Url word characters are
/// ASCII only, and since `()[]` are url characters a greedy url runs up to the
/// last `)` it can reach.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\[(?:[^\[\]]|\[[^\[\]]*\])*\]\((https?://[A-Za-z0-9_:/?#\[\]@!$&'()*+,;=.~-]+)\)",
    )
    .expect("link pattern is valid")
});

/// Candidate is a url found in the document together with the byte offset
/// where the url starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub url: String,
    pub offset: usize,
}

/// Lazily yields all link urls in order of appearance. Calling it again on the
/// same text restarts the scan.
///
/// * `text`: the raw markdown document
pub fn extract_links(text: &str) -> impl Iterator<Item = Candidate> + '_ {
    LINK_RE.captures_iter(text).filter_map(|caps| {
        caps.get(1).map(|m| Candidate {
            url: m.as_str().to_owned(),
            offset: m.start(),
        })
    })
}
