use std::sync::LazyLock;

use regex::Regex;

use super::{allow_list_lines, UrlFilter, Verdict};

// only https urls yield a host, plain http links never pass the domain filter
static HOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(?:[^@/?#]*@)?([^:/?#]+)").expect("host pattern is valid")
});

/// DomainFilter admits urls whose host ends with one of the listed domains
#[derive(Debug)]
pub struct DomainFilter {
    domains: Vec<String>,
}

impl DomainFilter {
    /// * `list`: newline separated domains, e.g. `youtube.com`
    pub fn new(list: &str) -> Self {
        Self {
            domains: allow_list_lines(list).map(str::to_owned).collect(),
        }
    }

    /// extracts the host of an https url
    pub fn host(url: &str) -> Option<&str> {
        HOST_RE
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl UrlFilter for DomainFilter {
    fn verdict(&self) -> Verdict {
        Verdict::Domain
    }

    fn matches(&self, url: &str) -> bool {
        let host = match Self::host(url) {
            Some(h) => h,
            None => return false,
        };
        self.domains.iter().any(|d| host.ends_with(d.as_str()))
    }
}
