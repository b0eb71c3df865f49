use regex::Regex;

use crate::error::FilterPatternError;

use super::{allow_list_lines, UrlFilter, Verdict};

/// RegexFilter admits urls where any of the listed patterns matches somewhere
/// in the url (unanchored)
#[derive(Debug)]
pub struct RegexFilter {
    patterns: Vec<Regex>,
}

impl RegexFilter {
    /// Compiles every non-empty line. Lines that fail to compile are logged and
    /// left out, the remaining patterns stay active.
    ///
    /// * `list`: newline separated regular expressions
    pub fn new(list: &str) -> Self {
        let patterns = allow_list_lines(list)
            .filter_map(|line| match compile(line) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!("{}", e);
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

fn compile(line: &str) -> Result<Regex, FilterPatternError> {
    Regex::new(line).map_err(|source| FilterPatternError {
        pattern: line.to_owned(),
        source,
    })
}

impl UrlFilter for RegexFilter {
    fn verdict(&self) -> Verdict {
        Verdict::Regex
    }

    fn matches(&self, url: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(url))
    }
}
