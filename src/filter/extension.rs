use super::{allow_list_lines, UrlFilter, Verdict};

/// ExtensionFilter admits urls ending in `.<extension>` for one of the listed
/// extensions. Query strings and fragments are not stripped.
#[derive(Debug)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// * `list`: newline separated bare extensions, e.g. `mp4`
    pub fn new(list: &str) -> Self {
        Self {
            suffixes: allow_list_lines(list).map(|e| format!(".{}", e)).collect(),
        }
    }
}

impl UrlFilter for ExtensionFilter {
    fn verdict(&self) -> Verdict {
        Verdict::Extension
    }

    fn matches(&self, url: &str) -> bool {
        self.suffixes.iter().any(|s| url.ends_with(s.as_str()))
    }
}
