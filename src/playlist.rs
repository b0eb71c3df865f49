use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::error::PipelineError;

/// every invocation writes to the same file, the last writer wins
pub const PLAYLIST_FILE_NAME: &str = "mpvlink-playlist.txt";

/// Playlist is the ordered list of urls that passed the filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<String>,
}

impl Playlist {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// one url per line, no trailing newline
    pub fn to_text(&self) -> String {
        self.entries.join("\n")
    }

    /// Writes the playlist to `PLAYLIST_FILE_NAME` inside `dir` and returns the
    /// full path. The content goes to a sibling temp file first and is renamed
    /// into place, so a failed write leaves no partial playlist behind.
    ///
    /// * `dir`: target directory, usually `std::env::temp_dir()`
    pub fn materialize(&self, dir: &Path) -> Result<PathBuf, PipelineError> {
        let path = dir.join(PLAYLIST_FILE_NAME);
        let err = |source: std::io::Error| PipelineError::Materialization {
            path: path.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(err)?;
        tmp.write_all(self.to_text().as_bytes()).map_err(err)?;
        tmp.as_file().sync_all().map_err(err)?;
        tmp.persist(&path).map_err(|e| err(e.error))?;

        info!("wrote {} entries to {}", self.len(), path.display());
        Ok(path)
    }
}

impl FromIterator<String> for Playlist {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use proptest::prelude::*;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_to_text() {
        let playlist = Playlist::new(vec!["https://a.tv/1".into(), "https://b.tv/2".into()]);
        assert_eq!(playlist.to_text(), "https://a.tv/1\nhttps://b.tv/2");
        assert_eq!(Playlist::default().to_text(), "");
    }

    #[test]
    fn test_materialize_fixed_name() {
        let dir = TempDir::new().unwrap();
        let playlist = Playlist::new(vec!["https://a.tv/1".into()]);
        let path = playlist.materialize(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(PLAYLIST_FILE_NAME));
        assert_eq!(fs::read_to_string(&path).unwrap(), "https://a.tv/1");
    }

    #[test]
    fn test_materialize_empty() {
        let dir = TempDir::new().unwrap();
        let path = Playlist::default().materialize(dir.path()).unwrap();
        assert_eq!(fs::read(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_last_writer_wins() {
        let dir = TempDir::new().unwrap();
        let first = Playlist::new(vec!["https://a.tv/1".into(), "https://a.tv/2".into()]);
        let second = Playlist::new(vec!["https://b.tv/1".into()]);
        let p1 = first.materialize(dir.path()).unwrap();
        let p2 = second.materialize(dir.path()).unwrap();
        assert_eq!(p1, p2);
        assert_eq!(fs::read_to_string(&p2).unwrap(), "https://b.tv/1");
        // no temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_materialize_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = Playlist::default().materialize(&missing).unwrap_err();
        match err {
            PipelineError::Materialization { path, .. } => {
                assert_eq!(path, missing.join(PLAYLIST_FILE_NAME))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn prop_materialized_lines_round_trip(
            urls in prop::collection::vec("https://[a-z]{1,10}\\.[a-z]{2,3}/[a-zA-Z0-9._?=&-]{0,12}", 0..10)
        ) {
            let dir = TempDir::new().unwrap();
            let path = Playlist::new(urls.clone()).materialize(dir.path()).unwrap();
            let contents = fs::read_to_string(path).unwrap();
            let got: Vec<String> = contents.lines().map(str::to_owned).collect();
            prop_assert_eq!(got, urls);
        }
    }
}
