use std::path::PathBuf;

use crate::{
    config::FilterConfig,
    error::PipelineError,
    extract::{extract_links, Candidate},
    filter::{FilterEngine, Verdict},
    input::Input,
    launcher::{Launcher, SpawnedPlayer},
    playlist::Playlist,
};

/// PlayOutcome describes a completed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub playlist_path: PathBuf,
    pub entries: usize,
    pub player: SpawnedPlayer,
}

/// Extracts the links of a document and keeps those admitted by the filters,
/// in document order and without deduplication
///
/// * `text`: the raw markdown document
/// * `config`: the allow-lists
pub fn build_playlist(text: &str, config: &FilterConfig) -> Playlist {
    let engine = FilterEngine::new(config);
    extract_links(text)
        .filter(|c| {
            let keep = engine.keep(&c.url);
            if !keep {
                debug!("rejected {} at byte {}", c.url, c.offset);
            }
            keep
        })
        .map(|c| c.url)
        .collect()
}

/// pairs every extracted link with the filter verdict
pub fn evaluate_links(text: &str, engine: &FilterEngine) -> Vec<(Candidate, Verdict)> {
    extract_links(text)
        .map(|c| {
            let verdict = engine.evaluate(&c.url);
            (c, verdict)
        })
        .collect()
}

/// The PlayController runs the pipeline extract, filter, write playlist and
/// launch player once per call. It keeps no state between calls.
pub struct PlayController {
    config: FilterConfig,
    launcher: Box<dyn Launcher>,
    playlist_dir: PathBuf,
}

impl PlayController {
    pub fn new(config: FilterConfig, launcher: Box<dyn Launcher>) -> Self {
        Self {
            config,
            launcher,
            playlist_dir: std::env::temp_dir(),
        }
    }

    /// Write playlists to `dir` instead of the system temp directory
    pub fn with_playlist_dir(mut self, dir: PathBuf) -> Self {
        self.playlist_dir = dir;
        self
    }

    /// Runs the pipeline without launching the player and returns the playlist path
    pub fn prepare(&self, text: &str) -> Result<(PathBuf, Playlist), PipelineError> {
        let playlist = build_playlist(text, &self.config);
        debug!("{} links passed the filters", playlist.len());
        if playlist.is_empty() {
            info!("no link passed the filters, writing an empty playlist");
        }
        let path = playlist.materialize(&self.playlist_dir)?;
        Ok((path, playlist))
    }

    /// Runs the full pipeline. The player is launched even for an empty playlist.
    pub fn play(&self, text: &str) -> Result<PlayOutcome, PipelineError> {
        let (playlist_path, playlist) = self.prepare(text)?;
        let player = self.launcher.launch(&playlist_path)?;
        Ok(PlayOutcome {
            playlist_path,
            entries: playlist.len(),
            player,
        })
    }

    /// Reads the document from `input` and plays it
    pub async fn run(&self, input: &mut (dyn Input + Send)) -> anyhow::Result<PlayOutcome> {
        let text = input.read_document().await?;
        let outcome = self.play(&text)?;
        Ok(outcome)
    }
}
