use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use crate::{
    error::PipelineError,
    launcher::{Launcher, SpawnedPlayer},
};

/// RecordingLauncher remembers every playlist path it was handed together with
/// the file contents at launch time instead of starting a player
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    launches: Arc<Mutex<Vec<(PathBuf, String)>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// a launcher that reports a missing executable until `set_failing(false)`
    pub fn failing() -> Self {
        let launcher = Self::default();
        launcher.set_failing(true);
        launcher
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn launches(&self) -> Vec<(PathBuf, String)> {
        self.launches.lock().unwrap().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, playlist: &Path) -> Result<SpawnedPlayer, PipelineError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PipelineError::Launch {
                program: "recording".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        let contents = fs::read_to_string(playlist).unwrap();
        let mut launches = self.launches.lock().unwrap();
        launches.push((playlist.to_path_buf(), contents));
        Ok(SpawnedPlayer {
            pid: launches.len() as u32,
        })
    }
}
