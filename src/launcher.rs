use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use crate::error::PipelineError;

/// the media player started for every playlist
pub const PLAYER_COMMAND: &str = "mpv";

/// SpawnedPlayer identifies a started player. It is informational only, the
/// process is never waited on or signalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedPlayer {
    pub pid: u32,
}

/// Launcher is the trait for anything that can hand a playlist file to a player
pub trait Launcher: Send + Sync {
    fn launch(&self, playlist: &Path) -> Result<SpawnedPlayer, PipelineError>;
}

/// DetachedLauncher starts the player as a detached process with all standard
/// streams silenced
#[derive(Debug, Clone)]
pub struct DetachedLauncher {
    program: String,
}

impl DetachedLauncher {
    pub fn new() -> Self {
        Self {
            program: PLAYER_COMMAND.to_string(),
        }
    }

    /// Use a different executable
    #[cfg(test)]
    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl Default for DetachedLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher for DetachedLauncher {
    fn launch(&self, playlist: &Path) -> Result<SpawnedPlayer, PipelineError> {
        spawn_detached(&self.program, &[playlist_arg(playlist)])
    }
}

/// builds the single `--playlist=<path>` argument without lossy conversion
pub fn playlist_arg(playlist: &Path) -> OsString {
    let mut arg = OsString::from("--playlist=");
    arg.push(playlist.as_os_str());
    arg
}

/// Starts `program` in its own process group so it outlives the caller and
/// does not receive the terminal's signals. The child handle is dropped
/// right away, the exit status is never collected.
///
/// * `program`: executable name or path
/// * `args`: positional arguments
pub fn spawn_detached(program: &str, args: &[OsString]) -> Result<SpawnedPlayer, PipelineError> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const DETACHED_PROCESS: u32 = 0x0000_0008;
        const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
        cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
    }

    let child = cmd.spawn().map_err(|source| PipelineError::Launch {
        program: program.to_string(),
        source,
    })?;
    let player = SpawnedPlayer { pid: child.id() };
    info!("started {} with pid {}", program, player.pid);
    Ok(player)
}
