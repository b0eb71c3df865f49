use std::path::PathBuf;

/// PipelineError contains the failures that abort a single play invocation.
/// Extraction and filtering never fail, only the two side effecting steps do.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("could not write playlist {}", path.display())]
    Materialization {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not start player '{program}'")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// FilterPatternError describes a single url regex allow-list line that does
/// not compile. It is logged and skipped, never propagated.
#[derive(Debug, thiserror::Error)]
#[error("invalid url pattern '{pattern}': {source}")]
pub struct FilterPatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}
