use phykit_persist::StoreError;

/// Failures surfaced by the pipeline driver.
///
/// Each variant maps to one diagnostic line on stdout and exit status 1.
/// Help requests and missing required flags are not errors; the driver
/// answers those with usage text and exit status 0.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("could not load world file: {0}")]
    Load(StoreError),
    #[error("invalid scale factor: {0:?}")]
    InvalidScaleFactor(String),
    #[error("input path {0:?} has no extension to derive an output name from; pass -out")]
    InvalidInputPath(String),
    #[error("could not save world file: {0}")]
    Save(StoreError),
}
