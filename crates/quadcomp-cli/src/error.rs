use quadcomp::io::IoError;
use quadcomp::region::RegionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Pipeline(#[from] quadcomp::Error),
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<RegionError> for CliError {
    fn from(e: RegionError) -> Self {
        match e {
            RegionError::InvalidParameters(msg) => Self::InvalidArgument(msg),
            other => Self::Pipeline(other.into()),
        }
    }
}
