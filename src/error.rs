/// Errors returned by the tagger.
#[derive(thiserror::Error, Debug)]
pub enum TagError {
    /// The scoring worker pool could not be started.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TagError>;
