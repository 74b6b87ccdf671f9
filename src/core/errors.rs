use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenshuuError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Minimum values can't be higher than maximum values.")]
    InvalidBounds,

    #[error("Specified chapter ({focus}) must be greater than 0 and no higher than the maximum chapter ({max_chapter}).")]
    FocusOutOfRange { focus: u32, max_chapter: u32 },

    #[error("Ran out of {kind} entries: drew {drawn} of {requested} requested.")]
    PoolExhausted { kind: &'static str, requested: usize, drawn: usize },
}
