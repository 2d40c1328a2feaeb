use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Not one of the 24 nuclear chromosomes: {0}")]
    UnknownChromosome(String),

    #[error("Unknown pathogenicity level: {0}")]
    UnknownLevel(String),

    #[error("Invalid hex colour for category `{category}`: {value}")]
    InvalidColour { category: String, value: String },

    #[error("No colour configured for category `{0}`")]
    MissingColour(String),

    #[error("Page size {0} is not one of the configured options")]
    InvalidPageSize(usize),

    #[error("Invalid dashboard config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
