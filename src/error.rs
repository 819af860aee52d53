#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not read the config file: {0}")]
    IO(#[from] std::io::Error),

    #[error("Could not parse JSON in config file: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("File path is invalid: [{0}]")]
    InvalidFilePath(String),

    #[error("Could not create the output directory [{path}]: {source}")]
    CreateOutputDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Could not write page [{filename}]: {source}")]
    WritePage {
        filename: String,
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
