use std::path::PathBuf;

use libp2p::identity::{DecodingError, OtherVariantError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to generate private key: {0}")]
    KeyGeneration(String),
    #[error("Failed to get raw private key: {0}")]
    RawKeyExtraction(#[from] OtherVariantError),
    #[error("Failed to write private key to file: {source}")]
    PrivateKeyWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create peer ID from private key: {0}")]
    IdentifierDerivation(#[from] DecodingError),
    #[error("Failed to write peer ID to file: {source}")]
    IdentifierWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid private key hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Invalid private key: {0}")]
    InvalidKey(DecodingError),
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::KeyGeneration(e.to_string())
    }
}
