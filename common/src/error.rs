use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Unknown filter: {0}")]
    UnknownFacet(String),
}
