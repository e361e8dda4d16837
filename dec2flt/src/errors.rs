#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid character in floating-point literal")]
    InvalidCharacter,
}

pub type Result<T> = std::result::Result<T, Error>;
