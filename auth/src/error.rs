use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Password hasher error: {0}")]
    PasswordHasherError(String),

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Missing credentials")]
    MissingCredentials,
}
