use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller contract violation, detected before any communication
    /// takes place.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A send, receive or collective could not complete because a peer
    /// went away. Not recoverable within a single collective call.
    #[error("communication failure: {0}")]
    CommunicationFailure(String),
}
