/// Why an argument was refused before anything reached the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("raw syntax must not be blank")]
    BlankSyntax,

    #[error("{0} must not be blank")]
    BlankIdent(&'static str),

    #[error("sub-query must not be blank")]
    BlankSubQuery,

    #[error("{0} must not be empty")]
    EmptyList(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    pub fn reason(&self) -> InvalidArgument {
        match self {
            Error::InvalidArgument(reason) => *reason,
        }
    }
}

pub(crate) fn invalid<T>(reason: InvalidArgument) -> Result<T> {
    tracing::debug!(%reason, "rejected argument");
    Err(Error::InvalidArgument(reason))
}
