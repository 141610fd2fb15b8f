use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

#[derive(Copy, Clone, Eq, PartialEq)]
pub enum PaillierErrorKind {
    InvalidArgument,
    NoInverse,
    InvalidState,
}

impl Debug for PaillierErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PaillierErrorKind::InvalidArgument => write!(f, "{}", "InvalidArgument"),
            PaillierErrorKind::NoInverse => write!(f, "{}", "NoInverse"),
            PaillierErrorKind::InvalidState => write!(f, "{}", "InvalidState"),
        }
    }
}

#[derive(Debug)]
pub struct PaillierError {
    kind: PaillierErrorKind,
    err: Box<dyn std::error::Error + Sync + Send>,
}

impl PaillierError {
    pub fn new<E>(kind: PaillierErrorKind, err: E) -> PaillierError
    where
        E: Into<Box<dyn Error + Sync + Send>>,
    {
        PaillierError {
            kind,
            err: err.into(),
        }
    }

    pub fn kind(&self) -> PaillierErrorKind {
        self.kind
    }
}

impl Display for PaillierError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.err)
    }
}

impl Error for PaillierError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.err.source()
    }
}

pub type PaillierResult<T> = Result<T, PaillierError>;
