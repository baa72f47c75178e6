use crate::{base58_check, hex};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Hex(hex::Error),
    Decode(base58_check::decode::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Hex(error) => write!(f, "Invalid hex payload: {}", error),
            Error::Decode(error) => write!(f, "{}", error),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Hex(error) => Some(error),
            Error::Decode(error) => Some(error),
        }
    }
}

impl From<hex::Error> for Error {
    fn from(error: hex::Error) -> Self {
        Error::Hex(error)
    }
}

impl From<base58_check::decode::Error> for Error {
    fn from(error: base58_check::decode::Error) -> Self {
        Error::Decode(error)
    }
}
