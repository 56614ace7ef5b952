use std::error;
use std::fmt;
use std::io;
use std::num;

#[derive(Debug)]
pub enum Error {
    MissingPort {
        hostname: String,
    },
    InvalidPort {
        port: String,
        source: num::ParseIntError,
    },
    Connect {
        authority: String,
        source: io::Error,
    },
    Send(io::Error),
    Receive(io::Error),
    IoError(io::Error),
}

pub type Result<R> = std::result::Result<R, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingPort { hostname } => {
                write!(f, "no port in target '{}'", hostname)
            }
            Error::InvalidPort { port, source } => {
                write!(f, "invalid port '{}': {}", port, source)
            }
            Error::Connect { authority, source } => {
                write!(f, "failed to connect to {}: {}", authority, source)
            }
            Error::Send(e) => write!(f, "failed to send request: {}", e),
            Error::Receive(e) => write!(f, "failed to read response: {}", e),
            Error::IoError(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::MissingPort { .. } => None,
            Error::InvalidPort { source, .. } => Some(source),
            Error::Connect { source, .. } => Some(source),
            Error::Send(e) => Some(e),
            Error::Receive(e) => Some(e),
            Error::IoError(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IoError(e)
    }
}
