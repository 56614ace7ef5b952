use crate::error::{Error, Result};
use std::fmt;
use std::str;

/// A connection target of the form `HOSTNAME[:PORT][/PATH]`.
///
/// Parsing never fails: malformed input degenerates (an empty hostname,
/// say) rather than erroring, and the caller decides what to do with the
/// result. A `http://` or `https://` substring anywhere in the input is
/// matched but never stripped; its presence suppresses the path split
/// entirely, so the colon split then runs over the whole string.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Target {
    pub hostname: String,
    pub port: Option<String>,
    pub path: Option<String>,
}

impl Target {
    /// Port text for the `Host` header; absent renders as empty.
    pub fn port_or_empty(&self) -> &str {
        self.port.as_deref().unwrap_or("")
    }

    /// Path text for the request line; absent renders as empty.
    pub fn path_or_empty(&self) -> &str {
        self.path.as_deref().unwrap_or("")
    }
}

impl str::FromStr for Target {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let (host_port, path) = if raw.contains("http://") || raw.contains("https://") {
            (raw, None)
        } else {
            match raw.find('/') {
                Some(slash) => (&raw[..slash], Some(raw[slash + 1..].to_string())),
                None => (raw, None),
            }
        };

        let (hostname, port) = match host_port.find(':') {
            Some(colon) => (
                host_port[..colon].to_string(),
                Some(host_port[colon + 1..].to_string()),
            ),
            None => (host_port.to_string(), None),
        };

        Ok(Target {
            hostname,
            port,
            path,
        })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.hostname)?;
        if let Some(port) = &self.port {
            write!(f, ":{}", port)?;
        }
        if let Some(path) = &self.path {
            write!(f, "/{}", path)?;
        }
        Ok(())
    }
}
