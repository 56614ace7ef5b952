use crate::error::{Error, Result};
use std::fmt;
use std::io;

/// Longest request ever put on the wire; anything longer is truncated at
/// this boundary.
pub const MAX_REQUEST_LEN: usize = 16384;

/// A single HTTP/1.1 GET request.
///
/// Lines are terminated with a bare line feed, and the `Host` header
/// always carries a colon, even when the port is empty:
///
/// ```text
/// GET /<path> HTTP/1.1
/// Host: <hostname>:<port>
/// Connection: close
/// ```
///
/// Absent port or path must be supplied as `""` by the caller.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GetRequest {
    hostname: String,
    port: String,
    path: String,
}

impl GetRequest {
    pub fn new<H: Into<String>, P: Into<String>, Q: Into<String>>(
        hostname: H,
        port: P,
        path: Q,
    ) -> Self {
        GetRequest {
            hostname: hostname.into(),
            port: port.into(),
            path: path.into(),
        }
    }

    /// The encoded request, truncated at [`MAX_REQUEST_LEN`] bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.to_string().into_bytes();
        bytes.truncate(MAX_REQUEST_LEN);
        bytes
    }

    /// Writes the whole request to `w`, looping until the transport has
    /// accepted every byte, then flushes. Returns the byte count sent.
    pub fn send<W: io::Write>(&self, w: &mut W) -> Result<usize> {
        let bytes = self.to_bytes();
        w.write_all(&bytes).map_err(Error::Send)?;
        w.flush().map_err(Error::Send)?;
        Ok(bytes.len())
    }
}

impl fmt::Display for GetRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "GET /{} HTTP/1.1", self.path)?;
        writeln!(f, "Host: {}:{}", self.hostname, self.port)?;
        writeln!(f, "Connection: close")?;
        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::Target;

    #[test]
    fn formats_path_with_empty_port() {
        let request = GetRequest::new("example.com", "", "index.html");
        assert_eq!(
            request.to_string(),
            "GET /index.html HTTP/1.1\nHost: example.com:\nConnection: close\n\n"
        );
    }

    #[test]
    fn formats_port_with_empty_path() {
        let request = GetRequest::new("example.com", "8080", "");
        assert_eq!(
            request.to_string(),
            "GET / HTTP/1.1\nHost: example.com:8080\nConnection: close\n\n"
        );
    }

    #[test]
    fn formats_all_fields() {
        let request = GetRequest::new("example.com", "8080", "a/b/c");
        assert_eq!(
            request.to_bytes(),
            b"GET /a/b/c HTTP/1.1\nHost: example.com:8080\nConnection: close\n\n".as_slice()
        );
    }

    #[test]
    fn oversized_request_is_truncated_at_the_cap() {
        let path = "p".repeat(MAX_REQUEST_LEN * 2);
        let bytes = GetRequest::new("example.com", "80", path.as_str()).to_bytes();
        assert_eq!(bytes.len(), MAX_REQUEST_LEN);
        assert!(bytes.starts_with(b"GET /ppp"));
    }

    #[test]
    fn truncation_is_byte_level() {
        // A multi-byte character straddling the cap must not panic.
        let path = "\u{e9}".repeat(MAX_REQUEST_LEN);
        let bytes = GetRequest::new("example.com", "80", path.as_str()).to_bytes();
        assert_eq!(bytes.len(), MAX_REQUEST_LEN);
    }

    #[test]
    fn host_header_round_trips_through_the_parser() {
        let request = GetRequest::new("example.com", "8080", "pie").to_string();
        let host_line = request
            .lines()
            .find(|line| line.starts_with("Host: "))
            .unwrap();
        let target: Target = host_line["Host: ".len()..].parse().unwrap();
        assert_eq!(target.hostname, "example.com");
        assert_eq!(target.port.as_deref(), Some("8080"));
    }

    /// Accepts at most a few bytes per write call.
    struct TrickleWriter {
        written: Vec<u8>,
    }

    impl io::Write for TrickleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(7);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn send_delivers_the_whole_request_to_a_trickling_transport() {
        let request = GetRequest::new("example.com", "8080", "index.html");
        let mut writer = TrickleWriter { written: Vec::new() };
        let sent = request.send(&mut writer).unwrap();
        assert_eq!(sent, request.to_bytes().len());
        assert_eq!(writer.written, request.to_bytes());
    }

    #[test]
    fn send_surfaces_transport_errors() {
        struct BrokenWriter;

        impl io::Write for BrokenWriter {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer went away"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let request = GetRequest::new("example.com", "8080", "");
        assert!(matches!(
            request.send(&mut BrokenWriter),
            Err(Error::Send(_))
        ));
    }
}
