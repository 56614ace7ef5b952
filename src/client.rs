use crate::error::{Error, Result};
use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use tracing::debug;

/// Upper bound on a single read while draining a response.
pub const RECV_CHUNK_LEN: usize = 4095;

/// Resolves `hostname` with the given port and connects to the first
/// candidate address that accepts, in resolver order.
///
/// There is no default port: a target without one cannot be resolved and
/// fails with [`Error::MissingPort`].
pub fn connect(hostname: &str, port: Option<&str>) -> Result<TcpStream> {
    let port = port.ok_or_else(|| Error::MissingPort {
        hostname: hostname.into(),
    })?;
    let port: u16 = port.parse().map_err(|source| Error::InvalidPort {
        port: port.into(),
        source,
    })?;

    let authority = format!("{}:{}", hostname, port);
    let addrs = (hostname, port)
        .to_socket_addrs()
        .map_err(|source| Error::Connect {
            authority: authority.clone(),
            source,
        })?;

    let mut last_error = None;
    for addr in addrs {
        debug!(%addr, "connecting");
        match TcpStream::connect(addr) {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                debug!(%addr, error = %e, "connect attempt failed");
                last_error = Some(e);
            }
        }
    }

    Err(Error::Connect {
        authority,
        source: last_error.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                "resolver returned no addresses",
            )
        }),
    })
}

/// Reads `reader` to end-of-stream in bounded chunks, forwarding every
/// byte to `out` in arrival order. Returns the number of bytes forwarded.
///
/// The stream is opaque bytes; nothing is interpreted. A read error ends
/// the drain with [`Error::Receive`] rather than being folded into a
/// clean end-of-stream.
pub fn drain<R: io::Read, W: io::Write>(reader: &mut R, out: &mut W) -> Result<u64> {
    let mut chunk = [0u8; RECV_CHUNK_LEN];
    let mut forwarded = 0u64;
    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => return Ok(forwarded),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Receive(e)),
        };
        out.write_all(&chunk[..n])?;
        forwarded += n as u64;
    }
}
