use clap::Parser;
use httpcat::client;
use httpcat::protocol::GetRequest;
use httpcat::url::Target;
use std::io::{self, Write};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Fetch one URL over plain HTTP and stream the raw response to stdout.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Connection target, `HOSTNAME[:PORT][/PATH]`
    target: String,
}

fn init_logging() {
    // stdout carries the response bytes; all diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn run(args: Args) -> httpcat::error::Result<()> {
    let target: Target = args.target.parse()?;
    debug!(
        hostname = %target.hostname,
        port = target.port_or_empty(),
        path = target.path_or_empty(),
        "parsed target"
    );

    let mut stream = client::connect(&target.hostname, target.port.as_deref())?;

    let request = GetRequest::new(
        target.hostname.as_str(),
        target.port_or_empty(),
        target.path_or_empty(),
    );
    let sent = request.send(&mut stream)?;
    debug!(bytes = sent, "request sent");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let received = client::drain(&mut stream, &mut out)?;
    debug!(bytes = received, "response drained");

    // One trailing newline after the response, unconditionally.
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging();

    if let Err(err) = run(args) {
        eprintln!("httpcat: {}", err);
        process::exit(1);
    }
}
