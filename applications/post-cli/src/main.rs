//! Sends the contents of a file to the turtle-graphics service and prints
//! the decoded reply.
//!
//! The endpoint defaults to [`Endpoint::DEFAULT`] and can be overridden with
//! `LIBPOST_HOST`, `LIBPOST_PORT` and `LIBPOST_PATH`, read from the
//! environment or a `.env` file. Set `RUST_LOG=debug` to trace the exchange.

use clap::Parser;
use libpost::network::application::http::{Endpoint, Options, post};
use libpost::network::tcp::TcpConnector;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when there is no usable input file.
const EXIT_NO_INPUT: u8 = 255;
/// Exit status when the exchange itself fails.
const EXIT_EXCHANGE_FAILED: u8 = 1;

#[derive(Debug, Parser)]
#[command(version, about = "POST a file to the turtle decoder and print the reply")]
struct Args {
    /// File whose bytes become the request body
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let Some(file) = args.file else {
        println!("no file given");
        return ExitCode::from(EXIT_NO_INPUT);
    };

    let payload = match std::fs::read(&file) {
        Ok(payload) => payload,
        Err(e) => {
            log::debug!("reading {} failed: {}", file.display(), e);
            println!("file not found");
            return ExitCode::from(EXIT_NO_INPUT);
        }
    };

    let host = env::var("LIBPOST_HOST").ok();
    let path = env::var("LIBPOST_PATH").ok();
    let port = match env::var("LIBPOST_PORT").ok().map(|p| p.parse::<u16>()) {
        None => Endpoint::DEFAULT.port,
        Some(Ok(port)) => port,
        Some(Err(e)) => {
            eprintln!("invalid LIBPOST_PORT: {e}");
            return ExitCode::from(EXIT_EXCHANGE_FAILED);
        }
    };
    let endpoint = Endpoint {
        host: host.as_deref().unwrap_or(Endpoint::DEFAULT.host),
        port,
        path: path.as_deref().unwrap_or(Endpoint::DEFAULT.path),
    };
    log::info!(
        "posting {} bytes to {}{}",
        payload.len(),
        endpoint.remote(),
        endpoint.path
    );

    match post(&mut TcpConnector, endpoint, Options::default(), &payload) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_EXCHANGE_FAILED)
        }
    }
}
