use super::body::read_body;
use super::decode::decode;
use super::request::{OutgoingRequest, send};
use super::response::parse_headers;
use super::scanner::{LineEnding, LineScanner};
use super::source::ByteSource;
use crate::log::{debug, error, info};
use crate::network::error::Error;
use crate::network::{Close, Connect, Connection};
use alloc::format;
use alloc::string::String;

/// Where the request goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    /// Host name, used both to connect and as the `Host` header value.
    pub host: &'a str,
    /// TCP port.
    pub port: u16,
    /// Request target.
    pub path: &'a str,
}

impl Endpoint<'static> {
    /// The turtle-graphics decoding service.
    pub const DEFAULT: Endpoint<'static> = Endpoint {
        host: "www.staff.city.ac.uk",
        port: 80,
        path: "/s.hunt/Turtle.php",
    };
}

impl Default for Endpoint<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Endpoint<'_> {
    /// `host:port`, as handed to a [`Connect`] implementation.
    pub fn remote(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Options for the response side of the exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Treatment of the byte after each CR in the response headers.
    pub line_ending: LineEnding,
}

/// Progress of one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExchangeState {
    Idle,
    RequestSent,
    HeadersParsing,
    BodyReading,
    Decoded,
    Failed,
}

fn advance(state: &mut ExchangeState, next: ExchangeState) {
    debug!("exchange {:?} -> {:?}", *state, next);
    *state = next;
}

/// Runs one POST exchange over an owned connection.
///
/// The client is single-use: [`exchange`](Client::exchange) consumes it and
/// closes the connection on every path, successful or not.
#[derive(Debug)]
pub struct Client<'a, C: Connection> {
    connection: C,
    endpoint: Endpoint<'a>,
    options: Options,
    state: ExchangeState,
}

impl<'a, C: Connection> Client<'a, C> {
    /// Wraps an open connection to `endpoint` with default options.
    pub fn new(connection: C, endpoint: Endpoint<'a>) -> Self {
        Self::with_options(connection, endpoint, Options::default())
    }

    /// Wraps an open connection to `endpoint`.
    pub fn with_options(connection: C, endpoint: Endpoint<'a>, options: Options) -> Self {
        Self {
            connection,
            endpoint,
            options,
            state: ExchangeState::Idle,
        }
    }

    /// Sends `payload` as the request body and returns the decoded response
    /// body.
    ///
    /// Blocks until the declared body has been read or the peer closes the
    /// connection. The connection is closed before returning. If both the
    /// exchange and the close fail, the exchange error is reported.
    pub fn exchange(mut self, payload: &[u8]) -> Result<String, Error> {
        let outcome = self.run(payload);
        if let Err(_e) = &outcome {
            error!("exchange failed in state {:?}: {}", self.state, _e);
            advance(&mut self.state, ExchangeState::Failed);
        }

        let closed = self.connection.close().map_err(|_e| {
            error!("closing connection failed: {:?}", _e);
            Error::CloseError
        });

        let text = outcome?;
        closed?;
        Ok(text)
    }

    fn run(&mut self, payload: &[u8]) -> Result<String, Error> {
        let request = OutgoingRequest {
            path: self.endpoint.path,
            host: self.endpoint.host,
            body: payload,
        };
        send(&request, &mut self.connection)?;
        advance(&mut self.state, ExchangeState::RequestSent);

        let mut source = ByteSource::new(&mut self.connection);

        advance(&mut self.state, ExchangeState::HeadersParsing);
        let meta = {
            let mut scanner = LineScanner::new(&mut source, self.options.line_ending);
            parse_headers(&mut scanner)?
        };

        advance(&mut self.state, ExchangeState::BodyReading);
        let body = read_body(&mut source, meta.declared_body_length)?;

        let text = decode(&body)?;
        advance(&mut self.state, ExchangeState::Decoded);
        info!(
            "POST {} -> {} ({} body bytes)",
            self.endpoint.path,
            meta.status_line.as_deref().unwrap_or("<no status line>"),
            body.received()
        );
        Ok(text)
    }
}

/// Opens a connection to `endpoint` through `connector` and runs one
/// exchange on it.
pub fn post<N>(connector: &mut N, endpoint: Endpoint<'_>, options: Options, payload: &[u8]) -> Result<String, Error>
where
    N: Connect,
    N::Error: Into<Error>,
{
    let remote = endpoint.remote();
    let connection = connector.connect(&remote).map_err(|e| -> Error {
        error!("connecting to {} failed: {:?}", remote, e);
        e.into()
    })?;
    debug!("connected to {}", remote);
    Client::with_options(connection, endpoint, options).exchange(payload)
}
