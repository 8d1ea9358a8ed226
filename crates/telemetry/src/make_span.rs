use tower_http::trace::MakeSpan;
use tracing::{Level, Span};

use crate::request_id::REQUEST_ID_HEADER;

/// Builds the per-request span used by `TraceLayer`.
#[derive(Debug, Clone, Copy)]
pub struct SpanFactory {
    level: Level,
}

impl SpanFactory {
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Default for SpanFactory {
    fn default() -> Self {
        Self::new(Level::INFO)
    }
}

impl<B> MakeSpan<B> for SpanFactory {
    fn make_span(&mut self, request: &http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        // `span!` requires the level to be known at compile time.
        macro_rules! make_span {
            ($level:expr) => {
                tracing::span!(
                    $level,
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                    request_id,
                )
            };
        }

        match self.level {
            Level::ERROR => make_span!(Level::ERROR),
            Level::WARN => make_span!(Level::WARN),
            Level::INFO => make_span!(Level::INFO),
            Level::DEBUG => make_span!(Level::DEBUG),
            Level::TRACE => make_span!(Level::TRACE),
        }
    }
}
