// Request-scoped context values threaded through the middleware chain

use std::fmt;

/// Per-request correlation identifier.
///
/// Injected into request extensions by `trace_middleware` before any
/// business logic runs. Handlers and the auth middleware treat its absence
/// as a wiring error, not a client error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
