//! Span injection for resolver steps.
//!
//! The resolver asks a [`SpanSource`] for a span around every operation and
//! every Service call, and runs the call inside it with
//! [`Instrument`](tracing::Instrument), so the span is entered and exited even
//! when the call fails. Spans are diagnostic only and never change a result.

use tracing::Span;

/// Creates the spans the resolver wraps its steps in.
pub trait SpanSource: Send + Sync {
    fn span(&self, name: &'static str) -> Span;
}

/// Default source: an info-level `resolve` span tagged with the step name.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSpans;

impl SpanSource for TracingSpans {
    fn span(&self, name: &'static str) -> Span {
        tracing::info_span!("resolve", op = name, service = "user")
    }
}
