#[doc(hidden)]
pub use tracing;

/// Creates a new [`Span`] with the given `name` at the current callsite.
#[macro_export]
macro_rules! trace_span {
    ($name:expr) => {{
        $crate::span::Span {
            inner: $crate::span::tracing::span!($crate::span::tracing::Level::TRACE, $name),
        }
    }};
}

/// A `Span` represents a zone of time in which an operation is being run.
#[derive(Clone, Debug)]
pub struct Span {
    #[doc(hidden)]
    pub inner: tracing::span::Span,
}

impl Span {
    /// Enters this span.
    pub fn entered(self) -> EnteredSpan {
        EnteredSpan {
            _inner: self.inner.entered(),
        }
    }
}

/// A handle to a [`Span`] that is currently active.
#[derive(Debug)]
#[non_exhaustive]
pub struct EnteredSpan {
    _inner: tracing::span::EnteredSpan,
}
