pub mod logger;
pub mod span;

#[doc(hidden)]
pub use tracing;

pub use span::{EnteredSpan, Span};
