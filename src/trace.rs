//! Logging hooks for geometry and peak operations.
//!
//! Call sites use `trace_span!` and `trace_event!` unconditionally. Building
//! with the `tracing` feature routes them to debug-level `tracing` spans and
//! events; building without it leaves nothing behind at runtime.

/// Opens a debug span named `$name` with optional `key = value` fields.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::debug_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Records a debug event named `$name` with `key = value` fields.
///
/// The feature-less variant binds the field values to `_`, keeping
/// variables that exist only for logging from being reported as unused.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
    ($name:expr) => {
        tracing::debug!(name: $name)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
    ($name:expr) => {};
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Guard returned by `trace_span!` when logging is compiled out.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Same shape as `tracing::Span::entered`, so `let _span = ...` works
    /// either way.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
