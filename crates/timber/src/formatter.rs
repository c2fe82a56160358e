use std::{fs::File, io, sync::Arc};

use tracing_core::Subscriber;
use tracing_subscriber::{Layer, filter::LevelFilter, fmt, registry::LookupSpan};

use crate::Level;

/// Terminal output: the message and its fields, nothing else
pub(crate) fn console<S>(level: Level) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .without_time()
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .with_filter(LevelFilter::from_level(level))
}

/// Log file output: timestamped, with level and target, never colored
pub(crate) fn file<S>(file: File, level: Level) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .with_filter(LevelFilter::from_level(level))
}
