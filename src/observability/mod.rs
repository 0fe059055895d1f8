//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → rotated file
//! ```
//!
//! Traces land in `~/.local/share/zellij/flexchill/flexchill-otlp.json` (the
//! sandbox path `/host/.local/share/zellij/flexchill`), one OTLP JSON document
//! per line. The file rotates at 10 MB and keeps three backups.
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `info`. Row selections are logged at info, lifecycle at debug.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: OTLP JSON span exporter and tracer provider
//! - [`file_writer`]: Size-rotated line writer

mod exporter;
mod file_writer;
mod init;

pub use init::init_tracing;
