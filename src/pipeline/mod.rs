//! Batch processing pipeline.
//!
//! Enumerates a manifest directory, runs each document through decode,
//! admission, and routing, and emits per-document outcome records plus a
//! final summary.

pub mod batch;
pub mod engine;
pub mod report;

pub use batch::{read_manifest_dir, BatchError, DocumentBatch, ManifestDocument};
pub use engine::{Engine, EngineHalted, ErrorPolicy};
pub use report::{ConsoleSink, DocumentReport, JsonSink, MemorySink, Outcome, ReportSink, Summary};
