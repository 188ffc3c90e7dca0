//! Per-document outcome records, run summary, and report sinks.

use std::fmt;

use serde::Serialize;

/// Terminal outcome for one document.
///
/// Exactly one of these is produced per input document; handler failure
/// is the captured form of the routed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Admitted and handled by the exact-kind handler.
    Routed { kind: String },
    /// Admitted, no exact handler, handled by the unknown handler.
    RoutedUnknown { kind: String },
    /// Kind did not pass the allow-list.
    Rejected { kind: String },
    /// Admitted and routed, but the handler failed.
    HandlerFailed { kind: String, reason: String },
    /// The document could not be decoded.
    DecodeFailed { reason: String },
}

/// Outcome record for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub source: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl fmt::Display for DocumentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Routed { kind } => write!(f, "{}: routed kind={}", self.source, kind),
            Outcome::RoutedUnknown { kind } => {
                write!(f, "{}: routed to unknown handler kind={}", self.source, kind)
            }
            Outcome::Rejected { kind } => {
                write!(f, "{}: rejected kind={} (not in allow-list)", self.source, kind)
            }
            Outcome::HandlerFailed { kind, reason } => {
                write!(f, "{}: handler failed kind={}: {}", self.source, kind, reason)
            }
            Outcome::DecodeFailed { reason } => {
                write!(f, "{}: decode failed: {}", self.source, reason)
            }
        }
    }
}

/// Counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub documents: usize,
    pub decoded: usize,
    pub admitted: usize,
    pub routed: usize,
    pub routed_unknown: usize,
    pub rejected: usize,
    pub handler_failed: usize,
    pub decode_failed: usize,
}

impl Summary {
    /// Fold one document outcome into the counts.
    pub fn record(&mut self, outcome: &Outcome) {
        self.documents += 1;
        match outcome {
            Outcome::Routed { .. } => {
                self.decoded += 1;
                self.admitted += 1;
                self.routed += 1;
            }
            Outcome::RoutedUnknown { .. } => {
                self.decoded += 1;
                self.admitted += 1;
                self.routed_unknown += 1;
            }
            Outcome::Rejected { .. } => {
                self.decoded += 1;
                self.rejected += 1;
            }
            Outcome::HandlerFailed { .. } => {
                self.decoded += 1;
                self.admitted += 1;
                self.handler_failed += 1;
            }
            Outcome::DecodeFailed { .. } => {
                self.decode_failed += 1;
            }
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "documents={} decoded={} admitted={} routed={} routed_unknown={} rejected={} handler_failed={} decode_failed={}",
            self.documents,
            self.decoded,
            self.admitted,
            self.routed,
            self.routed_unknown,
            self.rejected,
            self.handler_failed,
            self.decode_failed,
        )
    }
}

/// Destination for outcome records.
///
/// Records arrive in batch order, one per document, followed by exactly
/// one summary when the run completes.
pub trait ReportSink {
    fn record(&mut self, report: &DocumentReport);
    fn finish(&mut self, summary: &Summary);
}

/// Human-readable lines on stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn record(&mut self, report: &DocumentReport) {
        println!("{report}");
    }

    fn finish(&mut self, summary: &Summary) {
        println!("summary: {summary}");
    }
}

/// One JSON object per line on stdout.
#[derive(Debug, Default)]
pub struct JsonSink;

impl ReportSink for JsonSink {
    fn record(&mut self, report: &DocumentReport) {
        match serde_json::to_string(report) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::error!(source = %report.source, "failed to serialize report: {e}"),
        }
    }

    fn finish(&mut self, summary: &Summary) {
        match serde_json::to_string(summary) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::error!("failed to serialize summary: {e}"),
        }
    }
}

/// In-memory sink for inspection in tests and embedding callers.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub reports: Vec<DocumentReport>,
    pub summary: Option<Summary>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for MemorySink {
    fn record(&mut self, report: &DocumentReport) {
        self.reports.push(report.clone());
    }

    fn finish(&mut self, summary: &Summary) {
        self.summary = Some(*summary);
    }
}
