//! Decode → admit → route, per document, in batch order.

use std::str::FromStr;

use thiserror::Error;

use crate::dispatch::{AllowList, RouteResult, Router};
use crate::manifest::{decode, DecodeError};

use super::batch::{DocumentBatch, ManifestDocument};
use super::report::{DocumentReport, Outcome, ReportSink, Summary};

/// What to do with the rest of the batch when a document fails to
/// decode. Stop-on-error is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    #[default]
    StopOnError,
    ContinueOnError,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stop" => Ok(Self::StopOnError),
            "continue" => Ok(Self::ContinueOnError),
            other => Err(format!("unknown error policy: {other}")),
        }
    }
}

/// Fatal halt under [`ErrorPolicy::StopOnError`].
///
/// Carries the decode error that stopped the run and the summary of the
/// documents processed up to and including it.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct EngineHalted {
    pub error: DecodeError,
    pub summary: Summary,
}

/// The classification and dispatch engine.
///
/// Holds only read-only state (allow-list, handler table, policy); every
/// document is processed independently.
pub struct Engine {
    allow_list: AllowList,
    router: Router,
    policy: ErrorPolicy,
}

impl Engine {
    pub fn new(allow_list: AllowList, router: Router, policy: ErrorPolicy) -> Self {
        Self { allow_list, router, policy }
    }

    /// Default configuration: substring allow-list, trace handlers for
    /// every typed kind, stop-on-error.
    pub fn with_defaults() -> Self {
        Self::new(AllowList::default_pattern(), Router::with_trace_handlers(), ErrorPolicy::default())
    }

    /// Process a batch top to bottom, recording one outcome per document
    /// into `sink` and a summary on completion.
    ///
    /// Under stop-on-error the failing document's outcome is still
    /// recorded, no later document is touched, the sink sees no summary,
    /// and the error surfaces as [`EngineHalted`].
    pub fn process(
        &self,
        batch: &DocumentBatch,
        sink: &mut dyn ReportSink,
    ) -> Result<Summary, EngineHalted> {
        let mut summary = Summary::default();

        for document in batch {
            let outcome = match self.process_document(document) {
                Ok(outcome) => outcome,
                Err(error) => {
                    let outcome = Outcome::DecodeFailed { reason: error.to_string() };
                    summary.record(&outcome);
                    sink.record(&DocumentReport { source: document.source.clone(), outcome });
                    if self.policy == ErrorPolicy::StopOnError {
                        return Err(EngineHalted { error, summary });
                    }
                    continue;
                }
            };
            summary.record(&outcome);
            sink.record(&DocumentReport { source: document.source.clone(), outcome });
        }

        tracing::info!(
            documents = summary.documents,
            routed = summary.routed,
            rejected = summary.rejected,
            decode_failed = summary.decode_failed,
            "batch complete"
        );
        sink.finish(&summary);
        Ok(summary)
    }

    fn process_document(&self, document: &ManifestDocument) -> Result<Outcome, DecodeError> {
        let (object, identity) = decode(&document.source, &document.bytes)?;
        tracing::debug!(source = %document.source, identity = %identity, "decoded manifest");

        if !self.allow_list.admits(&identity.kind) {
            tracing::debug!(source = %document.source, kind = %identity.kind, "kind rejected by allow-list");
            return Ok(Outcome::Rejected { kind: identity.kind });
        }

        let result = self.router.route(&object, &identity);
        Ok(match result {
            RouteResult::Handled => Outcome::Routed { kind: identity.kind },
            RouteResult::HandledUnknown => Outcome::RoutedUnknown { kind: identity.kind },
            RouteResult::Failed(e) => {
                Outcome::HandlerFailed { kind: identity.kind, reason: e.reason }
            }
        })
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
