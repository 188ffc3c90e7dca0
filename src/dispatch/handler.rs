// Copyright 2025-2026 Kindrouter Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-kind handlers.

use thiserror::Error;

use crate::manifest::ResourceObject;

/// Failure inside a handler. Captured per document, never fatal to the
/// batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("handler for kind {kind} failed: {reason}")]
pub struct HandlerError {
    pub kind: String,
    pub reason: String,
}

impl HandlerError {
    pub fn new(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { kind: kind.into(), reason: reason.into() }
    }
}

/// Side-effect point for one routed kind.
///
/// Handlers only inspect the object; they must not mutate it or any
/// shared state.
pub trait KindHandler: Send + Sync {
    fn handle(&self, object: &ResourceObject) -> Result<(), HandlerError>;
}

/// Default handler: logs the routed object and does nothing else.
#[derive(Debug, Default)]
pub struct TraceHandler;

impl KindHandler for TraceHandler {
    fn handle(&self, object: &ResourceObject) -> Result<(), HandlerError> {
        match object.name() {
            Some(name) => tracing::info!(kind = %object.kind(), name = %name, "routed object"),
            None => tracing::info!(kind = %object.kind(), "routed object without typed variant"),
        }
        Ok(())
    }
}
