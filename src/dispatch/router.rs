// Copyright 2025-2026 Kindrouter Contributors
// SPDX-License-Identifier: Apache-2.0

//! Exact-kind routing through a handler table.
//!
//! Adding support for a new kind is one [`Router::register`] call; the
//! routing core never changes.

use std::collections::HashMap;

use crate::manifest::{kinds, ResourceObject, SchemaIdentity};

use super::handler::{HandlerError, KindHandler, TraceHandler};

/// Result of routing one admitted document.
#[derive(Debug)]
pub enum RouteResult {
    /// A registered handler ran successfully.
    Handled,
    /// No exact handler for the kind; the unknown handler ran.
    HandledUnknown,
    /// The invoked handler failed.
    Failed(HandlerError),
}

/// Table of kind handlers plus the unknown fall-through.
pub struct Router {
    handlers: HashMap<&'static str, Box<dyn KindHandler>>,
    unknown: Box<dyn KindHandler>,
}

impl Router {
    /// Empty table with the default unknown handler.
    pub fn new() -> Self {
        Self { handlers: HashMap::new(), unknown: Box::new(TraceHandler) }
    }

    /// Table with a [`TraceHandler`] for every typed kind.
    pub fn with_trace_handlers() -> Self {
        let mut router = Self::new();
        for kind in kinds::HANDLED {
            router.register(kind, Box::new(TraceHandler));
        }
        router
    }

    /// Register (or replace) the handler for an exact kind name.
    pub fn register(&mut self, kind: &'static str, handler: Box<dyn KindHandler>) {
        self.handlers.insert(kind, handler);
    }

    /// Replace the unknown fall-through handler.
    pub fn set_unknown_handler(&mut self, handler: Box<dyn KindHandler>) {
        self.unknown = handler;
    }

    /// Registered kind names, sorted.
    pub fn handled_kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<&'static str> = self.handlers.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    /// Route an admitted object to exactly one handler.
    ///
    /// Lookup is exact string equality on `identity.kind`, independent of
    /// the admission pattern. Kinds that were admitted loosely but have
    /// no table entry go to the unknown handler.
    pub fn route(&self, object: &ResourceObject, identity: &SchemaIdentity) -> RouteResult {
        match self.handlers.get(identity.kind.as_str()) {
            Some(handler) => match handler.handle(object) {
                Ok(()) => RouteResult::Handled,
                Err(e) => RouteResult::Failed(e),
            },
            None => {
                tracing::debug!(kind = %identity.kind, "no exact handler, using unknown handler");
                match self.unknown.handle(object) {
                    Ok(()) => RouteResult::HandledUnknown,
                    Err(e) => RouteResult::Failed(e),
                }
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::with_trace_handlers()
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
