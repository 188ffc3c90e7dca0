// Copyright 2025-2026 Kindrouter Contributors
// SPDX-License-Identifier: Apache-2.0

//! Kind classification and dispatch.
//!
//! Admission checks a decoded document's kind against the allow-list;
//! routing then invokes exactly one handler by exact kind match.

pub mod admission;
pub mod handler;
pub mod router;

pub use admission::{AdmissionMode, AllowList, DEFAULT_KIND_PATTERN};
pub use handler::{HandlerError, KindHandler, TraceHandler};
pub use router::{RouteResult, Router};
