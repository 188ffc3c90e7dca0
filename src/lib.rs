// Copyright 2025-2026 Kindrouter Contributors
// SPDX-License-Identifier: Apache-2.0

//! kindrouter - manifest classification and dispatch engine.
//!
//! Decodes a directory of serialized Kubernetes-style resource manifests
//! into strongly-typed objects, admits each object's kind against an
//! allow-list, and routes admitted objects to kind-specific handlers.
//! Per document, exactly one of four outcomes is produced: routed to a
//! kind handler, routed to the unknown handler, rejected by admission,
//! or decode failed.
//!
//! Admission deliberately uses substring pattern matching while routing
//! uses exact kind equality; see [`dispatch::admission`] for the
//! rationale and the exact-match alternative.

pub mod config;
pub mod dispatch;
pub mod manifest;
pub mod pipeline;

pub use config::Config;
pub use dispatch::{AllowList, HandlerError, KindHandler, Router};
pub use manifest::{decode, DecodeError, ResourceObject, SchemaIdentity};
pub use pipeline::{read_manifest_dir, Engine, ErrorPolicy, Summary};
