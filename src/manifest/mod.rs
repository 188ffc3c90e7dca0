// Copyright 2025-2026 Kindrouter Contributors
// SPDX-License-Identifier: Apache-2.0

//! Manifest decoding.
//!
//! Turns one serialized resource document into a typed [`ResourceObject`]
//! plus its [`SchemaIdentity`].

pub mod decoder;
pub mod types;

pub use decoder::{decode, DecodeError};
pub use types::{kinds, ResourceObject, SchemaIdentity};
