// Copyright 2025-2026 Kindrouter Contributors
// SPDX-License-Identifier: Apache-2.0

//! Decodes one serialized manifest into a typed object and its identity.
//!
//! The document must be a single-document YAML (or JSON) object carrying
//! `apiVersion` and `kind`. Kinds without a typed variant decode into
//! [`UnknownResource`]; classification of acceptable kinds belongs to the
//! dispatcher, not here.

use serde::Deserialize;
use thiserror::Error;

use super::types::{kinds, ResourceObject, SchemaIdentity, UnknownResource};

/// Decode failure for a single document.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("{source_name}: document is empty")]
    EmptyDocument { source_name: String },

    #[error("{source_name}: document is missing apiVersion or kind")]
    MissingTypeMeta { source_name: String },

    #[error("{source_name}: error while decoding manifest: {reason}")]
    Malformed { source_name: String, reason: String },
}

impl DecodeError {
    /// Name of the document that failed to decode.
    pub fn source_name(&self) -> &str {
        match self {
            Self::EmptyDocument { source_name }
            | Self::MissingTypeMeta { source_name }
            | Self::Malformed { source_name, .. } => source_name,
        }
    }
}

/// Minimal probe for the schema identity fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeMeta {
    #[serde(default)]
    api_version: Option<String>,
    #[serde(default)]
    kind: Option<String>,
}

/// Decode one document buffer into `(ResourceObject, SchemaIdentity)`.
///
/// `source_name` identifies the buffer (usually the file name) and is
/// carried on every error. Decoding has no side effects; the same buffer
/// always yields the same result.
pub fn decode(
    source_name: &str,
    bytes: &[u8],
) -> Result<(ResourceObject, SchemaIdentity), DecodeError> {
    let text = std::str::from_utf8(bytes).map_err(|e| DecodeError::Malformed {
        source_name: source_name.to_string(),
        reason: format!("document is not valid UTF-8: {e}"),
    })?;

    if text.trim().is_empty() {
        return Err(DecodeError::EmptyDocument { source_name: source_name.to_string() });
    }

    let meta: TypeMeta = serde_yaml::from_str(text).map_err(|e| DecodeError::Malformed {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })?;

    let (api_version, kind) = match (meta.api_version, meta.kind) {
        (Some(api_version), Some(kind)) if !api_version.is_empty() && !kind.is_empty() => {
            (api_version, kind)
        }
        _ => return Err(DecodeError::MissingTypeMeta { source_name: source_name.to_string() }),
    };

    let identity = SchemaIdentity::from_type_meta(&api_version, &kind);
    let object = decode_object(source_name, text, &identity)?;
    Ok((object, identity))
}

fn decode_object(
    source_name: &str,
    text: &str,
    identity: &SchemaIdentity,
) -> Result<ResourceObject, DecodeError> {
    let malformed = |e: serde_yaml::Error| DecodeError::Malformed {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    };

    let object = match identity.kind.as_str() {
        kinds::SERVICE_ACCOUNT => {
            ResourceObject::ServiceAccount(serde_yaml::from_str(text).map_err(malformed)?)
        }
        kinds::SERVICE => ResourceObject::Service(serde_yaml::from_str(text).map_err(malformed)?),
        kinds::DEPLOYMENT => {
            ResourceObject::Deployment(serde_yaml::from_str(text).map_err(malformed)?)
        }
        kinds::ROLE => ResourceObject::Role(serde_yaml::from_str(text).map_err(malformed)?),
        kinds::ROLE_BINDING => {
            ResourceObject::RoleBinding(serde_yaml::from_str(text).map_err(malformed)?)
        }
        kinds::CLUSTER_ROLE => {
            ResourceObject::ClusterRole(serde_yaml::from_str(text).map_err(malformed)?)
        }
        kinds::CLUSTER_ROLE_BINDING => {
            ResourceObject::ClusterRoleBinding(serde_yaml::from_str(text).map_err(malformed)?)
        }
        kinds::POD => ResourceObject::Pod(serde_yaml::from_str(text).map_err(malformed)?),
        _ => {
            let raw = serde_yaml::from_str(text).map_err(malformed)?;
            ResourceObject::Unknown(UnknownResource { kind: identity.kind.clone(), raw })
        }
    };

    Ok(object)
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
