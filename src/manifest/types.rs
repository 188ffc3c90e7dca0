// Copyright 2025-2026 Kindrouter Contributors
// SPDX-License-Identifier: Apache-2.0

//! Typed resource objects and schema identity.
//!
//! The typed structs cover the fields the dispatch handlers inspect;
//! serde ignores everything else in the document.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical kind names for the typed variants.
pub mod kinds {
    pub const SERVICE_ACCOUNT: &str = "ServiceAccount";
    pub const SERVICE: &str = "Service";
    pub const DEPLOYMENT: &str = "Deployment";
    pub const ROLE: &str = "Role";
    pub const ROLE_BINDING: &str = "RoleBinding";
    pub const CLUSTER_ROLE: &str = "ClusterRole";
    pub const CLUSTER_ROLE_BINDING: &str = "ClusterRoleBinding";
    pub const POD: &str = "Pod";

    /// Every kind with a typed variant and a default handler entry.
    pub const HANDLED: [&str; 8] = [
        SERVICE_ACCOUNT,
        SERVICE,
        DEPLOYMENT,
        ROLE,
        ROLE_BINDING,
        CLUSTER_ROLE,
        CLUSTER_ROLE_BINDING,
        POD,
    ];
}

/// Group/version/kind identity of a decoded document.
///
/// Produced by the decoder and immutable afterwards. Not unique across a
/// batch; several documents may share a kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaIdentity {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl SchemaIdentity {
    /// Build an identity from a manifest's `apiVersion` and `kind` fields.
    ///
    /// `"apps/v1"` splits into group `apps`, version `v1`; a bare `"v1"`
    /// is the core group (empty group name).
    pub fn from_type_meta(api_version: &str, kind: &str) -> Self {
        let (group, version) = match api_version.split_once('/') {
            Some((group, version)) => (group.to_string(), version.to_string()),
            None => (String::new(), api_version.to_string()),
        };
        Self { group, version, kind: kind.to_string() }
    }

    /// The `apiVersion` form of the group and version.
    pub fn group_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl fmt::Display for SchemaIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Kind={}", self.group_version(), self.kind)
    }
}

/// Common object metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

/// ServiceAccount manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccount {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automount_service_account_token: Option<bool>,
}

/// Service manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: ServiceSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<HashMap<String, String>>,
    #[serde(default)]
    pub ports: Vec<ServicePort>,
    /// Service type (ClusterIP, NodePort, LoadBalancer).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub port: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// Deployment manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: DeploymentSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    pub selector: LabelSelector,
    pub template: PodTemplateSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_labels: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodTemplateSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,
    pub spec: PodSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpec {
    pub containers: Vec<Container>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ContainerPort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPort {
    pub container_port: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Pod manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: PodSpec,
}

/// RBAC policy rule shared by Role and ClusterRole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRule {
    #[serde(default)]
    pub api_groups: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    pub verbs: Vec<String>,
}

/// Role manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub rules: Vec<PolicyRule>,
}

/// ClusterRole manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRole {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub rules: Vec<PolicyRule>,
}

/// Reference from a binding to the role it grants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    pub api_group: String,
    pub kind: String,
    pub name: String,
}

/// Subject a binding applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// RoleBinding manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBinding {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    pub role_ref: RoleRef,
}

/// ClusterRoleBinding manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRoleBinding {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    pub role_ref: RoleRef,
}

/// Catch-all for kinds without a typed variant.
///
/// Built by the decoder, never deserialized directly; carries the raw
/// document so handlers can still inspect it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnknownResource {
    pub kind: String,
    pub raw: serde_yaml::Value,
}

/// A decoded manifest, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceObject {
    ServiceAccount(ServiceAccount),
    Service(Service),
    Deployment(Deployment),
    Role(Role),
    RoleBinding(RoleBinding),
    ClusterRole(ClusterRole),
    ClusterRoleBinding(ClusterRoleBinding),
    Pod(Pod),
    Unknown(UnknownResource),
}

impl ResourceObject {
    /// Kind label of this object.
    ///
    /// Typed variants report their canonical kind name; `Unknown` reports
    /// the kind declared in the document.
    pub fn kind(&self) -> &str {
        match self {
            Self::ServiceAccount(_) => kinds::SERVICE_ACCOUNT,
            Self::Service(_) => kinds::SERVICE,
            Self::Deployment(_) => kinds::DEPLOYMENT,
            Self::Role(_) => kinds::ROLE,
            Self::RoleBinding(_) => kinds::ROLE_BINDING,
            Self::ClusterRole(_) => kinds::CLUSTER_ROLE,
            Self::ClusterRoleBinding(_) => kinds::CLUSTER_ROLE_BINDING,
            Self::Pod(_) => kinds::POD,
            Self::Unknown(unknown) => &unknown.kind,
        }
    }

    /// Object name from metadata, when the variant carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::ServiceAccount(o) => Some(&o.metadata.name),
            Self::Service(o) => Some(&o.metadata.name),
            Self::Deployment(o) => Some(&o.metadata.name),
            Self::Role(o) => Some(&o.metadata.name),
            Self::RoleBinding(o) => Some(&o.metadata.name),
            Self::ClusterRole(o) => Some(&o.metadata.name),
            Self::ClusterRoleBinding(o) => Some(&o.metadata.name),
            Self::Pod(o) => Some(&o.metadata.name),
            Self::Unknown(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
