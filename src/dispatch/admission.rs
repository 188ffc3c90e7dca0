// Copyright 2025-2026 Kindrouter Contributors
// SPDX-License-Identifier: Apache-2.0

//! Allow-list admission for resource kinds.
//!
//! The default allow-list is a substring pattern, so a kind like
//! `ServiceAccountBinding` is admitted because it contains
//! `ServiceAccount`. Routing later uses exact matching, so such a kind
//! ends up at the unknown handler. The exact mode unifies both checks
//! for callers that do not need the permissive behavior.

use std::collections::BTreeSet;
use std::str::FromStr;

use regex::Regex;

/// Kinds the engine is willing to route past admission, as a substring
/// pattern. `Pod` is deliberately absent.
pub const DEFAULT_KIND_PATTERN: &str =
    "Role|ClusterRole|RoleBinding|ClusterRoleBinding|ServiceAccount|Service|Deployment";

/// Admission semantics selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdmissionMode {
    /// Substring pattern match (default).
    #[default]
    Pattern,
    /// Exact kind-name match.
    Exact,
}

impl AdmissionMode {
    /// Build the default allow-list for this mode.
    pub fn allow_list(self) -> AllowList {
        match self {
            Self::Pattern => AllowList::default_pattern(),
            Self::Exact => AllowList::default_exact(),
        }
    }
}

impl FromStr for AdmissionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pattern" => Ok(Self::Pattern),
            "exact" => Ok(Self::Exact),
            other => Err(format!("unknown admission mode: {other}")),
        }
    }
}

/// Set of kind names admitted for routing.
#[derive(Debug, Clone)]
pub enum AllowList {
    /// Substring match against a pattern.
    Pattern(Regex),
    /// Exact membership in a set of kind names.
    Exact(BTreeSet<String>),
}

impl AllowList {
    /// Allow-list from a custom substring pattern.
    pub fn pattern(expr: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(expr)?))
    }

    /// Allow-list from exact kind names.
    pub fn exact<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exact(kinds.into_iter().map(Into::into).collect())
    }

    /// Default substring allow-list.
    pub fn default_pattern() -> Self {
        Self::Pattern(Regex::new(DEFAULT_KIND_PATTERN).unwrap())
    }

    /// Default kinds as an exact-match set.
    pub fn default_exact() -> Self {
        Self::exact(DEFAULT_KIND_PATTERN.split('|'))
    }

    /// Whether a kind passes admission.
    pub fn admits(&self, kind: &str) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.is_match(kind),
            Self::Exact(set) => set.contains(kind),
        }
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::default_pattern()
    }
}

#[cfg(test)]
#[path = "admission_tests.rs"]
mod tests;
