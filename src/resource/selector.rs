// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Owner reference filtering for list calls

use crate::constants::selectors;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::core::GroupVersionKind;
use std::fmt;
use std::str::FromStr;

/// How owner references are matched when listing objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnerMatch {
    /// Only the owner reference at index 0 is considered. Filtering happens
    /// server-side through a field selector, so an object whose matching owner
    /// is not listed first is excluded.
    #[default]
    FirstOnly,
    /// Any owner reference may match. The collection is listed unfiltered and
    /// narrowed client-side.
    Any,
}

impl FromStr for OwnerMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "firstonly" => Ok(OwnerMatch::FirstOnly),
            "any" => Ok(OwnerMatch::Any),
            other => Err(format!(
                "unknown owner reference match mode '{}', expected 'first' or 'any'",
                other
            )),
        }
    }
}

impl fmt::Display for OwnerMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerMatch::FirstOnly => f.write_str("first"),
            OwnerMatch::Any => f.write_str("any"),
        }
    }
}

/// Build the field selector matching objects whose first owner reference is of the given kind.
/// Keys are emitted in sorted order.
pub fn owner_field_selector(gvk: &GroupVersionKind) -> String {
    format!(
        "{}={},{}={}",
        selectors::OWNER_API_VERSION,
        escape_value(&gvk.api_version()),
        selectors::OWNER_KIND,
        escape_value(&gvk.kind)
    )
}

/// Escape a field selector value so that `\`, `,` and `=` are taken literally
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ',' | '=') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Check whether an owner reference points at an object of the given group/version/kind
pub fn owner_matches(owner: &OwnerReference, gvk: &GroupVersionKind) -> bool {
    owner.api_version == gvk.api_version() && owner.kind == gvk.kind
}

/// Check whether an object's owner references satisfy the match mode
pub fn is_owned_by(owners: &[OwnerReference], gvk: &GroupVersionKind, mode: OwnerMatch) -> bool {
    match mode {
        OwnerMatch::FirstOnly => owners.first().is_some_and(|o| owner_matches(o, gvk)),
        OwnerMatch::Any => owners.iter().any(|o| owner_matches(o, gvk)),
    }
}
