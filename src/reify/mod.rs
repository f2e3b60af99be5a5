// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Turning a template identifier and a data object into a serialized resource body.

pub mod file;
pub mod template;

pub use file::FileReifier;

use crate::error::Result;
use serde_json::Value;

/// Produces the serialized body of a resource from a template and its data.
pub trait Reifier: Send + Sync {
    fn reify(&self, template: &str, data: &Value) -> Result<Vec<u8>>;
}

impl<F> Reifier for F
where
    F: Fn(&str, &Value) -> Result<Vec<u8>> + Send + Sync,
{
    fn reify(&self, template: &str, data: &Value) -> Result<Vec<u8>> {
        self(template, data)
    }
}
