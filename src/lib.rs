// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic client for Kubernetes resources whose bodies are rendered from templates.

pub mod config;
pub mod constants;
pub mod error;
pub mod reify;
pub mod resource;


pub use config::Config;
pub use error::{ResourceError, Result};
pub use reify::{FileReifier, Reifier};
pub use resource::{OwnerMatch, RequestObserver, ResourceClient, TracingObserver};
