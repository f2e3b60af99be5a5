// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Template-backed resource client, owner filtering and request observation.

pub mod client;
pub mod observer;
pub mod selector;

pub use client::ResourceClient;
pub use observer::{RequestObserver, TracingObserver};
pub use selector::{owner_field_selector, OwnerMatch};
