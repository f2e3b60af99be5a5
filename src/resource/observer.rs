// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Observation of outgoing resource requests

use tracing::info;

/// Receives every request a resource client is about to send.
///
/// `url` is the request path and query; the API server host is not included.
pub trait RequestObserver: Send + Sync {
    fn on_request(&self, verb: &str, url: &str);
}

/// Default observer, logs the request path at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, verb: &str, url: &str) {
        info!("{} resource URL: {}", verb, url);
    }
}
