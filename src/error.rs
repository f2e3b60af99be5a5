// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    /// Transport, API status and decode failures, passed through as reported by kube
    #[error(transparent)]
    KubeError(#[from] kube::Error),

    #[error("Failed to reify template {template}: {message}")]
    ReifyError { template: String, message: String },

    #[error("unexpected status code ({0})")]
    UnexpectedStatus(u16),

    #[error("Invalid resource client configuration: {0}")]
    ConfigError(String),

    #[error("Invalid request argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read response body: {0}")]
    ResponseBodyError(String),
}

impl ResourceError {
    pub fn reify(template: &str, message: impl ToString) -> Self {
        ResourceError::ReifyError {
            template: template.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResourceError>;
