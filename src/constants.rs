// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Field selector keys used to filter listed objects by owner
pub mod selectors {
    /// API version of the first owner reference
    pub const OWNER_API_VERSION: &str = "metadata.ownerReferences[0].apiVersion";
    /// Kind of the first owner reference
    pub const OWNER_KIND: &str = "metadata.ownerReferences[0].kind";
}

/// Environment variables read by `Config::from_env`
pub mod env {
    /// Directory the file reifier loads templates from
    pub const TEMPLATE_DIR: &str = "TEMPLATE_DIR";
    /// Owner reference matching mode for list calls (`first` or `any`)
    pub const OWNER_REFERENCE_MATCH: &str = "OWNER_REFERENCE_MATCH";
}
