// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identity newtypes for the entities this crate talks about.
//!
//! `NodeId` lives in its own [`crate::node`] module, kept separate for
//! clarity rather than for any extra payload it carries; everything else
//! identity-shaped lives here.

crate::define_id! {
    /// Unique identifier for an allocated container.
    pub struct ContainerId("cnt-");
}

crate::define_id! {
    /// Identifier for the application attempt that owns a container.
    pub struct AppAttemptId("att-");
}

crate::define_id! {
    /// Identifier for the application an attempt belongs to.
    pub struct ApplicationId("app-");
}

#[cfg(test)]
#[path = "ids_tests.rs"]
mod tests;
