// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   add, remove, show
//! ```

pub mod add;
pub mod remove;
pub mod show;
