// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Interactive provisioning of JumpServer asset permissions
//!
//! [`app::run`] connects to the server described by a [`config::Settings`],
//! then [`workflow::PermissionWorkflow`] walks the operator through one or
//! more permission-creation rounds.

pub mod app;
pub mod config;
pub mod csv_source;
pub mod logging;
pub mod prompt;
pub mod selection;
pub mod summary;
pub mod workflow;
