// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Session startup: connect, probe the server, greet, then hand off to the
//! workflow

use anyhow::{Context, Result};
use jms_client::ServerClient;
use tracing::{error, info};

use crate::config::Settings;
use crate::prompt::Prompter;
use crate::summary::RunSummary;
use crate::workflow::PermissionWorkflow;

pub const BANNER: &str = "\
JumpServer asset permission tool

Each asset permission grants a set of users access to a set of assets
through a set of system users, inside one organization. You will be asked
for the organization, a name, then the users, system users and assets.
Leave a prompt empty to finish the current step.";

/// Run one interactive session
///
/// Returns `None` if the operator quit at the banner.
///
/// # Errors
/// Fails if the client cannot be built, credentials are rejected, the
/// connectivity probe fails, or the prompter fails.
pub async fn run<P: Prompter + ?Sized>(
    settings: &Settings,
    prompter: &mut P,
) -> Result<Option<RunSummary>> {
    let mut client = ServerClient::connect(settings.client_config())
        .await
        .with_context(|| format!("Failed to connect to {}", settings.base_url()))?;

    prompter.info("Testing server connectivity...");
    if let Err(e) = client.check_health().await {
        let reason = e
            .detail()
            .map(str::to_string)
            .unwrap_or_else(|| e.to_string());
        error!(error = %e, "connectivity test failed");
        anyhow::bail!("Server connectivity test failed: {}", reason);
    }
    info!(server = %client.base_url(), "connectivity test passed");
    prompter.info("Server connectivity OK");

    prompter.info(BANNER);
    if !prompter.confirm("Continue?", true)? {
        prompter.info("Quit");
        return Ok(None);
    }

    let workflow = PermissionWorkflow::new(&mut client, &mut *prompter, &settings.name_prefix);
    let summary = workflow.run().await?;
    info!(
        created = summary.created_names().len(),
        failed = summary.failed_count(),
        cancelled = summary.cancelled_count(),
        "session finished"
    );
    summary.render(prompter);
    Ok(Some(summary))
}
