// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! jms-perms - create JumpServer asset permissions interactively

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use jms_perms::config::{DEFAULT_CONFIG_PATH, Settings};
use jms_perms::prompt::ConsolePrompter;
use jms_perms::{app, logging};

#[derive(Parser)]
#[command(
    name = "jms-perms",
    version,
    about = "Create JumpServer asset permissions interactively",
    long_about = "Interactive CLI that looks up users, system users and assets on a \
                  JumpServer instance and binds them into asset permissions"
)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(&cli.config)?;
    logging::init(&settings.log)?;
    info!(
        config = %cli.config.display(),
        server = %settings.base_url(),
        auth = settings.credentials.mode(),
        "session started"
    );

    let mut prompter = ConsolePrompter::new();
    app::run(&settings, &mut prompter).await?;
    Ok(())
}
