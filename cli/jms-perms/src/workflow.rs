// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Interactive asset permission workflow
//!
//! Each round walks the operator through:
//!
//! ```text
//! SelectOrg -> name -> SelectUsers -> SelectSystemUsers -> SelectAssets
//!           -> Review -> Submit -> Continue? -> (SelectOrg | name | done)
//! ```
//!
//! Lookup and submission failures are reported and never abort the run; the
//! operator decides through prompts whether to retry, stop or quit.

use std::path::PathBuf;

use anyhow::Result;
use jms_client::{ClientError, Lookup, Organization, ServerClient};
use tracing::{info, warn};

use crate::csv_source::{self, PathProblem};
use crate::prompt::Prompter;
use crate::selection::{Kind, Member, PermissionDraft, SelectionSet, generated_name};
use crate::summary::{RoundOutcome, RunSummary, pretty};

/// Menu entries for the asset source prompt
pub const ASSET_SOURCES: [&str; 2] = ["csv", "manual"];

/// Whether a selection stage finished or the operator abandoned the rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Proceed,
    Cancel,
}

/// Drives permission-creation rounds until the operator stops
pub struct PermissionWorkflow<'a, P: Prompter + ?Sized> {
    client: &'a mut ServerClient,
    prompter: &'a mut P,
    name_prefix: String,
    summary: RunSummary,
}

impl<'a, P: Prompter + ?Sized> PermissionWorkflow<'a, P> {
    pub fn new(
        client: &'a mut ServerClient,
        prompter: &'a mut P,
        name_prefix: impl Into<String>,
    ) -> Self {
        Self {
            client,
            prompter,
            name_prefix: name_prefix.into(),
            summary: RunSummary::new(),
        }
    }

    /// Run rounds until the operator declines to create another rule
    pub async fn run(mut self) -> Result<RunSummary> {
        let mut reuse: Option<Organization> = None;
        loop {
            let org = match reuse.take() {
                Some(org) => org,
                None => self.select_organization().await?,
            };
            self.client.set_organization_scope(&org);

            let outcome = self.run_round(&org).await?;
            self.summary.record(outcome);

            if !self
                .prompter
                .confirm("Create another asset permission?", false)?
            {
                break;
            }
            if self
                .prompter
                .confirm(&format!("Stay in organization `{}`?", org.name), true)?
            {
                reuse = Some(org);
            }
        }
        Ok(self.summary)
    }

    async fn select_organization(&mut self) -> Result<Organization> {
        loop {
            let name = self
                .prompter
                .input("Organization name (DEFAULT for the default organization)")?;
            if name.is_empty() {
                self.prompter.error("Organization name must not be empty");
                continue;
            }
            match self.client.find_organization(&name).await {
                Ok(Lookup::Found(org)) => {
                    info!(org = %org.name, org_id = %org.id, "organization selected");
                    return Ok(org);
                }
                Ok(_) => self
                    .prompter
                    .error(&format!("Organization `{}` does not exist", name)),
                Err(e) => self
                    .prompter
                    .error(&format!("Failed to look up organization `{}`: {}", name, e)),
            }
        }
    }

    async fn run_round(&mut self, org: &Organization) -> Result<RoundOutcome> {
        let name = self.prompt_name()?;
        let mut draft = PermissionDraft::new(org.clone(), name);

        if self.select_members(&mut draft.selection, Kind::User).await? == Step::Cancel
            || self
                .select_members(&mut draft.selection, Kind::SystemUser)
                .await?
                == Step::Cancel
            || self.select_assets(&mut draft.selection).await? == Step::Cancel
        {
            self.prompter.info("Asset permission cancelled");
            info!(name = %draft.name, "round cancelled during selection");
            return Ok(RoundOutcome::Cancelled);
        }

        self.review(&draft);
        if !self.prompter.confirm("Create this asset permission?", true)? {
            self.prompter.info("Asset permission creation cancelled");
            info!(name = %draft.name, "round cancelled at review");
            return Ok(RoundOutcome::Cancelled);
        }

        Ok(self.submit(&draft).await)
    }

    fn prompt_name(&mut self) -> Result<String> {
        let name = self
            .prompter
            .input("Asset permission name (leave empty to generate one)")?;
        if !name.is_empty() {
            return Ok(name);
        }
        let name = generated_name(&self.name_prefix, chrono::Utc::now().timestamp());
        self.prompter.info(&format!("Using generated name `{}`", name));
        Ok(name)
    }

    /// Prompt for keys of `kind` until the operator stops adding
    async fn select_members(&mut self, selection: &mut SelectionSet, kind: Kind) -> Result<Step> {
        loop {
            let key = self
                .prompter
                .input(&format!("Enter {} {}", kind.label(), kind.key_label()))?;

            if key.is_empty() {
                if selection.is_empty(kind) {
                    if self.confirm_cancel(kind)? {
                        return Ok(Step::Cancel);
                    }
                    continue;
                }
                break;
            }

            if self.lookup_into(selection, kind, &key).await {
                if !self
                    .prompter
                    .confirm(&format!("Add another {}?", kind.label()), false)?
                {
                    break;
                }
            } else if !selection.is_empty(kind)
                && !self
                    .prompter
                    .confirm(&format!("Keep adding {}s?", kind.label()), true)?
            {
                break;
            }
        }

        self.show_selected(selection, kind);
        Ok(Step::Proceed)
    }

    async fn select_assets(&mut self, selection: &mut SelectionSet) -> Result<Step> {
        let source = self.prompter.select("Asset source", &ASSET_SOURCES)?;
        if ASSET_SOURCES.get(source) == Some(&"csv") {
            self.select_assets_from_csv(selection).await
        } else {
            self.select_members(selection, Kind::Asset).await
        }
    }

    async fn select_assets_from_csv(&mut self, selection: &mut SelectionSet) -> Result<Step> {
        loop {
            let raw = self.prompter.input("Path to CSV file of asset hostnames")?;
            if raw.is_empty() {
                if self.confirm_cancel(Kind::Asset)? {
                    return Ok(Step::Cancel);
                }
                continue;
            }

            let path = PathBuf::from(&raw);
            match csv_source::validate_path(&path) {
                Ok(()) => {}
                Err(PathProblem::NotAFile) => {
                    self.prompter.error(&format!("`{}` is not a file", raw));
                    continue;
                }
                Err(PathProblem::NotCsv) => {
                    self.prompter
                        .error(&format!("`{}` format is not `.csv`", raw));
                    continue;
                }
            }

            let hostnames = match csv_source::read_hostnames(&path) {
                Ok(hostnames) => hostnames,
                Err(e) => {
                    self.prompter.error(&format!("{:#}", e));
                    continue;
                }
            };

            let mut found = 0usize;
            let mut missing = Vec::new();
            for hostname in &hostnames {
                if self.lookup_into(selection, Kind::Asset, hostname).await {
                    found += 1;
                } else {
                    missing.push(hostname.as_str());
                }
            }
            info!(
                file = %path.display(),
                candidates = hostnames.len(),
                found,
                missing = missing.len(),
                "CSV import finished"
            );

            if !missing.is_empty() {
                self.prompter
                    .info(&format!("Assets not found: [{}]", missing.join(", ")));
            }
            if found == 0 {
                self.prompter
                    .info(&format!("No valid assets found in `{}`", raw));
                continue;
            }
            break;
        }

        self.show_selected(selection, Kind::Asset);
        Ok(Step::Proceed)
    }

    /// Look up `key` and add it to the selection; reports misses and returns
    /// whether a record was found
    async fn lookup_into(&mut self, selection: &mut SelectionSet, kind: Kind, key: &str) -> bool {
        match self.lookup(kind, key).await {
            Ok(Lookup::Found(member)) => {
                if !selection.add(kind, member) {
                    self.prompter.info(&format!(
                        "{} `{}` is already selected",
                        capitalize(kind.label()),
                        key
                    ));
                }
                true
            }
            Ok(Lookup::NotFound) => {
                self.prompter.error(&format!(
                    "{} `{}` does not exist",
                    capitalize(kind.label()),
                    key
                ));
                false
            }
            Ok(Lookup::Ambiguous(count)) => {
                self.prompter.error(&format!(
                    "`{}` matches {} {}s; enter an exact {}",
                    key,
                    count,
                    kind.label(),
                    kind.key_label()
                ));
                false
            }
            Err(e) => {
                warn!(kind = kind.label(), key, error = %e, "lookup failed");
                self.prompter.error(&format!(
                    "Failed to look up {} `{}`: {}",
                    kind.label(),
                    key,
                    e
                ));
                false
            }
        }
    }

    async fn lookup(&self, kind: Kind, key: &str) -> Result<Lookup<Member>, ClientError> {
        Ok(match kind {
            Kind::User => self
                .client
                .find_user(key)
                .await?
                .map(|r| Member::from_record(&r)),
            Kind::SystemUser => self
                .client
                .find_system_user(key)
                .await?
                .map(|r| Member::from_record(&r)),
            Kind::Asset => self
                .client
                .find_asset(key)
                .await?
                .map(|r| Member::from_record(&r)),
        })
    }

    fn confirm_cancel(&mut self, kind: Kind) -> Result<bool> {
        self.prompter.confirm(
            &format!(
                "No {} selected yet. Cancel this asset permission?",
                kind.label()
            ),
            false,
        )
    }

    fn show_selected(&mut self, selection: &SelectionSet, kind: Kind) {
        self.prompter.info(&format!(
            "Selected {}s: [{}]",
            kind.label(),
            selection.display_keys(kind).join(", ")
        ));
    }

    fn review(&mut self, draft: &PermissionDraft) {
        let keys = |kind: Kind| draft.selection.display_keys(kind).join(", ");
        self.prompter.info(&format!(
            "About to create an asset permission with:\n\n\
             \x20   Organization:  {}\n\
             \x20   Name:          {}\n\
             \x20   Users:         [{}]\n\
             \x20   System users:  [{}]\n\
             \x20   Assets:        [{}]\n",
            draft.organization.name,
            draft.name,
            keys(Kind::User),
            keys(Kind::SystemUser),
            keys(Kind::Asset),
        ));
    }

    async fn submit(&mut self, draft: &PermissionDraft) -> RoundOutcome {
        let request = draft.to_request();
        match self.client.create_permission(&request).await {
            Ok(permission) => {
                self.prompter.info(&pretty(&permission));
                self.prompter
                    .info(&format!("Asset permission `{}` created", permission.name));
                RoundOutcome::Created(permission)
            }
            Err(e) => {
                let detail = e
                    .detail()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.to_string());
                warn!(name = %draft.name, error = %e, "asset permission creation failed");
                self.prompter.error(&format!(
                    "Failed to create asset permission `{}`: {}",
                    draft.name, detail
                ));
                RoundOutcome::Failed {
                    name: draft.name.clone(),
                    detail,
                }
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("system user"), "System user");
        assert_eq!(capitalize(""), "");
    }
}
