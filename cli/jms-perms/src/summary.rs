// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Per-round outcomes and the end-of-run summary

use jms_client::PermissionResult;

use crate::prompt::Prompter;

/// How one permission-creation round ended
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    /// The server created the rule
    Created(PermissionResult),
    /// The server rejected the rule
    Failed { name: String, detail: String },
    /// The operator backed out before submission
    Cancelled,
}

/// Outcomes of every round in this run, in order
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    outcomes: Vec<RoundOutcome>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: RoundOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[RoundOutcome] {
        &self.outcomes
    }

    /// Rules created successfully, in creation order
    pub fn created(&self) -> impl Iterator<Item = &PermissionResult> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            RoundOutcome::Created(permission) => Some(permission),
            _ => None,
        })
    }

    pub fn created_names(&self) -> Vec<&str> {
        self.created().map(|p| p.name.as_str()).collect()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RoundOutcome::Failed { .. }))
            .count()
    }

    pub fn cancelled_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RoundOutcome::Cancelled))
            .count()
    }

    /// Print each created rule, then the totals
    pub fn render<P: Prompter + ?Sized>(&self, prompter: &mut P) {
        prompter.info("Asset permissions created in this run:");
        for (index, permission) in self.created().enumerate() {
            prompter.info(&format!("{} {} {}", "-".repeat(30), index, "-".repeat(30)));
            prompter.info(&pretty(permission));
        }
        let names = self.created_names();
        prompter.info("");
        prompter.info(&format!("Total created: {}", names.len()));
        prompter.info(&format!("Asset permissions: [{}]", names.join(", ")));
        let failed = self.failed_count();
        let cancelled = self.cancelled_count();
        if failed > 0 || cancelled > 0 {
            prompter.info(&format!("Failed: {}, cancelled: {}", failed, cancelled));
        }
    }
}

/// Pretty JSON for a created rule
pub fn pretty(permission: &PermissionResult) -> String {
    serde_json::to_string_pretty(permission).unwrap_or_else(|_| permission.name.clone())
}
