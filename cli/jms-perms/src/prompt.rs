// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Operator interaction
//!
//! The workflow only talks to the operator through [`Prompter`], so it can be
//! driven from a script in tests.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

/// Console input and output for the interactive workflow
pub trait Prompter {
    /// Read one line of free text, trimmed; may be empty
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Pick one of `items`; returns its index
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;

    /// Informational message
    fn info(&mut self, message: &str);

    /// Error message
    fn error(&mut self, message: &str);
}

/// Terminal prompter backed by dialoguer
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for ConsolePrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("Error: {}", message);
    }
}
