// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Asset hostnames from a CSV file
//!
//! The first row is a header and is skipped. Every other row must have
//! exactly one column, which is taken as a hostname; rows with any other
//! column count are skipped. Duplicates are kept here and removed later by
//! the selection set.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Why a path was refused before reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathProblem {
    NotAFile,
    NotCsv,
}

/// Check that `path` is an existing file with a `.csv` extension
pub fn validate_path(path: &Path) -> Result<(), PathProblem> {
    if !path.is_file() {
        return Err(PathProblem::NotAFile);
    }
    if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
        return Err(PathProblem::NotCsv);
    }
    Ok(())
}

/// Read hostname candidates from a CSV file
pub fn read_hostnames(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open `{}`", path.display()))?;
    parse_hostnames(file).with_context(|| format!("Failed to read `{}`", path.display()))
}

/// Parse hostname candidates from CSV content
pub fn parse_hostnames<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut hostnames = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 1 {
            tracing::debug!(line = ?record.position().map(|p| p.line()), "skipping row");
            continue;
        }
        let hostname = record[0].trim();
        if !hostname.is_empty() {
            hostnames.push(hostname.to_string());
        }
    }
    Ok(hostnames)
}
