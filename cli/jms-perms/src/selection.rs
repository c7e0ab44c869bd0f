// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Working set of records chosen for one asset permission
//!
//! Each kind keeps its members in first-seen order with no duplicate ids, so
//! the display keys and identifiers projected from it always line up.

use jms_client::{CreatePermissionRequest, Organization, Record};

/// Which collection a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    User,
    SystemUser,
    Asset,
}

impl Kind {
    /// Singular label for prompts and messages
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::SystemUser => "system user",
            Self::Asset => "asset",
        }
    }

    /// Name of the key the operator types
    pub fn key_label(self) -> &'static str {
        match self {
            Self::User => "username",
            Self::SystemUser => "name",
            Self::Asset => "hostname",
        }
    }
}

/// A selected record: server id plus the key shown to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub key: String,
}

impl Member {
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
        }
    }

    pub fn from_record<R: Record>(record: &R) -> Self {
        Self::new(record.id(), record.display_key())
    }
}

/// Users, system users and assets chosen so far
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    users: Vec<Member>,
    system_users: Vec<Member>,
    assets: Vec<Member>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn members(&self, kind: Kind) -> &Vec<Member> {
        match kind {
            Kind::User => &self.users,
            Kind::SystemUser => &self.system_users,
            Kind::Asset => &self.assets,
        }
    }

    fn members_mut(&mut self, kind: Kind) -> &mut Vec<Member> {
        match kind {
            Kind::User => &mut self.users,
            Kind::SystemUser => &mut self.system_users,
            Kind::Asset => &mut self.assets,
        }
    }

    /// Append `member` unless its id is already present
    ///
    /// Returns whether it was newly added.
    pub fn add(&mut self, kind: Kind, member: Member) -> bool {
        let members = self.members_mut(kind);
        if members.iter().any(|m| m.id == member.id) {
            return false;
        }
        members.push(member);
        true
    }

    /// Add each member in order; returns how many were new
    pub fn add_many(&mut self, kind: Kind, members: impl IntoIterator<Item = Member>) -> usize {
        members
            .into_iter()
            .filter(|member| self.add(kind, member.clone()))
            .count()
    }

    /// Keys for display, in insertion order
    pub fn display_keys(&self, kind: Kind) -> Vec<&str> {
        self.members(kind).iter().map(|m| m.key.as_str()).collect()
    }

    /// Ids for the request payload, in insertion order
    pub fn identifiers(&self, kind: Kind) -> Vec<&str> {
        self.members(kind).iter().map(|m| m.id.as_str()).collect()
    }

    pub fn len(&self, kind: Kind) -> usize {
        self.members(kind).len()
    }

    pub fn is_empty(&self, kind: Kind) -> bool {
        self.members(kind).is_empty()
    }
}

/// Everything gathered for one asset permission before submission
#[derive(Debug, Clone)]
pub struct PermissionDraft {
    pub organization: Organization,
    pub name: String,
    pub selection: SelectionSet,
}

impl PermissionDraft {
    pub fn new(organization: Organization, name: String) -> Self {
        Self {
            organization,
            name,
            selection: SelectionSet::new(),
        }
    }

    /// Build the creation payload from the current selection
    pub fn to_request(&self) -> CreatePermissionRequest {
        let ids = |kind: Kind| -> Vec<String> {
            self.selection
                .identifiers(kind)
                .into_iter()
                .map(str::to_string)
                .collect()
        };
        CreatePermissionRequest {
            name: self.name.clone(),
            users: ids(Kind::User),
            system_users: ids(Kind::SystemUser),
            assets: ids(Kind::Asset),
        }
    }
}

/// Auto-generated rule name: `<prefix>_<unix timestamp>`
pub fn generated_name(prefix: &str, timestamp: i64) -> String {
    if prefix.is_empty() {
        timestamp.to_string()
    } else {
        format!("{}_{}", prefix, timestamp)
    }
}
