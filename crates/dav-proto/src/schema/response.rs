/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::{Collation, Namespace, property::Privilege};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct List<T>(pub Vec<T>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Href(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ace {
    pub principal: Href,
    pub grant: List<Privilege>,
    pub protected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedPrivilege {
    pub privilege: Privilege,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AclRestrictions {
    pub grant_only: bool,
    pub no_invert: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedCollation {
    pub collation: Collation,
    pub namespace: Namespace,
}

impl<T> List<T> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(value: Vec<T>) -> Self {
        List(value)
    }
}

impl Href {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ace {
    pub fn new(principal: Href, grant: impl Into<List<Privilege>>) -> Self {
        Ace {
            principal,
            grant: grant.into(),
            protected: false,
        }
    }

    pub fn with_protected(mut self) -> Self {
        self.protected = true;
        self
    }
}

impl SupportedPrivilege {
    pub fn new(privilege: Privilege) -> Self {
        SupportedPrivilege {
            privilege,
            description: privilege.description().to_string(),
        }
    }
}

impl AclRestrictions {
    pub fn with_grant_only(mut self) -> Self {
        self.grant_only = true;
        self
    }

    pub fn with_no_invert(mut self) -> Self {
        self.no_invert = true;
        self
    }
}
