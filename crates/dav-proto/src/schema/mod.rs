/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod property;
pub mod request;
pub mod response;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    Dav,
    CardDav,
    CalendarServer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespaces {
    pub card: bool,
    pub cs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collation {
    AsciiCasemap,
    UnicodeCasemap,
}

impl Namespace {
    pub fn parse(uri: &str) -> Option<Self> {
        hashify::tiny_map!(uri.as_bytes(),
            "DAV:" => Namespace::Dav,
            "urn:ietf:params:xml:ns:carddav" => Namespace::CardDav,
            "http://calendarserver.org/ns/" => Namespace::CalendarServer,
        )
    }

    pub fn namespace(&self) -> &'static str {
        match self {
            Namespace::Dav => "DAV:",
            Namespace::CardDav => "urn:ietf:params:xml:ns:carddav",
            Namespace::CalendarServer => "http://calendarserver.org/ns/",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Namespace::Dav => "D",
            Namespace::CardDav => "C",
            Namespace::CalendarServer => "CS",
        }
    }
}

impl Default for Namespaces {
    fn default() -> Self {
        Namespaces {
            card: true,
            cs: true,
        }
    }
}

impl Collation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collation::AsciiCasemap => "i;ascii-casemap",
            Collation::UnicodeCasemap => "i;unicode-casemap",
        }
    }
}
