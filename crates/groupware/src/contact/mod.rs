/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod quota;
pub mod storage;

use chrono::{DateTime, Utc};
use types::{AccountId, DocumentId};

/// An address book as fetched from the store, contacts included.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressBook {
    pub id: DocumentId,
    pub account_id: AccountId,
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub contacts: Vec<ContactCard>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub uid: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub fields: Vec<ContactField>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactField {
    pub name: String,
    pub value: String,
}

const MAX_LINE_OCTETS: usize = 75;

impl AddressBook {
    pub fn new(id: DocumentId, account_id: AccountId, name: impl Into<String>) -> Self {
        AddressBook {
            id,
            account_id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = modified;
        self
    }

    pub fn with_contact(mut self, contact: ContactCard) -> Self {
        self.contacts.push(contact);
        self
    }

    /// Latest modification of the book or any of its contacts.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.contacts
            .iter()
            .map(|contact| contact.modified)
            .fold(self.modified, |max, modified| max.max(modified))
    }

    /// Change tag, derived from the book's own timestamp only.
    pub fn ctag(&self) -> i64 {
        self.modified.timestamp()
    }

    pub fn contact(&self, uid: &str) -> Option<&ContactCard> {
        self.contacts.iter().find(|contact| contact.uid == uid)
    }

    /// Bytes used by field names and values across all contacts.
    pub fn size(&self) -> u64 {
        self.contacts.iter().map(|contact| contact.size()).sum()
    }
}

impl ContactCard {
    pub fn new(uid: impl Into<String>) -> Self {
        ContactCard {
            uid: uid.into(),
            ..Default::default()
        }
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = modified;
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(ContactField {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn size(&self) -> u64 {
        self.fields
            .iter()
            .map(|field| (field.name.len() + field.value.len()) as u64)
            .sum()
    }

    pub fn etag(&self) -> String {
        let mut hasher = xxhash_rust::xxh3::Xxh3::new();
        hasher.update(self.uid.as_bytes());
        hasher.update(
            &self
                .modified
                .timestamp_nanos_opt()
                .unwrap_or_else(|| self.modified.timestamp())
                .to_be_bytes(),
        );
        format!("\"{:x}\"", hasher.digest())
    }

    /// Renders the card as a vCard 3.0 object with folded lines. Fields
    /// whose name is not a valid property name are left out.
    pub fn to_vcard(&self) -> String {
        let mut vcard = String::with_capacity(64 + self.size() as usize * 2);
        write_line(&mut vcard, "BEGIN:VCARD");
        write_line(&mut vcard, "VERSION:3.0");
        write_line(&mut vcard, &format!("UID:{}", escape_value(&self.uid)));
        for field in &self.fields {
            if !is_valid_name(&field.name)
                || ["BEGIN", "END", "VERSION", "UID"]
                    .iter()
                    .any(|name| field.name.eq_ignore_ascii_case(name))
            {
                continue;
            }
            write_line(
                &mut vcard,
                &format!("{}:{}", field.name, escape_value(&field.value)),
            );
        }
        write_line(&mut vcard, "END:VCARD");
        vcard
    }
}

// iana-token and x-name (RFC 6350, section 3.3)
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == b'-')
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn write_line(vcard: &mut String, line: &str) {
    let mut octets = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if octets + len > MAX_LINE_OCTETS {
            vcard.push_str("\r\n ");
            octets = 1;
        }
        vcard.push(ch);
        octets += len;
    }
    vcard.push_str("\r\n");
}
