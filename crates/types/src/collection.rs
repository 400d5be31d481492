/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use compact_str::CompactString;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Collection {
    Principal = 0,
    AddressBook = 1,
    ContactCard = 2,
    #[default]
    None = 3,
}

impl Collection {
    pub const MAX: usize = Collection::None as usize;

    pub fn is_container(&self) -> bool {
        matches!(self, Collection::AddressBook | Collection::Principal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Principal => "principal",
            Collection::AddressBook => "addressBook",
            Collection::ContactCard => "contactCard",
            Collection::None => "",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Collection> for trc::Value {
    fn from(value: Collection) -> Self {
        trc::Value::String(CompactString::const_new(value.as_str()))
    }
}
