/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use types::AccountId;

/// The authenticated principal a request acts as.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessToken {
    pub primary_id: AccountId,
    pub name: String,
    /// Per-principal storage quota in bytes, `0` defers to the global limit.
    pub quota: u64,
}

impl AccessToken {
    pub fn new(primary_id: AccountId, name: impl Into<String>) -> Self {
        AccessToken {
            primary_id,
            name: name.into(),
            quota: 0,
        }
    }

    pub fn with_quota(mut self, quota: u64) -> Self {
        self.quota = quota;
        self
    }

    pub fn primary_id(&self) -> AccountId {
        self.primary_id
    }
}
