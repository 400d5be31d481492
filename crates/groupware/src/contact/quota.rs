/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::storage::AddressBookStore;
use common::{auth::AccessToken, config::groupware::QuotaLimit};
use trc::AddContext;
use types::AccountId;

/// Storage accounting over the current contents of the store. Nothing is
/// cached; every call reads the address books again.
pub struct QuotaEstimator<'x> {
    store: &'x dyn AddressBookStore,
}

impl<'x> QuotaEstimator<'x> {
    pub fn new(store: &'x dyn AddressBookStore) -> Self {
        QuotaEstimator { store }
    }

    pub fn used_bytes(&self, account_id: AccountId) -> trc::Result<u64> {
        self.store
            .address_books(account_id)
            .caused_by(trc::location!())
            .map(|books| books.iter().map(|book| book.size()).sum())
    }

    pub fn available_bytes(
        &self,
        access_token: &AccessToken,
        limit: &QuotaLimit,
    ) -> trc::Result<u64> {
        let quota = if access_token.quota > 0 {
            Some(access_token.quota)
        } else {
            limit.limit()
        };

        match quota {
            Some(quota) => self
                .used_bytes(access_token.primary_id)
                .map(|used| quota.saturating_sub(used)),
            None => Ok(u32::MAX as u64),
        }
    }
}
