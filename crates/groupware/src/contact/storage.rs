/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::AddressBook;
use types::{AccountId, DocumentId};

/// Read access to persisted address books. Lookups that find nothing return
/// `Ok(None)`, errors are reserved for store failures.
pub trait AddressBookStore: Send + Sync {
    fn address_book(
        &self,
        account_id: AccountId,
        document_id: DocumentId,
    ) -> trc::Result<Option<AddressBook>>;

    fn address_books(&self, account_id: AccountId) -> trc::Result<Vec<AddressBook>>;
}

#[cfg(any(test, feature = "test_mode"))]
pub use memory::MemoryStore;

#[cfg(any(test, feature = "test_mode"))]
mod memory {
    use super::{AddressBook, AddressBookStore};
    use parking_lot::RwLock;
    use std::sync::atomic::{AtomicBool, Ordering};
    use types::{AccountId, DocumentId, collection::Collection};

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        books: RwLock<Vec<AddressBook>>,
        unavailable: AtomicBool,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Inserts or replaces the book with the same account and id.
        pub fn insert(&self, book: AddressBook) {
            let mut books = self.books.write();
            match books
                .iter_mut()
                .find(|b| b.account_id == book.account_id && b.id == book.id)
            {
                Some(existing) => *existing = book,
                None => books.push(book),
            }
        }

        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::Relaxed);
        }

        fn check_available(&self) -> trc::Result<()> {
            if self.unavailable.load(Ordering::Relaxed) {
                Err(trc::StoreEvent::UnexpectedError
                    .into_err()
                    .details("Store unavailable"))
            } else {
                Ok(())
            }
        }
    }

    impl AddressBookStore for MemoryStore {
        fn address_book(
            &self,
            account_id: AccountId,
            document_id: DocumentId,
        ) -> trc::Result<Option<AddressBook>> {
            self.check_available()?;
            let book = self
                .books
                .read()
                .iter()
                .find(|b| b.account_id == account_id && b.id == document_id)
                .cloned();

            if book.is_none() {
                trc::event!(
                    Store(trc::StoreEvent::NotFound),
                    AccountId = account_id,
                    DocumentId = document_id,
                    Collection = Collection::AddressBook,
                );
            }

            Ok(book)
        }

        fn address_books(&self, account_id: AccountId) -> trc::Result<Vec<AddressBook>> {
            self.check_available()?;
            Ok(self
                .books
                .read()
                .iter()
                .filter(|b| b.account_id == account_id)
                .cloned()
                .collect())
        }
    }
}
