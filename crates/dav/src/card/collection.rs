/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::contact::ContactCardResource;
use crate::{
    DavServer,
    common::{DavResource, RequestContext},
};
use dav_proto::schema::{
    Collation, Namespace,
    property::{
        CalendarServerProperty, CardDavProperty, DavProperty, DavValue, ReportSet, ResourceType,
        WebDavProperty,
    },
    request::{PropertyRequest, PropertyUpdate},
    response::{Href, List, SupportedCollation},
};
use groupware::{DavResourceName, RFC_3986, contact::AddressBook};
use trc::AddContext;
use types::{DocumentId, collection::Collection};

/// An address book bound to the requesting principal. The book and its
/// contacts are fetched once, when the resource is built.
pub struct AddressBookCollectionResource<'x> {
    server: &'x DavServer,
    context: RequestContext<'x>,
    address_book: Option<AddressBook>,
}

impl<'x> AddressBookCollectionResource<'x> {
    pub fn new(
        server: &'x DavServer,
        context: RequestContext<'x>,
        document_id: DocumentId,
    ) -> trc::Result<Self> {
        let address_book = server
            .store
            .address_book(context.access_token.primary_id(), document_id)
            .caused_by(trc::location!())?;

        Ok(AddressBookCollectionResource {
            server,
            context,
            address_book,
        })
    }

    pub fn child(&self, uid: &str) -> Option<ContactCardResource<'_>> {
        self.address_book
            .as_ref()?
            .contact(uid)
            .map(|card| ContactCardResource::new(self.server, self.context, card))
    }

    pub fn href(&self) -> Option<String> {
        self.address_book.as_ref().map(|book| {
            DavResourceName::Card.path([
                self.context.access_token.name.as_str(),
                book.id.to_string().as_str(),
            ])
        })
    }
}

impl DavResource for AddressBookCollectionResource<'_> {
    fn collection(&self) -> Collection {
        Collection::AddressBook
    }

    fn exists(&self) -> bool {
        self.address_book.is_some()
    }

    fn children(&self) -> Vec<Href> {
        let (Some(book), Some(base)) = (&self.address_book, self.href()) else {
            return Vec::new();
        };

        book.contacts
            .iter()
            .map(|contact| {
                let mut href = base.clone();
                href.extend(percent_encoding::utf8_percent_encode(&contact.uid, RFC_3986));
                Href(href)
            })
            .collect()
    }

    fn get_property(
        &self,
        property: &DavProperty,
        _request: &PropertyRequest,
    ) -> Option<crate::Result<DavValue>> {
        let book = self.address_book.as_ref()?;

        let value = match property {
            DavProperty::WebDav(dav_property) => match dav_property {
                WebDavProperty::DisplayName => DavValue::String(book.name.clone()),
                WebDavProperty::CreationDate => DavValue::Timestamp(book.created),
                WebDavProperty::GetLastModified => DavValue::Rfc1123Date(book.last_modified()),
                WebDavProperty::GetContentType => "text/directory".into(),
                WebDavProperty::GetETag => "\"None\"".into(),
                WebDavProperty::ResourceType => {
                    vec![ResourceType::Collection, ResourceType::AddressBook].into()
                }
                WebDavProperty::SupportedReportSet => vec![
                    ReportSet::AddressbookMultiGet,
                    ReportSet::AddressbookQuery,
                ]
                .into(),
                WebDavProperty::QuotaUsedBytes => {
                    return Some(
                        self.server
                            .quota()
                            .used_bytes(book.account_id)
                            .caused_by(trc::location!())
                            .map(DavValue::Uint64)
                            .map_err(Into::into),
                    );
                }
                WebDavProperty::QuotaAvailableBytes => {
                    return Some(
                        self.server
                            .quota()
                            .available_bytes(
                                self.context.access_token,
                                &self.server.core.groupware.quota,
                            )
                            .caused_by(trc::location!())
                            .map(DavValue::Uint64)
                            .map_err(Into::into),
                    );
                }
                _ => {
                    return self
                        .server
                        .privileges
                        .get_property(&self.context, property);
                }
            },
            DavProperty::CardDav(card_property) => match card_property {
                CardDavProperty::AddressbookDescription => DavValue::String(book.name.clone()),
                CardDavProperty::MaxResourceSize => {
                    DavValue::Uint64(self.server.core.groupware.max_vcard_size as u64)
                }
                CardDavProperty::SupportedAddressData => DavValue::SupportedAddressData,
                CardDavProperty::SupportedCollationSet => DavValue::Collations(List(vec![
                    SupportedCollation {
                        collation: Collation::AsciiCasemap,
                        namespace: Namespace::CardDav,
                    },
                    SupportedCollation {
                        collation: Collation::UnicodeCasemap,
                        namespace: Namespace::CardDav,
                    },
                ])),
                CardDavProperty::AddressData => return None,
            },
            DavProperty::CalendarServer(CalendarServerProperty::GetCTag) => {
                DavValue::Int64(book.ctag())
            }
        };

        Some(Ok(value))
    }

    fn set_property(
        &self,
        property: &DavProperty,
        _update: &PropertyUpdate,
    ) -> Option<crate::Result<()>> {
        self.server.privileges.set_property(property)
    }
}
