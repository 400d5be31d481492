/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use crate::{
    DavServer,
    common::{DavResource, RequestContext},
};
use dav_proto::schema::{
    property::{CardDavProperty, DavProperty, DavValue, WebDavProperty},
    request::{PropertyRequest, PropertyUpdate},
};
use groupware::contact::ContactCard;
use types::collection::Collection;

/// A contact inside an already fetched address book.
pub struct ContactCardResource<'x> {
    server: &'x DavServer,
    context: RequestContext<'x>,
    card: &'x ContactCard,
}

impl<'x> ContactCardResource<'x> {
    pub fn new(server: &'x DavServer, context: RequestContext<'x>, card: &'x ContactCard) -> Self {
        ContactCardResource {
            server,
            context,
            card,
        }
    }

    pub fn card(&self) -> &ContactCard {
        self.card
    }

    fn display_name(&self) -> Option<&str> {
        self.card
            .fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case("FN"))
            .map(|field| field.value.as_str())
    }
}

impl DavResource for ContactCardResource<'_> {
    fn collection(&self) -> Collection {
        Collection::ContactCard
    }

    fn exists(&self) -> bool {
        true
    }

    fn get_property(
        &self,
        property: &DavProperty,
        _request: &PropertyRequest,
    ) -> Option<crate::Result<DavValue>> {
        let value = match property {
            DavProperty::WebDav(WebDavProperty::GetETag) => DavValue::String(self.card.etag()),
            DavProperty::WebDav(WebDavProperty::GetLastModified) => {
                DavValue::Rfc1123Date(self.card.modified)
            }
            DavProperty::WebDav(WebDavProperty::CreationDate) => {
                DavValue::Timestamp(self.card.created)
            }
            DavProperty::WebDav(WebDavProperty::GetContentType) => "text/vcard".into(),
            DavProperty::WebDav(WebDavProperty::GetContentLength) => {
                DavValue::Uint64(self.card.to_vcard().len() as u64)
            }
            DavProperty::WebDav(WebDavProperty::ResourceType) => DavValue::Null,
            DavProperty::WebDav(WebDavProperty::DisplayName) => self
                .display_name()
                .map(DavValue::from)
                .unwrap_or(DavValue::Null),
            DavProperty::CardDav(CardDavProperty::AddressData) => {
                DavValue::CData(self.card.to_vcard())
            }
            _ => {
                return self
                    .server
                    .privileges
                    .get_property(&self.context, property);
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
