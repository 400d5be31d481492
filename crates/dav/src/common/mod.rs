/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use common::{Core, auth::AccessToken, quirks::Quirks};
use dav_proto::{
    RequestHeaders,
    schema::{
        property::{CardDavProperty, DavProperty, DavValue, PropertyKey},
        request::{PropertyRequest, PropertyUpdate},
        response::Href,
    },
};
use groupware::DavResourceName;
use registry::PropertyRegistry;
use types::collection::Collection;

pub mod acl;
pub mod dispatch;
pub mod registry;

/// Request-scoped values handed to every resource.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'x> {
    pub core: &'x Core,
    pub access_token: &'x AccessToken,
    pub headers: RequestHeaders<'x>,
}

/// A resource as seen by the property engine. Handlers are optional: the
/// defaults report that nothing handles the property.
pub trait DavResource {
    fn collection(&self) -> Collection;

    fn exists(&self) -> bool;

    fn is_collection(&self) -> bool {
        self.collection().is_container()
    }

    fn children(&self) -> Vec<Href> {
        Vec::new()
    }

    /// Returns `None` when the resource has no handler for `property`.
    fn get_property(
        &self,
        _property: &DavProperty,
        _request: &PropertyRequest,
    ) -> Option<crate::Result<DavValue>> {
        None
    }

    /// Returns `None` when `property` cannot be written on this resource.
    fn set_property(
        &self,
        _property: &DavProperty,
        _update: &PropertyUpdate,
    ) -> Option<crate::Result<()>> {
        None
    }

    /// Properties listed on `allprop` requests.
    fn all_properties(&self, registry: &PropertyRegistry) -> Vec<PropertyKey> {
        registry.resolve(self.collection(), false).keys().collect()
    }
}

impl<'x> RequestContext<'x> {
    pub fn new(core: &'x Core, access_token: &'x AccessToken, headers: RequestHeaders<'x>) -> Self {
        RequestContext {
            core,
            access_token,
            headers,
        }
    }

    pub fn principal_href(&self) -> Href {
        self.href(DavResourceName::Principal.path([self.access_token.name.as_str()]))
    }

    pub fn principal_collection_href(&self) -> Href {
        self.href(DavResourceName::Principal.collection_path().to_string())
    }

    // Some clients treat every href as a path, those get no scheme and authority.
    fn href(&self, path: String) -> Href {
        match self.headers.base_url {
            Some(base_url)
                if !self.core.has_quirk(
                    Quirks::CURRENT_PRINCIPAL_NO_URL,
                    self.headers.user_agent,
                ) =>
            {
                Href(format!("{base_url}{path}"))
            }
            _ => Href(path),
        }
    }
}

pub(crate) trait PropertyArguments {
    fn accepts_arguments(&self) -> bool;
}

impl PropertyArguments for DavProperty {
    fn accepts_arguments(&self) -> bool {
        matches!(self, DavProperty::CardDav(CardDavProperty::AddressData))
    }
}
