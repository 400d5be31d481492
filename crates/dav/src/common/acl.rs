/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::RequestContext;
use crate::DavError;
use dav_proto::schema::{
    property::{DavProperty, DavValue, Privilege, WebDavProperty},
    response::{AclRestrictions, Ace, Href, SupportedPrivilege},
};
use hyper::StatusCode;

/// The fixed set of privileges granted on every resource. Access control is
/// read-only: it can be inspected but never changed through the protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivilegeModel {
    privileges: Vec<Privilege>,
}

impl PrivilegeModel {
    pub fn new(privileges: &[Privilege]) -> Self {
        let mut privileges = privileges.to_vec();
        privileges.sort_unstable();
        privileges.dedup();
        PrivilegeModel { privileges }
    }

    pub fn privileges(&self) -> &[Privilege] {
        &self.privileges
    }

    pub fn acl(&self, principal: Href) -> DavValue {
        vec![Ace::new(principal, self.privileges.clone()).with_protected()].into()
    }

    pub fn current_user_privilege_set(&self) -> DavValue {
        self.privileges.clone().into()
    }

    pub fn supported_privilege_set(&self) -> DavValue {
        self.privileges
            .iter()
            .map(|privilege| SupportedPrivilege::new(*privilege))
            .collect::<Vec<_>>()
            .into()
    }

    pub fn acl_restrictions(&self) -> DavValue {
        AclRestrictions::default()
            .with_grant_only()
            .with_no_invert()
            .into()
    }

    /// Handlers shared by every resource type: access control and principal
    /// references.
    pub fn get_property(
        &self,
        context: &RequestContext<'_>,
        property: &DavProperty,
    ) -> Option<crate::Result<DavValue>> {
        let DavProperty::WebDav(property) = property else {
            return None;
        };

        let value = match property {
            WebDavProperty::Acl => self.acl(context.principal_href()),
            WebDavProperty::AclRestrictions => self.acl_restrictions(),
            WebDavProperty::CurrentUserPrivilegeSet => self.current_user_privilege_set(),
            WebDavProperty::SupportedPrivilegeSet => self.supported_privilege_set(),
            WebDavProperty::CurrentUserPrincipal
            | WebDavProperty::PrincipalUrl
            | WebDavProperty::Owner => vec![context.principal_href()].into(),
            WebDavProperty::PrincipalCollectionSet => {
                vec![context.principal_collection_href()].into()
            }
            WebDavProperty::Group | WebDavProperty::InheritedAclSet => DavValue::Null,
            _ => return None,
        };

        Some(Ok(value))
    }

    pub fn set_property(&self, property: &DavProperty) -> Option<crate::Result<()>> {
        match property {
            DavProperty::WebDav(WebDavProperty::Owner | WebDavProperty::Acl) => {
                trc::event!(
                    Dav(trc::DavEvent::ReadOnlyProperty),
                    Namespace = property.namespace().namespace(),
                    Property = property.name(),
                );

                Some(Err(DavError::Code(StatusCode::FORBIDDEN)))
            }
            _ => None,
        }
    }
}
