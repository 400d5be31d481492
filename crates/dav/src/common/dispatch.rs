/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::{DavResource, PropertyArguments, registry::PropertyTable};
use crate::{DavError, DavServer};
use dav_proto::schema::{
    property::{DavProperty, DavValue, PropertyKey},
    request::{PropertyRequest, PropertyUpdate},
};
use hyper::StatusCode;

/// Routes a single property read or write to the handler of a resource.
pub trait PropertyDispatcher: Sync + Send {
    fn get_property(
        &self,
        resource: &impl DavResource,
        request: &PropertyRequest,
    ) -> crate::Result<DavValue>;

    fn set_property(
        &self,
        resource: &impl DavResource,
        update: &PropertyUpdate,
    ) -> crate::Result<()>;
}

impl PropertyDispatcher for DavServer {
    fn get_property(
        &self,
        resource: &impl DavResource,
        request: &PropertyRequest,
    ) -> crate::Result<DavValue> {
        let property = self.lookup(resource, &request.key)?;

        if let Some(property) = property {
            if request.has_arguments() && !property.accepts_arguments() {
                trc::event!(
                    Dav(trc::DavEvent::UnexpectedArguments),
                    Namespace = request.key.namespace.clone(),
                    Property = request.key.name.clone(),
                    Collection = resource.collection(),
                    Details = request.children.to_string(),
                );
            }

            if let Some(result) = resource.get_property(&property, request) {
                trc::event!(
                    Dav(trc::DavEvent::PropertyGet),
                    Namespace = request.key.namespace.clone(),
                    Property = request.key.name.clone(),
                    Collection = resource.collection(),
                );
                return result;
            }
        }

        self.log_skipped(resource, &request.key, property.is_some());

        Err(DavError::Code(StatusCode::NOT_IMPLEMENTED))
    }

    fn set_property(
        &self,
        resource: &impl DavResource,
        update: &PropertyUpdate,
    ) -> crate::Result<()> {
        if self.core.groupware.debug_proppatch >= 1 {
            trc::event!(
                Dav(trc::DavEvent::PropertySet),
                Namespace = update.key.namespace.clone(),
                Property = update.key.name.clone(),
                Collection = resource.collection(),
                Value = update.value.to_string(),
            );
        }

        let property = self.lookup(resource, &update.key)?;

        if let Some(property) = property {
            if !update.has_arguments() {
                trc::event!(
                    Dav(trc::DavEvent::ExpectedArguments),
                    Namespace = update.key.namespace.clone(),
                    Property = update.key.name.clone(),
                    Collection = resource.collection(),
                );
            }

            if let Some(result) = resource.set_property(&property, update) {
                return result;
            }
        }

        self.log_skipped(resource, &update.key, property.is_some());

        Err(DavError::Code(StatusCode::NOT_IMPLEMENTED))
    }
}

impl DavServer {
    /// Resolves `key` against the resource's table. `Ok(None)` means the
    /// namespace is known but the name is not registered for this resource.
    fn lookup(
        &self,
        resource: &impl DavResource,
        key: &PropertyKey,
    ) -> crate::Result<Option<DavProperty>> {
        let table = self.registry.resolve(resource.collection(), true);

        if !table.contains_namespace(&key.namespace) {
            trc::event!(
                Dav(trc::DavEvent::UnsupportedNamespace),
                Namespace = key.namespace.clone(),
                Property = key.name.clone(),
                Collection = resource.collection(),
            );
            return Err(DavError::Code(StatusCode::BAD_REQUEST));
        }

        if !resource.exists() {
            trc::event!(
                Resource(trc::ResourceEvent::NotFound),
                Namespace = key.namespace.clone(),
                Property = key.name.clone(),
                Collection = resource.collection(),
            );
            return Err(DavError::Code(StatusCode::NOT_FOUND));
        }

        Ok(table
            .contains(&key.namespace, &key.name)
            .then(|| DavProperty::from_key(key))
            .flatten())
    }

    fn log_skipped(&self, resource: &impl DavResource, key: &PropertyKey, registered: bool) {
        let level = self.core.groupware.debug_properties;
        if level >= 1 {
            trc::event!(
                Dav(trc::DavEvent::PropertySkipped),
                Namespace = key.namespace.clone(),
                Property = key.name.clone(),
                Collection = resource.collection(),
                Details = if registered {
                    "No handler"
                } else {
                    "Not registered"
                },
            );
        }
        if level >= 2 {
            let table = self.registry.resolve(resource.collection(), true);
            trc::event!(
                Dav(trc::DavEvent::PropertyList),
                Collection = resource.collection(),
                Total = table.len(),
                Details = property_names(table),
            );
        }
    }
}

fn property_names(table: &PropertyTable) -> Vec<String> {
    table
        .keys()
        .map(|key| format!("{{{}}}{}", key.namespace, key.name))
        .collect()
}
