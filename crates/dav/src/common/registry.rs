/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use compact_str::CompactString;
use dav_proto::schema::{
    Namespace,
    property::{DavProperty, PropertyKey},
};
use types::collection::Collection;

/// Namespace URI to local names, as declared in source.
pub type PropertyDeclaration = &'static [(&'static str, &'static [&'static str])];

/// Properties a resource type adds on top of the shared base tables.
#[derive(Debug, Clone, Copy)]
pub struct ResourceProperties {
    pub collection: Collection,
    /// Returned on `allprop` requests.
    pub implicit: PropertyDeclaration,
    /// Only returned when named in the request.
    pub explicit: PropertyDeclaration,
}

// The CardDAV namespace is declared empty so that unknown CardDAV properties
// resolve to Not Implemented instead of Bad Request.
pub const BASE_PROPERTIES: PropertyDeclaration = &[
    (
        "DAV:",
        &[
            "creationdate",
            "current-user-principal",
            "displayname",
            "getcontentlength",
            "getcontenttype",
            "getetag",
            "getlastmodified",
            "principal-URL",
            "resourcetype",
        ],
    ),
    ("urn:ietf:params:xml:ns:carddav", &[]),
];

// RFC 3744 sections 4 and 5
pub const BASE_EXPLICIT_PROPERTIES: PropertyDeclaration = &[(
    "DAV:",
    &[
        "acl",
        "acl-restrictions",
        "current-user-privilege-set",
        "group",
        "inherited-acl-set",
        "owner",
        "principal-collection-set",
        "supported-privilege-set",
    ],
)];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    namespaces: Vec<(CompactString, Vec<CompactString>)>,
}

#[derive(Debug, Clone, Default)]
struct ResolvedTables {
    implicit: PropertyTable,
    all: PropertyTable,
}

/// Merged property tables per resource type, built once at start-up.
#[derive(Debug, Clone)]
pub struct PropertyRegistry {
    tables: Vec<ResolvedTables>,
}

impl PropertyTable {
    pub fn parse(declaration: PropertyDeclaration) -> trc::Result<Self> {
        let mut table = PropertyTable::default();

        for (namespace, names) in declaration {
            if Namespace::parse(namespace).is_none() {
                return Err(trc::DavEvent::PropertyTableError
                    .into_err()
                    .ctx(trc::Key::Namespace, *namespace)
                    .details("Unknown namespace"));
            }

            let entry = table.namespace_mut(namespace);
            for name in names.iter() {
                if DavProperty::parse(namespace, name).is_none() {
                    return Err(trc::DavEvent::PropertyTableError
                        .into_err()
                        .ctx(trc::Key::Namespace, *namespace)
                        .ctx(trc::Key::Property, *name)
                        .details("Unknown property"));
                }
                if !entry.iter().any(|n| n.as_str() == *name) {
                    entry.push(CompactString::const_new(*name));
                }
            }
        }

        Ok(table)
    }

    /// Unions `other` into this table, keeping the first occurrence of
    /// every name.
    pub fn merge(mut self, other: &PropertyTable) -> Self {
        for (namespace, names) in &other.namespaces {
            let entry = self.namespace_mut(namespace);
            for name in names {
                if !entry.contains(name) {
                    entry.push(name.clone());
                }
            }
        }
        self
    }

    fn namespace_mut(&mut self, namespace: &str) -> &mut Vec<CompactString> {
        let pos = match self.namespaces.iter().position(|(ns, _)| ns.as_str() == namespace) {
            Some(pos) => pos,
            None => {
                self.namespaces
                    .push((CompactString::new(namespace), Vec::new()));
                self.namespaces.len() - 1
            }
        };
        &mut self.namespaces[pos].1
    }

    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.namespaces.iter().any(|(ns, _)| ns.as_str() == namespace)
    }

    pub fn contains(&self, namespace: &str, name: &str) -> bool {
        self.names(namespace).iter().any(|n| n.as_str() == name)
    }

    pub fn names(&self, namespace: &str) -> &[CompactString] {
        self.namespaces
            .iter()
            .find(|(ns, _)| ns.as_str() == namespace)
            .map(|(_, names)| names.as_slice())
            .unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = PropertyKey> + '_ {
        self.namespaces.iter().flat_map(|(namespace, names)| {
            names
                .iter()
                .map(move |name| PropertyKey::new(namespace.clone(), name.clone()))
        })
    }

    pub fn is_superset(&self, other: &PropertyTable) -> bool {
        other.namespaces.iter().all(|(namespace, names)| {
            self.contains_namespace(namespace)
                && names.iter().all(|name| self.contains(namespace, name))
        })
    }

    pub fn len(&self) -> usize {
        self.namespaces.iter().map(|(_, names)| names.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PropertyRegistry {
    /// Builds the tables for every resource type. Never fails: a resource
    /// whose declaration is invalid falls back to the base tables.
    pub fn new(resources: &[ResourceProperties]) -> Self {
        let base_implicit = parse_or_default(BASE_PROPERTIES);
        let base_explicit = parse_or_default(BASE_EXPLICIT_PROPERTIES);
        let base = ResolvedTables {
            all: base_implicit.clone().merge(&base_explicit),
            implicit: base_implicit,
        };
        let mut tables = vec![base.clone(); Collection::MAX + 1];

        for resource in resources {
            match PropertyTable::parse(resource.implicit).and_then(|implicit| {
                PropertyTable::parse(resource.explicit).map(|explicit| (implicit, explicit))
            }) {
                Ok((implicit, explicit)) => {
                    tables[resource.collection as usize] = ResolvedTables {
                        implicit: base.implicit.clone().merge(&implicit),
                        all: base.all.clone().merge(&implicit).merge(&explicit),
                    };
                }
                Err(err) => {
                    trc::error!(err.ctx(trc::Key::Collection, resource.collection));
                }
            }
        }

        PropertyRegistry { tables }
    }

    pub fn resolve(&self, collection: Collection, include_explicit: bool) -> &PropertyTable {
        let tables = &self.tables[collection as usize];
        if include_explicit {
            &tables.all
        } else {
            &tables.implicit
        }
    }
}

fn parse_or_default(declaration: PropertyDeclaration) -> PropertyTable {
    PropertyTable::parse(declaration).unwrap_or_else(|err| {
        trc::error!(err);
        PropertyTable::default()
    })
}
