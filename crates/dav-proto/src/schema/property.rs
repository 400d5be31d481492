/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::{
    Namespace,
    response::{AclRestrictions, Ace, Href, List, SupportedCollation, SupportedPrivilege},
};
use chrono::{DateTime, Utc};
use compact_str::CompactString;

/// A (namespace URI, local name) pair as received from the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey {
    pub namespace: CompactString,
    pub name: CompactString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DavProperty {
    WebDav(WebDavProperty),
    CardDav(CardDavProperty),
    CalendarServer(CalendarServerProperty),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebDavProperty {
    CreationDate,
    DisplayName,
    GetContentLength,
    GetContentType,
    GetETag,
    GetLastModified,
    ResourceType,
    CurrentUserPrincipal,
    PrincipalUrl,
    // RFC 3744
    Acl,
    AclRestrictions,
    CurrentUserPrivilegeSet,
    Group,
    InheritedAclSet,
    Owner,
    PrincipalCollectionSet,
    SupportedPrivilegeSet,
    // RFC 3253
    SupportedReportSet,
    // RFC 4331
    QuotaAvailableBytes,
    QuotaUsedBytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardDavProperty {
    AddressbookDescription,
    MaxResourceSize,
    SupportedCollationSet,
    SupportedAddressData,
    AddressData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarServerProperty {
    GetCTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Privilege {
    Read,
    ReadAcl,
    ReadCurrentUserPrivilegeSet,
    WriteContent,
    Unlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Collection,
    AddressBook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSet {
    AddressbookMultiGet,
    AddressbookQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DavValue {
    String(String),
    Uint64(u64),
    Int64(i64),
    /// ISO 8601 timestamp, as used by `creationdate`.
    Timestamp(DateTime<Utc>),
    /// HTTP-date, as used by `getlastmodified`.
    Rfc1123Date(DateTime<Utc>),
    Hrefs(List<Href>),
    ResourceTypes(List<ResourceType>),
    ReportSets(List<ReportSet>),
    SupportedAddressData,
    Privileges(List<Privilege>),
    Acl(List<Ace>),
    AclRestrictions(AclRestrictions),
    SupportedPrivileges(List<SupportedPrivilege>),
    Collations(List<SupportedCollation>),
    CData(String),
    Null,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DavPropertyValue {
    pub property: DavProperty,
    pub value: DavValue,
}

impl PropertyKey {
    pub fn new(namespace: impl Into<CompactString>, name: impl Into<CompactString>) -> Self {
        PropertyKey {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl From<DavProperty> for PropertyKey {
    fn from(property: DavProperty) -> Self {
        PropertyKey {
            namespace: CompactString::const_new(property.namespace().namespace()),
            name: CompactString::const_new(property.name()),
        }
    }
}

impl DavProperty {
    /// Maps a namespace/name pair onto a known live property.
    pub fn parse(namespace: &str, name: &str) -> Option<Self> {
        match Namespace::parse(namespace)? {
            Namespace::Dav => WebDavProperty::parse(name).map(DavProperty::WebDav),
            Namespace::CardDav => CardDavProperty::parse(name).map(DavProperty::CardDav),
            Namespace::CalendarServer => {
                CalendarServerProperty::parse(name).map(DavProperty::CalendarServer)
            }
        }
    }

    pub fn from_key(key: &PropertyKey) -> Option<Self> {
        Self::parse(&key.namespace, &key.name)
    }

    pub fn namespace(&self) -> Namespace {
        match self {
            DavProperty::WebDav(_) => Namespace::Dav,
            DavProperty::CardDav(_) => Namespace::CardDav,
            DavProperty::CalendarServer(_) => Namespace::CalendarServer,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DavProperty::WebDav(property) => property.as_str(),
            DavProperty::CardDav(property) => property.as_str(),
            DavProperty::CalendarServer(property) => property.as_str(),
        }
    }

    pub fn key(&self) -> PropertyKey {
        PropertyKey::from(*self)
    }
}

impl WebDavProperty {
    pub fn parse(name: &str) -> Option<Self> {
        hashify::tiny_map!(name.as_bytes(),
            "creationdate" => WebDavProperty::CreationDate,
            "displayname" => WebDavProperty::DisplayName,
            "getcontentlength" => WebDavProperty::GetContentLength,
            "getcontenttype" => WebDavProperty::GetContentType,
            "getetag" => WebDavProperty::GetETag,
            "getlastmodified" => WebDavProperty::GetLastModified,
            "resourcetype" => WebDavProperty::ResourceType,
            "current-user-principal" => WebDavProperty::CurrentUserPrincipal,
            "principal-URL" => WebDavProperty::PrincipalUrl,
            "acl" => WebDavProperty::Acl,
            "acl-restrictions" => WebDavProperty::AclRestrictions,
            "current-user-privilege-set" => WebDavProperty::CurrentUserPrivilegeSet,
            "group" => WebDavProperty::Group,
            "inherited-acl-set" => WebDavProperty::InheritedAclSet,
            "owner" => WebDavProperty::Owner,
            "principal-collection-set" => WebDavProperty::PrincipalCollectionSet,
            "supported-privilege-set" => WebDavProperty::SupportedPrivilegeSet,
            "supported-report-set" => WebDavProperty::SupportedReportSet,
            "quota-available-bytes" => WebDavProperty::QuotaAvailableBytes,
            "quota-used-bytes" => WebDavProperty::QuotaUsedBytes,
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WebDavProperty::CreationDate => "creationdate",
            WebDavProperty::DisplayName => "displayname",
            WebDavProperty::GetContentLength => "getcontentlength",
            WebDavProperty::GetContentType => "getcontenttype",
            WebDavProperty::GetETag => "getetag",
            WebDavProperty::GetLastModified => "getlastmodified",
            WebDavProperty::ResourceType => "resourcetype",
            WebDavProperty::CurrentUserPrincipal => "current-user-principal",
            WebDavProperty::PrincipalUrl => "principal-URL",
            WebDavProperty::Acl => "acl",
            WebDavProperty::AclRestrictions => "acl-restrictions",
            WebDavProperty::CurrentUserPrivilegeSet => "current-user-privilege-set",
            WebDavProperty::Group => "group",
            WebDavProperty::InheritedAclSet => "inherited-acl-set",
            WebDavProperty::Owner => "owner",
            WebDavProperty::PrincipalCollectionSet => "principal-collection-set",
            WebDavProperty::SupportedPrivilegeSet => "supported-privilege-set",
            WebDavProperty::SupportedReportSet => "supported-report-set",
            WebDavProperty::QuotaAvailableBytes => "quota-available-bytes",
            WebDavProperty::QuotaUsedBytes => "quota-used-bytes",
        }
    }
}

impl CardDavProperty {
    pub fn parse(name: &str) -> Option<Self> {
        hashify::tiny_map!(name.as_bytes(),
            "addressbook-description" => CardDavProperty::AddressbookDescription,
            "max-resource-size" => CardDavProperty::MaxResourceSize,
            "supported-collation-set" => CardDavProperty::SupportedCollationSet,
            "supported-address-data" => CardDavProperty::SupportedAddressData,
            "address-data" => CardDavProperty::AddressData,
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardDavProperty::AddressbookDescription => "addressbook-description",
            CardDavProperty::MaxResourceSize => "max-resource-size",
            CardDavProperty::SupportedCollationSet => "supported-collation-set",
            CardDavProperty::SupportedAddressData => "supported-address-data",
            CardDavProperty::AddressData => "address-data",
        }
    }
}

impl CalendarServerProperty {
    pub fn parse(name: &str) -> Option<Self> {
        hashify::tiny_map!(name.as_bytes(),
            "getctag" => CalendarServerProperty::GetCTag,
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarServerProperty::GetCTag => "getctag",
        }
    }
}

impl Privilege {
    /// The privilege catalog, in rendering order.
    pub const ALL: [Privilege; 5] = [
        Privilege::Read,
        Privilege::ReadAcl,
        Privilege::ReadCurrentUserPrivilegeSet,
        Privilege::WriteContent,
        Privilege::Unlock,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        hashify::tiny_map!(name.as_bytes(),
            "read" => Privilege::Read,
            "read-acl" => Privilege::ReadAcl,
            "read-current-user-privilege-set" => Privilege::ReadCurrentUserPrivilegeSet,
            "write-content" => Privilege::WriteContent,
            "unlock" => Privilege::Unlock,
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Privilege::Read => "read",
            Privilege::ReadAcl => "read-acl",
            Privilege::ReadCurrentUserPrivilegeSet => "read-current-user-privilege-set",
            Privilege::WriteContent => "write-content",
            Privilege::Unlock => "unlock",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Privilege::Read => "Read any object",
            Privilege::ReadAcl => "Read ACL",
            Privilege::ReadCurrentUserPrivilegeSet => "Read current user privilege set property",
            Privilege::WriteContent => "Write resource content",
            Privilege::Unlock => "Unlock resource",
        }
    }
}

impl DavPropertyValue {
    pub fn new(property: DavProperty, value: impl Into<DavValue>) -> Self {
        DavPropertyValue {
            property,
            value: value.into(),
        }
    }

    pub fn empty(property: DavProperty) -> Self {
        DavPropertyValue {
            property,
            value: DavValue::Null,
        }
    }
}

impl From<String> for DavValue {
    fn from(value: String) -> Self {
        DavValue::String(value)
    }
}

impl From<&str> for DavValue {
    fn from(value: &str) -> Self {
        DavValue::String(value.to_string())
    }
}

impl From<u64> for DavValue {
    fn from(value: u64) -> Self {
        DavValue::Uint64(value)
    }
}

impl From<i64> for DavValue {
    fn from(value: i64) -> Self {
        DavValue::Int64(value)
    }
}

impl From<Vec<Href>> for DavValue {
    fn from(value: Vec<Href>) -> Self {
        DavValue::Hrefs(List(value))
    }
}

impl From<Vec<ResourceType>> for DavValue {
    fn from(value: Vec<ResourceType>) -> Self {
        DavValue::ResourceTypes(List(value))
    }
}

impl From<Vec<ReportSet>> for DavValue {
    fn from(value: Vec<ReportSet>) -> Self {
        DavValue::ReportSets(List(value))
    }
}

impl From<Vec<Privilege>> for DavValue {
    fn from(value: Vec<Privilege>) -> Self {
        DavValue::Privileges(List(value))
    }
}

impl From<Vec<Ace>> for DavValue {
    fn from(value: Vec<Ace>) -> Self {
        DavValue::Acl(List(value))
    }
}

impl From<Vec<SupportedPrivilege>> for DavValue {
    fn from(value: Vec<SupportedPrivilege>) -> Self {
        DavValue::SupportedPrivileges(List(value))
    }
}

impl From<AclRestrictions> for DavValue {
    fn from(value: AclRestrictions) -> Self {
        DavValue::AclRestrictions(value)
    }
}
