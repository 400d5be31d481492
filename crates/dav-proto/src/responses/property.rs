/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::{XmlCdataEscape, XmlEscape};
use crate::schema::{
    Namespace, Namespaces,
    property::{DavPropertyValue, DavValue, Privilege, ReportSet, ResourceType},
    response::{AclRestrictions, Ace, Href, List, SupportedCollation, SupportedPrivilege},
};
use std::fmt::{self, Display};

impl DavPropertyValue {
    /// Renders the property as a standalone fragment with its namespace
    /// declarations on the root element.
    pub fn to_xml_fragment(&self) -> Result<String, fmt::Error> {
        let mut out = String::with_capacity(128);
        self.write_to(&mut out, Some(Namespaces::default()))?;
        Ok(out)
    }

    fn write_to(&self, out: &mut impl fmt::Write, namespaces: Option<Namespaces>) -> fmt::Result {
        let prefix = self.property.namespace().prefix();
        let name = self.property.name();

        write!(out, "<{prefix}:{name}")?;
        if let Some(namespaces) = namespaces {
            write!(out, " {namespaces}")?;
        }

        if matches!(self.value, DavValue::Null) {
            out.write_str("/>")
        } else {
            write!(out, ">{}</{prefix}:{name}>", self.value)
        }
    }
}

impl Display for DavPropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, None)
    }
}

impl Display for DavValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DavValue::String(value) => value.write_escaped_to(f),
            DavValue::Uint64(value) => write!(f, "{value}"),
            DavValue::Int64(value) => write!(f, "{value}"),
            DavValue::Timestamp(value) => write!(f, "{}", value.format("%Y-%m-%dT%H:%M:%SZ")),
            DavValue::Rfc1123Date(value) => {
                write!(f, "{}", value.format("%a, %d %b %Y %H:%M:%S GMT"))
            }
            DavValue::Hrefs(hrefs) => hrefs.fmt(f),
            DavValue::ResourceTypes(types) => types.fmt(f),
            DavValue::ReportSets(reports) => reports.fmt(f),
            DavValue::SupportedAddressData => write!(
                f,
                "<C:address-data-type content-type=\"text/vcard\" version=\"3.0\"/>"
            ),
            DavValue::Privileges(privileges) => privileges.fmt(f),
            DavValue::Acl(aces) => aces.fmt(f),
            DavValue::AclRestrictions(restrictions) => restrictions.fmt(f),
            DavValue::SupportedPrivileges(privileges) => privileges.fmt(f),
            DavValue::Collations(collations) => collations.fmt(f),
            DavValue::CData(value) => value.write_cdata_escaped_to(f),
            DavValue::Null => Ok(()),
        }
    }
}

impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.0 {
            item.fmt(f)?;
        }
        Ok(())
    }
}

impl Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<D:href>")?;
        self.0.write_escaped_to(f)?;
        f.write_str("</D:href>")
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::Collection => f.write_str("<D:collection/>"),
            ResourceType::AddressBook => f.write_str("<C:addressbook/>"),
        }
    }
}

impl Display for ReportSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportSet::AddressbookMultiGet => "addressbook-multiget",
            ReportSet::AddressbookQuery => "addressbook-query",
        };
        write!(
            f,
            "<D:supported-report><D:report><C:{name}/></D:report></D:supported-report>"
        )
    }
}

impl Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<D:privilege><D:{}/></D:privilege>", self.as_str())
    }
}

impl Display for Ace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<D:ace><D:principal>{}</D:principal><D:grant>{}</D:grant>",
            self.principal, self.grant
        )?;
        if self.protected {
            f.write_str("<D:protected/>")?;
        }
        f.write_str("</D:ace>")
    }
}

impl Display for AclRestrictions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.grant_only {
            f.write_str("<D:grant-only/>")?;
        }
        if self.no_invert {
            f.write_str("<D:no-invert/>")?;
        }
        Ok(())
    }
}

impl Display for SupportedPrivilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<D:supported-privilege>{}<D:description xml:lang=\"en\">",
            self.privilege
        )?;
        self.description.write_escaped_to(f)?;
        f.write_str("</D:description></D:supported-privilege>")
    }
}

impl Display for SupportedCollation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.namespace {
            Namespace::CardDav => "C",
            _ => "D",
        };
        write!(
            f,
            "<{prefix}:supported-collation>{}</{prefix}:supported-collation>",
            self.collation.as_str()
        )
    }
}
