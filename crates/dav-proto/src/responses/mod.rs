/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod property;

use crate::schema::Namespaces;
use std::fmt::{self, Display};

pub trait XmlEscape {
    fn write_escaped_to(&self, out: &mut impl fmt::Write) -> fmt::Result;
}

pub trait XmlCdataEscape {
    fn write_cdata_escaped_to(&self, out: &mut impl fmt::Write) -> fmt::Result;
}

impl<T: AsRef<str>> XmlEscape for T {
    fn write_escaped_to(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let s = self.as_ref();
        let mut last = 0;

        for (pos, ch) in s.char_indices() {
            let escaped = match ch {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&apos;",
                _ => continue,
            };
            out.write_str(&s[last..pos])?;
            out.write_str(escaped)?;
            last = pos + 1;
        }

        out.write_str(&s[last..])
    }
}

impl<T: AsRef<str>> XmlCdataEscape for T {
    fn write_cdata_escaped_to(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let s = self.as_ref();
        out.write_str("<![CDATA[")?;
        let mut parts = s.split("]]>").peekable();
        while let Some(part) = parts.next() {
            out.write_str(part)?;
            if parts.peek().is_some() {
                // Split the terminator across two sections
                out.write_str("]]]]><![CDATA[>")?;
            }
        }
        out.write_str("]]>")
    }
}

impl Display for Namespaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xmlns:D=\"DAV:\"")?;
        if self.card {
            write!(f, " xmlns:C=\"urn:ietf:params:xml:ns:carddav\"")?;
        }
        if self.cs {
            write!(f, " xmlns:CS=\"http://calendarserver.org/ns/\"")?;
        }
        Ok(())
    }
}
