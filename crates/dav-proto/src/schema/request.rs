/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::property::PropertyKey;
use std::fmt::{self, Display};

/// A single property read, as handed over by the protocol layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRequest {
    pub key: PropertyKey,
    pub attributes: Vec<Attribute>,
    pub children: XmlFragment,
}

/// A single property write (PROPPATCH `set`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyUpdate {
    pub key: PropertyKey,
    pub attributes: Vec<Attribute>,
    pub value: XmlFragment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct XmlFragment(pub Vec<XmlTag>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlTag {
    ElementStart(XmlElementTag),
    ElementEnd,
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElementTag {
    pub name: String,
    pub attrs: Option<String>,
}

impl PropertyRequest {
    pub fn new(key: PropertyKey) -> Self {
        PropertyRequest {
            key,
            attributes: Vec::new(),
            children: XmlFragment::default(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_children(mut self, children: XmlFragment) -> Self {
        self.children = children;
        self
    }

    pub fn has_arguments(&self) -> bool {
        !self.attributes.is_empty() || !self.children.is_empty()
    }
}

impl PropertyUpdate {
    pub fn new(key: PropertyKey, value: XmlFragment) -> Self {
        PropertyUpdate {
            key,
            attributes: Vec::new(),
            value,
        }
    }

    pub fn has_arguments(&self) -> bool {
        !self.attributes.is_empty() || !self.value.is_empty()
    }
}

impl XmlFragment {
    pub fn text(text: impl Into<String>) -> Self {
        XmlFragment(vec![XmlTag::Text(text.into())])
    }

    /// A single element wrapping optional text, e.g. `<D:href>/x</D:href>`.
    pub fn element(name: impl Into<String>, text: Option<String>) -> Self {
        let mut tags = Vec::with_capacity(3);
        tags.push(XmlTag::ElementStart(XmlElementTag {
            name: name.into(),
            attrs: None,
        }));
        if let Some(text) = text {
            tags.push(XmlTag::Text(text));
        }
        tags.push(XmlTag::ElementEnd);
        XmlFragment(tags)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for XmlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::responses::XmlEscape;

        let mut open = Vec::new();
        for tag in &self.0 {
            match tag {
                XmlTag::ElementStart(start) => {
                    write!(f, "<{}", start.name)?;
                    if let Some(attrs) = &start.attrs {
                        write!(f, " {attrs}")?;
                    }
                    f.write_str(">")?;
                    open.push(start.name.as_str());
                }
                XmlTag::ElementEnd => {
                    if let Some(name) = open.pop() {
                        write!(f, "</{name}>")?;
                    }
                }
                XmlTag::Text(text) => text.write_escaped_to(f)?,
            }
        }
        Ok(())
    }
}
