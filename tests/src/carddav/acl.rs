/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::{CardDavTest, at};
use common::auth::AccessToken;
use dav_proto::{
    RequestHeaders,
    schema::{
        property::{DavValue, Privilege},
        request::{XmlElementTag, XmlFragment, XmlTag},
        response::Href,
    },
};
use groupware::contact::{AddressBook, ContactCard};
use hyper::StatusCode;

pub fn test(test: &CardDavTest) {
    println!("Running access control tests...");
    let token = AccessToken::new(4, "alice");
    test.store.insert(
        AddressBook::new(1, 4, "Friends")
            .with_modified(at(100))
            .with_contact(ContactCard::new("f1").with_field("FN", "Frank")),
    );
    let resource = test.address_book(&token, 1);
    let contact = resource.child("f1").unwrap();

    // Configured as ["write-content", "read"], rendered in catalog order
    assert_eq!(
        test.server.privileges.privileges(),
        &[Privilege::Read, Privilege::WriteContent]
    );
    let privileges = concat!(
        "<D:privilege><D:read/></D:privilege>",
        "<D:privilege><D:write-content/></D:privilege>"
    );
    assert_eq!(
        test.get(&resource, "DAV:", "current-user-privilege-set")
            .unwrap()
            .to_string(),
        privileges
    );
    assert_eq!(
        test.get(&resource, "DAV:", "acl").unwrap().to_string(),
        format!(
            concat!(
                "<D:ace><D:principal><D:href>/dav/pal/alice/</D:href></D:principal>",
                "<D:grant>{}</D:grant><D:protected/></D:ace>"
            ),
            privileges
        )
    );
    assert_eq!(
        test.get(&resource, "DAV:", "supported-privilege-set")
            .unwrap()
            .to_string(),
        concat!(
            "<D:supported-privilege><D:privilege><D:read/></D:privilege>",
            "<D:description xml:lang=\"en\">Read any object</D:description></D:supported-privilege>",
            "<D:supported-privilege><D:privilege><D:write-content/></D:privilege>",
            "<D:description xml:lang=\"en\">Write resource content</D:description></D:supported-privilege>"
        )
    );
    assert_eq!(
        test.get(&resource, "DAV:", "acl-restrictions")
            .unwrap()
            .to_string(),
        "<D:grant-only/><D:no-invert/>"
    );
    assert_eq!(
        test.get(&contact, "DAV:", "current-user-privilege-set")
            .unwrap()
            .to_string(),
        privileges,
        "contacts share the same privilege model"
    );

    // Principal references
    for property in ["owner", "current-user-principal", "principal-URL"] {
        assert_eq!(
            test.get(&resource, "DAV:", property).unwrap(),
            DavValue::from(vec![Href("/dav/pal/alice/".into())]),
            "{property}"
        );
    }
    assert_eq!(
        test.get(&resource, "DAV:", "principal-collection-set")
            .unwrap(),
        DavValue::from(vec![Href("/dav/pal/".into())])
    );
    assert_eq!(test.get(&resource, "DAV:", "group").unwrap(), DavValue::Null);
    assert_eq!(
        test.get(&resource, "DAV:", "inherited-acl-set").unwrap(),
        DavValue::Null
    );

    // Absolute references once the base URL is known
    let context = test.context(
        &token,
        RequestHeaders::new("/dav/card/alice/1/").with_base_url("https://dav.example.org"),
    );
    assert_eq!(
        context.principal_href(),
        Href("https://dav.example.org/dav/pal/alice/".into())
    );

    // Access control is read-only, whatever the value
    let values = [
        XmlFragment::default(),
        XmlFragment::text("alice"),
        XmlFragment::element("D:href", Some("/dav/pal/bob/".into())),
        XmlFragment(vec![
            XmlTag::ElementStart(XmlElementTag {
                name: "D:ace".into(),
                attrs: None,
            }),
            XmlTag::ElementStart(XmlElementTag {
                name: "D:grant".into(),
                attrs: Some("xmlns:D=\"DAV:\"".into()),
            }),
            XmlTag::ElementEnd,
            XmlTag::ElementEnd,
        ]),
    ];
    for value in values {
        for property in ["owner", "acl"] {
            assert_eq!(
                test.set(&resource, "DAV:", property, value.clone())
                    .unwrap_err()
                    .status_code(),
                StatusCode::FORBIDDEN,
                "{property} = {value}"
            );
            assert_eq!(
                test.set(&contact, "DAV:", property, value.clone())
                    .unwrap_err()
                    .status_code(),
                StatusCode::FORBIDDEN
            );
        }
    }

    // Other registered properties have no setter
    assert_eq!(
        test.set(&resource, "DAV:", "displayname", XmlFragment::text("Renamed"))
            .unwrap_err()
            .status_code(),
        StatusCode::NOT_IMPLEMENTED
    );
}
