/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::{CardDavTest, at};
use chrono::{TimeZone, Utc};
use common::auth::AccessToken;
use dav::common::DavResource;
use dav_proto::schema::{
    property::{CalendarServerProperty, DavProperty, DavPropertyValue, DavValue, WebDavProperty},
    response::Href,
};
use groupware::contact::{AddressBook, ContactCard};

const CTAG: (&str, &str) = ("http://calendarserver.org/ns/", "getctag");

pub fn test(test: &CardDavTest) {
    println!("Running address book tests...");
    let token = AccessToken::new(2, "jane");

    // T0 < T1 < T2 < T3, with T1 carrying a fractional second
    let t0 = at(1_000);
    let t1 = Utc.timestamp_opt(2_000, 750_000_000).unwrap();
    let (t2, t3) = (at(3_000), at(4_000));
    let work = AddressBook::new(1, 2, "Work")
        .with_created(t0)
        .with_modified(t1)
        .with_contact(ContactCard::new("a1").with_modified(t2).with_field("FN", "Alice"))
        .with_contact(ContactCard::new("a2").with_modified(t3).with_field("FN", "Bob"));
    test.store.insert(work.clone());

    let resource = test.address_book(&token, 1);
    assert!(resource.exists());
    assert_eq!(
        test.get(&resource, "DAV:", "getlastmodified").unwrap(),
        DavValue::Rfc1123Date(t3)
    );
    assert_eq!(
        test.get(&resource, CTAG.0, CTAG.1).unwrap(),
        DavValue::Int64(2_000),
        "ctag is the whole seconds of the book's own timestamp"
    );
    assert_eq!(
        test.get(&resource, "DAV:", "creationdate").unwrap(),
        DavValue::Timestamp(t0)
    );
    assert_eq!(
        test.get(&resource, "DAV:", "displayname").unwrap(),
        DavValue::String("Work".into())
    );
    assert_eq!(
        resource.children(),
        vec![
            Href("/dav/card/jane/1/a1".into()),
            Href("/dav/card/jane/1/a2".into())
        ]
    );

    // Rendering
    assert_eq!(
        DavPropertyValue::new(
            DavProperty::WebDav(WebDavProperty::GetLastModified),
            test.get(&resource, "DAV:", "getlastmodified").unwrap()
        )
        .to_string(),
        "<D:getlastmodified>Thu, 01 Jan 1970 01:06:40 GMT</D:getlastmodified>"
    );
    assert_eq!(
        DavPropertyValue::new(
            DavProperty::CalendarServer(CalendarServerProperty::GetCTag),
            test.get(&resource, CTAG.0, CTAG.1).unwrap()
        )
        .to_string(),
        "<CS:getctag>2000</CS:getctag>"
    );
    assert_eq!(
        DavPropertyValue::new(
            DavProperty::WebDav(WebDavProperty::CreationDate),
            test.get(&resource, "DAV:", "creationdate").unwrap()
        )
        .to_string(),
        "<D:creationdate>1970-01-01T00:16:40Z</D:creationdate>"
    );

    // Contact changes move last-modified but never the ctag
    test.store.insert(
        work.clone()
            .with_contact(ContactCard::new("a3").with_modified(at(9_000))),
    );
    let resource = test.address_book(&token, 1);
    assert_eq!(
        test.get(&resource, "DAV:", "getlastmodified").unwrap(),
        DavValue::Rfc1123Date(at(9_000))
    );
    assert_eq!(
        test.get(&resource, CTAG.0, CTAG.1).unwrap(),
        DavValue::Int64(2_000)
    );
    assert_eq!(resource.children().len(), 3);

    // A change to the book itself moves the ctag
    test.store.insert(work.clone().with_modified(at(5_000)));
    let resource = test.address_book(&token, 1);
    assert_eq!(
        test.get(&resource, CTAG.0, CTAG.1).unwrap(),
        DavValue::Int64(5_000)
    );
    assert_eq!(
        test.get(&resource, "DAV:", "getlastmodified").unwrap(),
        DavValue::Rfc1123Date(at(5_000)),
        "book timestamp is now the latest"
    );

    // An empty book reports its own timestamp
    test.store
        .insert(AddressBook::new(2, 2, "Empty").with_modified(t1));
    let empty = test.address_book(&token, 2);
    assert_eq!(
        test.get(&empty, "DAV:", "getlastmodified").unwrap(),
        DavValue::Rfc1123Date(t1)
    );
    assert!(empty.children().is_empty());

    // Books of other principals are not visible
    let other = AccessToken::new(3, "john");
    let resource = test.address_book(&other, 1);
    assert!(!resource.exists());
    assert!(resource.children().is_empty());

    // Fixed fragments
    let resource = test.address_book(&token, 1);
    assert_eq!(
        test.get(&resource, "DAV:", "resourcetype")
            .unwrap()
            .to_string(),
        "<D:collection/><C:addressbook/>"
    );
    assert_eq!(
        test.get(&resource, "urn:ietf:params:xml:ns:carddav", "supported-address-data")
            .unwrap()
            .to_string(),
        "<C:address-data-type content-type=\"text/vcard\" version=\"3.0\"/>"
    );
    assert_eq!(
        test.get(&resource, "urn:ietf:params:xml:ns:carddav", "max-resource-size")
            .unwrap(),
        DavValue::Uint64(2048)
    );
    assert_eq!(
        test.get(&resource, "urn:ietf:params:xml:ns:carddav", "supported-collation-set")
            .unwrap()
            .to_string(),
        concat!(
            "<C:supported-collation>i;ascii-casemap</C:supported-collation>",
            "<C:supported-collation>i;unicode-casemap</C:supported-collation>"
        )
    );
}
