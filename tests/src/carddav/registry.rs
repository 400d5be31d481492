/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::{CardDavTest, at};
use common::auth::AccessToken;
use dav::common::DavResource;
use dav_proto::schema::{property::PropertyKey, request::XmlFragment};
use groupware::contact::{AddressBook, ContactCard};
use hyper::StatusCode;
use types::collection::Collection;

pub fn test(test: &CardDavTest) {
    println!("Running property registry tests...");
    let registry = &test.server.registry;

    // Explicit tables always contain the implicit ones
    for collection in [
        Collection::Principal,
        Collection::AddressBook,
        Collection::ContactCard,
        Collection::None,
    ] {
        let implicit = registry.resolve(collection, false);
        let all = registry.resolve(collection, true);
        assert!(
            all.is_superset(implicit),
            "{collection:?}: explicit table is missing implicit names"
        );
    }

    let book = registry.resolve(Collection::AddressBook, true);
    for (namespace, name) in [
        ("DAV:", "acl"),
        ("DAV:", "quota-used-bytes"),
        ("urn:ietf:params:xml:ns:carddav", "supported-collation-set"),
        ("http://calendarserver.org/ns/", "getctag"),
    ] {
        assert!(book.contains(namespace, name), "{namespace} {name}");
    }

    // allprop lists implicit names only
    test.store.insert(
        AddressBook::new(10, 1, "Registry")
            .with_modified(at(100))
            .with_contact(ContactCard::new("r1").with_field("FN", "R")),
    );
    let token = AccessToken::new(1, "john");
    let resource = test.address_book(&token, 10);
    let all_props = resource.all_properties(registry);
    assert!(all_props.contains(&PropertyKey::new("http://calendarserver.org/ns/", "getctag")));
    assert!(all_props.contains(&PropertyKey::new("DAV:", "supported-report-set")));
    assert!(!all_props.contains(&PropertyKey::new("DAV:", "acl")));
    assert!(!all_props.contains(&PropertyKey::new("DAV:", "quota-used-bytes")));

    // Unknown namespaces are rejected before anything else
    let contact = resource.child("r1").unwrap();
    let missing = test.address_book(&token, 11);
    assert!(!missing.exists());
    for namespace in ["urn:example", "http://apple.com/ns/ical/", ""] {
        for result in [
            test.get(&resource, namespace, "displayname"),
            test.get(&contact, namespace, "displayname"),
            test.get(&missing, namespace, "displayname"),
        ] {
            assert_eq!(
                result.unwrap_err().status_code(),
                StatusCode::BAD_REQUEST,
                "{namespace:?}"
            );
        }
        assert_eq!(
            test.set(&resource, namespace, "owner", XmlFragment::text("x"))
                .unwrap_err()
                .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    // Known namespace, unknown name
    for (namespace, name) in [
        ("DAV:", "lockdiscovery"),
        ("urn:ietf:params:xml:ns:carddav", "addressbook-home-set"),
        ("http://calendarserver.org/ns/", "getctag2"),
    ] {
        assert_eq!(
            test.get(&resource, namespace, name)
                .unwrap_err()
                .status_code(),
            StatusCode::NOT_IMPLEMENTED,
            "{namespace} {name}"
        );
    }

    // Missing address book
    assert_eq!(
        test.get(&missing, "DAV:", "displayname")
            .unwrap_err()
            .status_code(),
        StatusCode::NOT_FOUND
    );
}
