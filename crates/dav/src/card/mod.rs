/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use crate::common::registry::ResourceProperties;
use types::collection::Collection;

pub mod collection;
pub mod contact;

pub const ADDRESS_BOOK_PROPERTIES: ResourceProperties = ResourceProperties {
    collection: Collection::AddressBook,
    implicit: &[
        ("DAV:", &["current-user-privilege-set", "supported-report-set"]),
        (
            "urn:ietf:params:xml:ns:carddav",
            &["max-resource-size", "supported-address-data"],
        ),
        ("http://calendarserver.org/ns/", &["getctag"]),
    ],
    explicit: &[
        (
            "urn:ietf:params:xml:ns:carddav",
            &[
                "addressbook-description",
                "max-resource-size",
                "supported-collation-set",
                "supported-address-data",
            ],
        ),
        // RFC 4331
        ("DAV:", &["quota-available-bytes", "quota-used-bytes"]),
    ],
};

pub const CONTACT_CARD_PROPERTIES: ResourceProperties = ResourceProperties {
    collection: Collection::ContactCard,
    implicit: &[],
    explicit: &[("urn:ietf:params:xml:ns:carddav", &["address-data"])],
};
