/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::{CardDavTest, SERVER};
use common::{Core, auth::AccessToken};
use dav::{
    DavServer,
    card::collection::AddressBookCollectionResource,
    common::{
        dispatch::PropertyDispatcher,
        registry::{PropertyRegistry, ResourceProperties},
    },
};
use dav_proto::{
    RequestHeaders,
    schema::{
        property::{DavValue, PropertyKey},
        request::{PropertyRequest, PropertyUpdate, XmlFragment},
    },
};
use groupware::contact::{AddressBook, ContactCard};
use hyper::StatusCode;
use std::{
    fmt::Debug,
    sync::{Arc, Mutex},
};
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    layer::{Context, Layer, SubscriberExt},
    registry,
};
use types::collection::Collection;
use utils::{UnwrapFailure, config::Config};

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub name: String,
    pub level: Level,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

#[derive(Default)]
struct EventVisitor {
    name: Option<String>,
    message: String,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.name = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "event" => self.name = Some(format!("{value:?}").trim_matches('"').to_string()),
            _ => {}
        }
    }
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        if let Some(name) = visitor.name {
            self.events.lock().unwrap().push(CapturedEvent {
                name,
                level: *event.metadata().level(),
                message: visitor.message,
            });
        }
    }
}

impl EventCapture {
    /// Runs `f` with a subscriber scoped to the current thread and returns
    /// every trc event it emitted.
    pub fn run(f: impl FnOnce()) -> Vec<CapturedEvent> {
        let capture = EventCapture::default();
        tracing::subscriber::with_default(registry().with(capture.clone()), f);
        std::mem::take(&mut *capture.events.lock().unwrap())
    }
}

fn named<'x>(events: &'x [CapturedEvent], name: &str) -> Vec<&'x CapturedEvent> {
    events.iter().filter(|event| event.name == name).collect()
}

fn server_with_level(test: &CardDavTest, level: u8) -> DavServer {
    let mut config = Config::new(SERVER.replace("{LEVEL}", &level.to_string()))
        .failed("Invalid configuration");
    DavServer::new(Arc::new(Core::parse(&mut config)), test.store.clone())
}

fn get(
    server: &DavServer,
    resource: &AddressBookCollectionResource<'_>,
    request: PropertyRequest,
) -> dav::Result<DavValue> {
    server.get_property(resource, &request)
}

pub fn test(test: &CardDavTest) {
    println!("Running diagnostics tests...");
    test.store.insert(
        AddressBook::new(20, 3, "Diagnostics")
            .with_contact(ContactCard::new("d1").with_field("FN", "Dee")),
    );
    let token = AccessToken::new(3, "dee");

    // Unhandled properties are traced according to dav.debug.properties
    for level in 0..=2u8 {
        let server = server_with_level(test, level);
        let resource = AddressBookCollectionResource::new(
            &server,
            test.context(&token, RequestHeaders::new("/dav/card/")),
            20,
        )
        .unwrap();

        let events = EventCapture::run(|| {
            for (namespace, name) in [
                ("DAV:", "lockdiscovery"),
                ("DAV:", "getcontentlength"),
            ] {
                assert_eq!(
                    get(
                        &server,
                        &resource,
                        PropertyRequest::new(PropertyKey::new(namespace, name))
                    )
                    .unwrap_err()
                    .status_code(),
                    StatusCode::NOT_IMPLEMENTED
                );
            }
        });

        let skipped = named(&events, "dav.property-skipped");
        let listed = named(&events, "dav.property-list");
        match level {
            0 => {
                assert!(skipped.is_empty(), "level 0: {events:?}");
                assert!(listed.is_empty(), "level 0: {events:?}");
            }
            _ => {
                assert_eq!(skipped.len(), 2, "level {level}: {events:?}");
                assert!(skipped.iter().all(|event| event.level == Level::DEBUG));
                assert!(
                    skipped[0].message.contains("property = \"lockdiscovery\"")
                        && skipped[0].message.contains("details = \"Not registered\""),
                    "{}",
                    skipped[0].message
                );
                assert!(
                    skipped[1].message.contains("property = \"getcontentlength\"")
                        && skipped[1].message.contains("details = \"No handler\""),
                    "{}",
                    skipped[1].message
                );

                if level >= 2 {
                    assert_eq!(listed.len(), 2, "level {level}: {events:?}");
                    assert!(
                        listed[0].message.contains("\"{DAV:}displayname\"")
                            && listed[0]
                                .message
                                .contains("\"{http://calendarserver.org/ns/}getctag\""),
                        "{}",
                        listed[0].message
                    );
                } else {
                    assert!(listed.is_empty(), "level 1: {events:?}");
                }
            }
        }
    }

    let server = server_with_level(test, 0);
    let resource = AddressBookCollectionResource::new(
        &server,
        test.context(&token, RequestHeaders::new("/dav/card/")),
        20,
    )
    .unwrap();

    // Arguments on a property that takes none are reported, the value is still served
    let events = EventCapture::run(|| {
        assert_eq!(
            get(
                &server,
                &resource,
                PropertyRequest::new(PropertyKey::new("DAV:", "displayname"))
                    .with_attribute("xml:lang", "en")
            )
            .unwrap(),
            DavValue::String("Diagnostics".into())
        );
    });
    let unexpected = named(&events, "dav.unexpected-arguments");
    assert_eq!(unexpected.len(), 1, "{events:?}");
    assert_eq!(unexpected[0].level, Level::ERROR);
    assert!(
        unexpected[0].message.contains("property = \"displayname\""),
        "{}",
        unexpected[0].message
    );

    // address-data takes arguments
    let contact = resource.child("d1").unwrap();
    let events = EventCapture::run(|| {
        assert!(
            server
                .get_property(
                    &contact,
                    &PropertyRequest::new(PropertyKey::new(
                        "urn:ietf:params:xml:ns:carddav",
                        "address-data"
                    ))
                    .with_children(XmlFragment::element("C:prop", None))
                )
                .is_ok()
        );
        assert!(
            get(
                &server,
                &resource,
                PropertyRequest::new(PropertyKey::new("DAV:", "displayname"))
            )
            .is_ok()
        );
    });
    assert!(named(&events, "dav.unexpected-arguments").is_empty(), "{events:?}");

    // Updates without a value are reported before the handler runs
    let events = EventCapture::run(|| {
        assert_eq!(
            server
                .set_property(
                    &resource,
                    &PropertyUpdate::new(PropertyKey::new("DAV:", "owner"), XmlFragment::default())
                )
                .unwrap_err()
                .status_code(),
            StatusCode::FORBIDDEN
        );
    });
    let expected = named(&events, "dav.expected-arguments");
    assert_eq!(expected.len(), 1, "{events:?}");
    assert_eq!(expected[0].level, Level::ERROR);
    assert!(expected[0].message.contains("property = \"owner\""));
    assert_eq!(named(&events, "dav.read-only-property").len(), 1, "{events:?}");

    let events = EventCapture::run(|| {
        assert_eq!(
            server
                .set_property(
                    &resource,
                    &PropertyUpdate::new(
                        PropertyKey::new("DAV:", "displayname"),
                        XmlFragment::text("Renamed")
                    )
                )
                .unwrap_err()
                .status_code(),
            StatusCode::NOT_IMPLEMENTED
        );
    });
    assert!(named(&events, "dav.expected-arguments").is_empty(), "{events:?}");

    // Unknown namespaces
    let events = EventCapture::run(|| {
        assert!(
            get(
                &server,
                &resource,
                PropertyRequest::new(PropertyKey::new("urn:example", "displayname"))
            )
            .is_err()
        );
    });
    let unsupported = named(&events, "dav.unsupported-namespace");
    assert_eq!(unsupported.len(), 1, "{events:?}");
    assert_eq!(unsupported[0].level, Level::INFO);

    // Broken declarations degrade to the base tables
    let mut degraded = None;
    let events = EventCapture::run(|| {
        degraded = Some(PropertyRegistry::new(&[ResourceProperties {
            collection: Collection::AddressBook,
            implicit: &[("DAV:", &["displayname", "no-such-property"])],
            explicit: &[],
        }]));
    });
    let degraded = degraded.unwrap();
    let table_errors = named(&events, "dav.property-table-error");
    assert_eq!(table_errors.len(), 1, "{events:?}");
    assert_eq!(table_errors[0].level, Level::WARN);
    assert!(
        table_errors[0].message.contains("property = \"no-such-property\"")
            && table_errors[0].message.contains("collection = \"addressBook\""),
        "{}",
        table_errors[0].message
    );
    assert_eq!(
        degraded.resolve(Collection::AddressBook, true),
        degraded.resolve(Collection::None, true)
    );
}
