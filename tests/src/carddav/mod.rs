/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use crate::AssertConfig;
use chrono::{DateTime, TimeZone, Utc};
use common::{Core, auth::AccessToken};
use dav::{
    DavServer,
    card::collection::AddressBookCollectionResource,
    common::{DavResource, RequestContext, dispatch::PropertyDispatcher},
};
use dav_proto::{
    RequestHeaders,
    schema::{
        property::{DavValue, PropertyKey},
        request::{PropertyRequest, PropertyUpdate, XmlFragment},
    },
};
use groupware::contact::storage::MemoryStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use types::DocumentId;
use utils::{UnwrapFailure, config::Config};

pub mod acl;
pub mod collection;
pub mod diagnostics;
pub mod registry;

const SERVER: &str = r#"
[contacts]
max-size = 2048

[quota]
disk-capacity = "1mb"

[quota.global]
limit = "absolute"
value = 4096

[dav.acl]
privileges = ["write-content", "read"]

[dav.debug]
properties = {LEVEL}
proppatch = 1

[quirks]
CURRENT_PRINCIPAL_NO_URL = ["/^Mac OS X/10\\.[0-6]\\./", "DAVKit/4.0.3"]
SomeClient = ["/^Foo.*Bar$/"]
"#;

#[test]
fn carddav_tests() {
    init_logging();
    let handle = init_carddav_tests();

    registry::test(&handle);
    collection::test(&handle);
    acl::test(&handle);
    quirks::test(&handle);
    quota::test(&handle);
    diagnostics::test(&handle);
}

pub struct CardDavTest {
    server: DavServer,
    store: Arc<MemoryStore>,
}

fn init_carddav_tests() -> CardDavTest {
    let level = std::env::var("DAV_DEBUG").unwrap_or_else(|_| "1".to_string());
    let mut config =
        Config::new(SERVER.replace("{LEVEL}", &level)).failed("Invalid configuration");
    let core = Core::parse(&mut config);
    config.assert_no_errors();

    let store = Arc::new(MemoryStore::new());
    CardDavTest {
        server: DavServer::new(Arc::new(core), store.clone()),
        store,
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LOG").unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_test_writer()
        .try_init();
}

impl CardDavTest {
    pub fn context<'x>(
        &'x self,
        access_token: &'x AccessToken,
        headers: RequestHeaders<'x>,
    ) -> RequestContext<'x> {
        RequestContext::new(&self.server.core, access_token, headers)
    }

    pub fn address_book<'x>(
        &'x self,
        access_token: &'x AccessToken,
        document_id: DocumentId,
    ) -> AddressBookCollectionResource<'x> {
        AddressBookCollectionResource::new(
            &self.server,
            self.context(access_token, RequestHeaders::new("/dav/card/")),
            document_id,
        )
        .unwrap()
    }

    pub fn get(
        &self,
        resource: &impl DavResource,
        namespace: &str,
        name: &str,
    ) -> dav::Result<DavValue> {
        self.server.get_property(
            resource,
            &PropertyRequest::new(PropertyKey::new(namespace, name)),
        )
    }

    pub fn set(
        &self,
        resource: &impl DavResource,
        namespace: &str,
        name: &str,
        value: XmlFragment,
    ) -> dav::Result<()> {
        self.server.set_property(
            resource,
            &PropertyUpdate::new(PropertyKey::new(namespace, name), value),
        )
    }
}

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}
