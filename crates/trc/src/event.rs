/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use crate::*;

impl EventType {
    pub fn level(&self) -> Level {
        match self {
            EventType::Dav(event) => match event {
                DavEvent::PropertyGet
                | DavEvent::PropertySet
                | DavEvent::PropertyList
                | DavEvent::PropertySkipped => Level::Debug,
                DavEvent::UnsupportedNamespace | DavEvent::ReadOnlyProperty => Level::Info,
                DavEvent::UnexpectedArguments | DavEvent::ExpectedArguments => Level::Error,
                DavEvent::PropertyTableError => Level::Warn,
            },
            EventType::Config(event) => match event {
                ConfigEvent::ParseError | ConfigEvent::BuildError => Level::Error,
                ConfigEvent::DefaultApplied => Level::Debug,
            },
            EventType::Resource(event) => match event {
                ResourceEvent::NotFound => Level::Debug,
            },
            EventType::Store(event) => match event {
                StoreEvent::NotFound => Level::Debug,
                StoreEvent::UnexpectedError => Level::Error,
            },
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self.level() {
            Level::Trace => tracing::enabled!(tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(tracing::Level::INFO),
            Level::Warn => tracing::enabled!(tracing::Level::WARN),
            Level::Error => tracing::enabled!(tracing::Level::ERROR),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EventType::Dav(event) => match event {
                DavEvent::PropertyGet => "dav.property-get",
                DavEvent::PropertySet => "dav.property-set",
                DavEvent::PropertyList => "dav.property-list",
                DavEvent::PropertySkipped => "dav.property-skipped",
                DavEvent::UnsupportedNamespace => "dav.unsupported-namespace",
                DavEvent::UnexpectedArguments => "dav.unexpected-arguments",
                DavEvent::ExpectedArguments => "dav.expected-arguments",
                DavEvent::ReadOnlyProperty => "dav.read-only-property",
                DavEvent::PropertyTableError => "dav.property-table-error",
            },
            EventType::Config(event) => match event {
                ConfigEvent::ParseError => "config.parse-error",
                ConfigEvent::BuildError => "config.build-error",
                ConfigEvent::DefaultApplied => "config.default-applied",
            },
            EventType::Resource(event) => match event {
                ResourceEvent::NotFound => "resource.not-found",
            },
            EventType::Store(event) => match event {
                StoreEvent::NotFound => "store.not-found",
                StoreEvent::UnexpectedError => "store.unexpected-error",
            },
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EventType::Dav(event) => match event {
                DavEvent::PropertyGet => "Property requested",
                DavEvent::PropertySet => "Property update requested",
                DavEvent::PropertyList => "Supported property list",
                DavEvent::PropertySkipped => "Property not handled locally",
                DavEvent::UnsupportedNamespace => "Property namespace not supported",
                DavEvent::UnexpectedArguments => "Property request did not expect arguments",
                DavEvent::ExpectedArguments => "Property request expected arguments",
                DavEvent::ReadOnlyProperty => "Attempt to modify a protected property",
                DavEvent::PropertyTableError => "Failed to build supported property table",
            },
            EventType::Config(event) => match event {
                ConfigEvent::ParseError => "Configuration parse error",
                ConfigEvent::BuildError => "Configuration build error",
                ConfigEvent::DefaultApplied => "Configuration default applied",
            },
            EventType::Resource(event) => match event {
                ResourceEvent::NotFound => "Resource not found",
            },
            EventType::Store(event) => match event {
                StoreEvent::NotFound => "Data not found",
                StoreEvent::UnexpectedError => "Unexpected store error",
            },
        }
    }
}

macro_rules! impl_into_err {
    ($($event:ident => $variant:ident),* $(,)?) => {
        $(
            impl $event {
                pub fn into_err(self) -> Error {
                    Error::new(EventType::$variant(self))
                }
            }

            impl From<$event> for EventType {
                fn from(event: $event) -> Self {
                    EventType::$variant(event)
                }
            }
        )*
    };
}

impl_into_err!(
    DavEvent => Dav,
    ConfigEvent => Config,
    ResourceEvent => Resource,
    StoreEvent => Store,
);

impl Key {
    pub fn name(&self) -> &'static str {
        match self {
            Key::AccountId => "accountId",
            Key::DocumentId => "documentId",
            Key::Collection => "collection",
            Key::Namespace => "namespace",
            Key::Property => "property",
            Key::Id => "id",
            Key::Details => "details",
            Key::Reason => "reason",
            Key::Value => "value",
            Key::Total => "total",
            Key::CausedBy => "causedBy",
        }
    }
}
