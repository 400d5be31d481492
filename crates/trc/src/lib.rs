/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod event;
pub mod imple;

use compact_str::CompactString;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Dav(DavEvent),
    Config(ConfigEvent),
    Resource(ResourceEvent),
    Store(StoreEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DavEvent {
    PropertyGet,
    PropertySet,
    PropertyList,
    PropertySkipped,
    UnsupportedNamespace,
    UnexpectedArguments,
    ExpectedArguments,
    ReadOnlyProperty,
    PropertyTableError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigEvent {
    ParseError,
    BuildError,
    DefaultApplied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceEvent {
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreEvent {
    NotFound,
    UnexpectedError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    AccountId,
    DocumentId,
    Collection,
    Namespace,
    Property,
    Id,
    Details,
    Reason,
    Value,
    Total,
    CausedBy,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    String(CompactString),
    UInt(u64),
    Int(i64),
    Bool(bool),
    Array(Vec<Value>),
    #[default]
    None,
}

#[derive(Debug, Clone)]
pub struct Event<T> {
    pub inner: T,
    pub keys: Vec<(Key, Value)>,
}

#[derive(Debug, Clone)]
pub struct Error(Box<Event<EventType>>);

pub trait AddContext<T> {
    fn caused_by(self, location: &'static str) -> Result<T>;
}

#[macro_export]
macro_rules! location {
    () => {{ concat!(file!(), ":", line!()) }};
}

#[macro_export]
macro_rules! event {
    ($event:ident($($param:tt)+) $(, $key:ident = $value:expr)* $(,)?) => {{
        let et = $crate::EventType::$event($($param)+);
        if et.is_enabled() {
            $crate::Event::with_capacity(et, 4)
                $(.ctx($crate::Key::$key, $value))*
                .send();
        }
    }};
}

#[macro_export]
macro_rules! error {
    ($err:expr $(,)?) => {{
        let err = $err;
        if err.event_type().is_enabled() {
            err.send();
        }
    }};
}
