/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use crate::*;
use std::fmt::{self, Display};

impl<T> Event<T> {
    pub fn with_capacity(inner: T, capacity: usize) -> Self {
        Self {
            inner,
            keys: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn ctx(mut self, key: Key, value: impl Into<Value>) -> Self {
        self.keys.push((key, value.into()));
        self
    }
}

impl Event<EventType> {
    pub fn send(self) {
        let name = self.inner.name();
        match self.inner.level() {
            Level::Trace => tracing::trace!(event = name, "{self}"),
            Level::Debug => tracing::debug!(event = name, "{self}"),
            Level::Info => tracing::info!(event = name, "{self}"),
            Level::Warn => tracing::warn!(event = name, "{self}"),
            Level::Error => tracing::error!(event = name, "{self}"),
        }
    }
}

impl Error {
    pub fn new(inner: EventType) -> Self {
        Error(Box::new(Event::with_capacity(inner, 5)))
    }

    #[inline(always)]
    pub fn ctx(mut self, key: Key, value: impl Into<Value>) -> Self {
        self.0.keys.push((key, value.into()));
        self
    }

    #[inline(always)]
    pub fn caused_by(self, location: impl Into<Value>) -> Self {
        self.ctx(Key::CausedBy, location)
    }

    #[inline(always)]
    pub fn details(self, details: impl Into<Value>) -> Self {
        self.ctx(Key::Details, details)
    }

    pub fn event_type(&self) -> EventType {
        self.0.inner
    }

    pub fn matches(&self, inner: EventType) -> bool {
        self.0.inner == inner
    }

    pub fn send(self) {
        (*self.0).send()
    }
}

impl<T> AddContext<T> for Result<T> {
    #[inline(always)]
    fn caused_by(self, location: &'static str) -> Result<T> {
        self.map_err(|err| err.caused_by(location))
    }
}

impl Display for Event<EventType> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner.description())?;
        if !self.keys.is_empty() {
            f.write_str(" (")?;
            for (pos, (key, value)) in self.keys.iter().enumerate() {
                if pos > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{} = {}", key.name(), value)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(value) => write!(f, "{value:?}"),
            Value::UInt(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Array(values) => {
                f.write_str("[")?;
                for (pos, value) in values.iter().enumerate() {
                    if pos > 0 {
                        f.write_str(", ")?;
                    }
                    value.fmt(f)?;
                }
                f.write_str("]")
            }
            Value::None => f.write_str("null"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(CompactString::new(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(CompactString::from(value))
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(CompactString::new(value))
    }
}

impl From<CompactString> for Value {
    fn from(value: CompactString) -> Self {
        Value::String(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UInt(value as u64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::UInt(value as u64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::None)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}
