/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod utils;

use ahash::AHashMap;
use std::collections::BTreeMap;
use utils::{AsKey, ParseValue};

#[derive(Debug, Default, Clone)]
pub struct Config {
    pub keys: BTreeMap<String, String>,
    pub errors: AHashMap<String, ConfigError>,
    pub warnings: AHashMap<String, ConfigWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse { error: String },
    Build { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    AppliedDefault { default: String },
}

impl Config {
    pub fn new(toml: impl AsRef<str>) -> Result<Self, String> {
        let table = toml
            .as_ref()
            .parse::<toml::Table>()
            .map_err(|err| format!("Failed to parse configuration: {err}"))?;
        let mut config = Config::default();
        config.flatten_table(String::new(), table);
        Ok(config)
    }

    fn flatten_table(&mut self, prefix: String, table: toml::Table) {
        for (key, value) in table {
            let key = if prefix.is_empty() {
                key
            } else {
                format!("{prefix}.{key}")
            };
            self.flatten_value(key, value);
        }
    }

    fn flatten_value(&mut self, key: String, value: toml::Value) {
        match value {
            toml::Value::String(value) => {
                self.keys.insert(key, value);
            }
            toml::Value::Integer(value) => {
                self.keys.insert(key, value.to_string());
            }
            toml::Value::Float(value) => {
                self.keys.insert(key, value.to_string());
            }
            toml::Value::Boolean(value) => {
                self.keys.insert(key, value.to_string());
            }
            toml::Value::Datetime(value) => {
                self.keys.insert(key, value.to_string());
            }
            toml::Value::Array(values) => {
                for (pos, value) in values.into_iter().enumerate() {
                    self.flatten_value(format!("{key}.{pos:04}"), value);
                }
            }
            toml::Value::Table(table) => {
                self.flatten_table(key, table);
            }
        }
    }

    pub fn value(&self, key: impl AsKey) -> Option<&str> {
        self.keys.get(&key.as_key()).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: impl AsKey) -> bool {
        self.keys.contains_key(&key.as_key())
    }

    pub fn property<T: ParseValue>(&mut self, key: impl AsKey) -> Option<T> {
        let key = key.as_key();
        let value = self.keys.get(&key)?;
        match T::parse_value(value) {
            Ok(value) => Some(value),
            Err(err) => {
                self.new_parse_error(key, err);
                None
            }
        }
    }

    pub fn property_or_default<T: ParseValue>(
        &mut self,
        key: impl AsKey,
        default: &str,
    ) -> Option<T> {
        let key = key.as_key();
        if self.keys.contains_key(&key) {
            self.property(key)
        } else {
            self.warnings.insert(
                key.clone(),
                ConfigWarning::AppliedDefault {
                    default: default.to_string(),
                },
            );
            match T::parse_value(default) {
                Ok(value) => Some(value),
                Err(err) => {
                    self.new_parse_error(key, err);
                    None
                }
            }
        }
    }

    /// Returns the entries directly below `prefix`. A scalar stored at `prefix`
    /// itself is returned as a single entry.
    pub fn values(&self, prefix: impl AsKey) -> impl Iterator<Item = (&str, &str)> {
        let prefix = prefix.as_key();
        let child_prefix = prefix.as_prefix();
        let exact = self
            .keys
            .get_key_value(&prefix)
            .map(|(k, v)| (k.as_str(), v.as_str()));

        exact.into_iter().chain(
            self.keys
                .range(child_prefix.clone()..)
                .take_while(move |(k, _)| k.starts_with(&child_prefix))
                .filter(move |(k, _)| !k[prefix.len() + 1..].contains('.'))
                .map(|(k, v)| (k.as_str(), v.as_str())),
        )
    }

    /// Returns the distinct key segments found directly below `prefix`.
    pub fn sub_keys(&self, prefix: impl AsKey) -> Vec<String> {
        let prefix = prefix.as_key().as_prefix();
        let mut sub_keys: Vec<String> = Vec::new();

        for key in self
            .keys
            .range(prefix.clone()..)
            .map(|(k, _)| k)
            .take_while(|k| k.starts_with(&prefix))
        {
            let segment = key[prefix.len()..]
                .split_once('.')
                .map(|(segment, _)| segment)
                .unwrap_or(&key[prefix.len()..]);
            if !segment.is_empty() && sub_keys.last().is_none_or(|last| last != segment) {
                sub_keys.push(segment.to_string());
            }
        }

        sub_keys
    }

    pub fn new_parse_error(&mut self, key: impl AsKey, details: impl Into<String>) {
        self.errors.insert(
            key.as_key(),
            ConfigError::Parse {
                error: details.into(),
            },
        );
    }

    pub fn new_build_error(&mut self, key: impl AsKey, details: impl Into<String>) {
        self.errors.insert(
            key.as_key(),
            ConfigError::Build {
                error: details.into(),
            },
        );
    }

    pub fn log_errors(&self) {
        for (key, err) in &self.errors {
            let (cause, error) = match err {
                ConfigError::Parse { error } => (trc::ConfigEvent::ParseError, error),
                ConfigError::Build { error } => (trc::ConfigEvent::BuildError, error),
            };

            trc::event!(
                Config(cause),
                Id = key.as_str(),
                Details = error.as_str(),
            );
        }
    }

    pub fn log_warnings(&self) {
        for (key, warning) in &self.warnings {
            match warning {
                ConfigWarning::AppliedDefault { default } => {
                    trc::event!(
                        Config(trc::ConfigEvent::DefaultApplied),
                        Id = key.as_str(),
                        Value = default.as_str(),
                    );
                }
            }
        }
    }
}
