/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use dav_proto::schema::property::Privilege;
use utils::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupwareConfig {
    // Addressbook settings
    pub max_vcard_size: usize,
    pub quota: QuotaLimit,

    // Access control
    pub privileges: Vec<Privilege>,

    // Diagnostics
    pub debug_properties: u8,
    pub debug_proppatch: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaLimit {
    Absolute(u64),
    Percent {
        percent: u64,
        disk_capacity: Option<u64>,
    },
    Off,
}

impl GroupwareConfig {
    pub fn parse(config: &mut Config) -> Self {
        GroupwareConfig {
            max_vcard_size: config
                .property_or_default("contacts.max-size", "1024")
                .unwrap_or(1024),
            quota: QuotaLimit::parse(config),
            privileges: parse_privileges(config),
            debug_properties: config
                .property::<u8>("dav.debug.properties")
                .unwrap_or(0)
                .min(2),
            debug_proppatch: config
                .property::<u8>("dav.debug.proppatch")
                .unwrap_or(0)
                .min(1),
        }
    }
}

impl QuotaLimit {
    pub fn parse(config: &mut Config) -> Self {
        let mode = config
            .property_or_default::<String>("quota.global.limit", "percent")
            .unwrap_or_default();
        let value = config.property::<u64>("quota.global.value");

        match mode.as_str() {
            "absolute" => match value {
                Some(value) => QuotaLimit::Absolute(value),
                None => {
                    config.new_parse_error(
                        "quota.global.value",
                        "An absolute quota requires a value in bytes.",
                    );
                    QuotaLimit::Off
                }
            },
            "percent" => {
                let percent = match value {
                    Some(value) if value <= 100 => value,
                    Some(value) => {
                        config.new_parse_error(
                            "quota.global.value",
                            format!("Percentage {value} is out of range."),
                        );
                        15
                    }
                    None => 15,
                };
                QuotaLimit::Percent {
                    percent,
                    disk_capacity: config.property("quota.disk-capacity"),
                }
            }
            "off" => QuotaLimit::Off,
            other => {
                config.new_parse_error(
                    "quota.global.limit",
                    format!("Invalid quota mode {other:?}, expected absolute, percent or off."),
                );
                QuotaLimit::Percent {
                    percent: 15,
                    disk_capacity: config.property("quota.disk-capacity"),
                }
            }
        }
    }

    /// Resolves the configured limit in bytes, `None` meaning unlimited.
    pub fn limit(&self) -> Option<u64> {
        match self {
            QuotaLimit::Absolute(bytes) => Some(*bytes),
            QuotaLimit::Percent {
                percent,
                disk_capacity: Some(capacity),
            } => Some(((*capacity as u128 * *percent as u128) / 100) as u64),
            QuotaLimit::Percent {
                disk_capacity: None,
                ..
            }
            | QuotaLimit::Off => None,
        }
    }
}

fn parse_privileges(config: &mut Config) -> Vec<Privilege> {
    if !config.contains_key("dav.acl.privileges")
        && config.sub_keys("dav.acl.privileges").is_empty()
    {
        return Privilege::ALL.to_vec();
    }

    let names = config
        .values("dav.acl.privileges")
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect::<Vec<_>>();
    let mut privileges = Vec::with_capacity(names.len());

    for (key, name) in names {
        match Privilege::parse(&name) {
            Some(privilege) => privileges.push(privilege),
            None => config.new_parse_error(key, format!("Unknown privilege {name:?}.")),
        }
    }

    privileges.sort_unstable();
    privileges.dedup();
    privileges
}

impl Default for GroupwareConfig {
    fn default() -> Self {
        GroupwareConfig {
            max_vcard_size: 1024,
            quota: QuotaLimit::default(),
            privileges: Privilege::ALL.to_vec(),
            debug_properties: 0,
            debug_proppatch: 0,
        }
    }
}

impl Default for QuotaLimit {
    fn default() -> Self {
        QuotaLimit::Percent {
            percent: 15,
            disk_capacity: None,
        }
    }
}
