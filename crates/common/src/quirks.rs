/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use ahash::AHashMap;
use regex::Regex;
use utils::config::Config;

/// Client compatibility rules, keyed by quirk id and matched against the
/// client's `User-Agent`.
#[derive(Debug, Clone, Default)]
pub struct Quirks {
    quirks: AHashMap<String, Vec<QuirkMatch>>,
}

#[derive(Debug, Clone)]
pub enum QuirkMatch {
    Exact(String),
    Pattern(Regex),
}

impl Quirks {
    /// Clients that treat every `href` as a path and need principal
    /// references without scheme and authority.
    pub const CURRENT_PRINCIPAL_NO_URL: &'static str = "CURRENT_PRINCIPAL_NO_URL";

    pub fn parse(config: &mut Config) -> Self {
        let mut quirks = Quirks::default();

        for id in config.sub_keys("quirks") {
            let entries = config
                .values(("quirks", id.as_str()))
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect::<Vec<_>>();

            let matches = quirks.quirks.entry(id).or_default();
            for (key, entry) in entries {
                match QuirkMatch::parse(&entry) {
                    Ok(quirk) => matches.push(quirk),
                    Err(err) => {
                        config.new_build_error(key, format!("Invalid quirk pattern: {err}"));
                    }
                }
            }
        }

        quirks
    }

    /// Returns `true` when `user_agent` equals a literal entry or satisfies a
    /// pattern entry of quirk `id`. Unknown ids never match.
    pub fn matches(&self, id: &str, user_agent: &str) -> bool {
        self.quirks.get(id).is_some_and(|matches| {
            matches.iter().any(|quirk| match quirk {
                QuirkMatch::Exact(literal) => literal == user_agent,
                QuirkMatch::Pattern(pattern) => pattern.is_match(user_agent),
            })
        })
    }
}

impl QuirkMatch {
    /// Entries written as `/expression/` are compiled, anything else is a
    /// literal.
    pub fn parse(entry: &str) -> Result<Self, regex::Error> {
        match entry
            .strip_prefix('/')
            .and_then(|entry| entry.strip_suffix('/'))
        {
            Some(pattern) => Regex::new(pattern).map(QuirkMatch::Pattern),
            None => Ok(QuirkMatch::Exact(entry.to_string())),
        }
    }
}
