/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use config::{groupware::GroupwareConfig, network::Network};
use hyper::header::{HeaderName, HeaderValue};
use quirks::Quirks;
use utils::config::Config;

pub mod auth;
pub mod config;
pub mod quirks;

/// Process-wide settings, built once at start-up and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Core {
    pub groupware: GroupwareConfig,
    pub network: Network,
    pub quirks: Quirks,
}

impl Core {
    pub fn parse(config: &mut Config) -> Self {
        let core = Core {
            groupware: GroupwareConfig::parse(config),
            network: Network::parse(config),
            quirks: Quirks::parse(config),
        };

        config.log_errors();
        config.log_warnings();

        core
    }

    pub fn cross_origin_headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        self.network.cross_origin_headers()
    }

    pub fn has_quirk(&self, quirk: &str, user_agent: Option<&str>) -> bool {
        user_agent.is_some_and(|user_agent| self.quirks.matches(quirk, user_agent))
    }
}
