/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use hyper::header::{self, HeaderName, HeaderValue};
use utils::config::Config;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    /// Allow browser-based clients served from other origins.
    pub permissive_cross_origin: bool,
}

const ALLOW_METHODS: &str = concat!(
    "GET, HEAD, POST, PUT, DELETE, OPTIONS, ",
    "PROPFIND, PROPPATCH, REPORT, MKCOL, COPY, MOVE, LOCK, UNLOCK"
);
const ALLOW_HEADERS: &str = concat!(
    "Authorization, Content-Type, Depth, Destination, If-Match, If-None-Match, ",
    "Lock-Token, Overwrite, Prefer, Timeout, User-Agent, X-Requested-With"
);
const EXPOSE_HEADERS: &str = "ETag, Preference-Applied";

impl Network {
    pub fn parse(config: &mut Config) -> Self {
        Network {
            permissive_cross_origin: config
                .property_or_default("http.cross-origin.permissive", "false")
                .unwrap_or(false),
        }
    }

    pub fn cross_origin_headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        if self.permissive_cross_origin {
            vec![
                (
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ),
                (
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static(ALLOW_METHODS),
                ),
                (
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static(ALLOW_HEADERS),
                ),
                (
                    header::ACCESS_CONTROL_EXPOSE_HEADERS,
                    HeaderValue::from_static(EXPOSE_HEADERS),
                ),
            ]
        } else {
            Vec::new()
        }
    }
}
