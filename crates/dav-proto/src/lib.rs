/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod responses;
pub mod schema;

/// Request-scoped values supplied by the transport layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestHeaders<'x> {
    pub uri: &'x str,
    pub user_agent: Option<&'x str>,
    /// Scheme and authority of the request (`https://host:port`), used to build
    /// absolute references.
    pub base_url: Option<&'x str>,
}

impl<'x> RequestHeaders<'x> {
    pub fn new(uri: &'x str) -> Self {
        RequestHeaders {
            uri,
            ..Default::default()
        }
    }

    pub fn with_user_agent(mut self, user_agent: &'x str) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    pub fn with_base_url(mut self, base_url: &'x str) -> Self {
        self.base_url = Some(base_url.trim_end_matches('/'));
        self
    }
}
