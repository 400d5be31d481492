/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod card;
pub mod common;

use crate::{
    card::{ADDRESS_BOOK_PROPERTIES, CONTACT_CARD_PROPERTIES},
    common::{acl::PrivilegeModel, registry::PropertyRegistry},
};
use ::common::Core;
use groupware::contact::{quota::QuotaEstimator, storage::AddressBookStore};
use hyper::StatusCode;
use std::{fmt::Display, sync::Arc};

pub type Result<T> = std::result::Result<T, DavError>;

#[derive(Debug)]
pub enum DavError {
    Code(StatusCode),
    Internal(trc::Error),
}

/// Property resolution state shared by every request.
pub struct DavServer {
    pub core: Arc<Core>,
    pub registry: PropertyRegistry,
    pub privileges: PrivilegeModel,
    pub store: Arc<dyn AddressBookStore>,
}

impl DavServer {
    pub fn new(core: Arc<Core>, store: Arc<dyn AddressBookStore>) -> Self {
        DavServer {
            registry: PropertyRegistry::new(&[ADDRESS_BOOK_PROPERTIES, CONTACT_CARD_PROPERTIES]),
            privileges: PrivilegeModel::new(&core.groupware.privileges),
            core,
            store,
        }
    }

    pub fn quota(&self) -> QuotaEstimator<'_> {
        QuotaEstimator::new(self.store.as_ref())
    }
}

impl DavError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DavError::Code(code) => *code,
            DavError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<trc::Error> for DavError {
    fn from(err: trc::Error) -> Self {
        DavError::Internal(err)
    }
}

impl From<StatusCode> for DavError {
    fn from(code: StatusCode) -> Self {
        DavError::Code(code)
    }
}

impl Display for DavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DavError::Code(code) => write!(f, "{code}"),
            DavError::Internal(err) => write!(f, "{err}"),
        }
    }
}
