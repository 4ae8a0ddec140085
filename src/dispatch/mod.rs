//! Request dispatching by `(resource, action)`.
//!
//! Inbound paths have the form `<prefix>/<resource>/<action>`. The two
//! trailing segments are parsed into the closed enums [`Resource`] and
//! [`Action`]; anything outside those sets is a `NotFound` before any
//! handler runs. The parsed [`RouteKey`] selects a handler from the
//! immutable [`RouteTable`].
//!
//! # Modules
//!
//! - [`body`] - Generic JSON and query-string input mapping
//! - [`table`] - Route table and the handler trait
//! - [`use_case`] - Typed adapter from a use-case function to a handler

pub mod body;
pub mod table;
pub mod use_case;

pub use table::{ActionHandler, Inbound, RouteTable, RouteTableBuilder};
pub use use_case::UseCase;

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Resource domains served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    User,
    Book,
}

impl Resource {
    pub const ALL: [Resource; 2] = [Resource::User, Resource::Book];

    pub fn as_str(self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Book => "book",
        }
    }
}

impl FromStr for Resource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Resource::User),
            "book" => Ok(Resource::Book),
            other => Err(AppError::not_found(format!("unknown resource: {other}"))),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an action reads its input from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// JSON request body.
    Body,
    /// URL query string, e.g. `?id=u1`.
    Query,
}

/// The four actions every resource supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    pub fn input_source(self) -> InputSource {
        match self {
            Action::Create | Action::Update => InputSource::Body,
            Action::Read | Action::Delete => InputSource::Query,
        }
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Action::Create),
            "read" => Ok(Action::Read),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            other => Err(AppError::not_found(format!("unknown action: {other}"))),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key into the [`RouteTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub resource: Resource,
    pub action: Action,
}

impl RouteKey {
    pub fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }

    /// Parses the two trailing path segments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either segment is not a known name.
    pub fn parse(resource: &str, action: &str) -> Result<Self, AppError> {
        Ok(Self {
            resource: resource.parse()?,
            action: action.parse()?,
        })
    }

    /// Every key the API defines.
    pub fn all() -> impl Iterator<Item = RouteKey> {
        Resource::ALL.into_iter().flat_map(|resource| {
            Action::ALL
                .into_iter()
                .map(move |action| RouteKey::new(resource, action))
        })
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource, self.action)
    }
}
