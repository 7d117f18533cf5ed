//! Generator kinds.

use std::{fmt, str::FromStr};

use serde::Serialize;

/// What a generator scaffolds. Also selects the template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// Self-contained module with a controller, hooks, entities and services
    SubApp,
    /// Single controller with its test file
    Controller,
    /// ORM entity
    Entity,
    /// Hook decorator
    Hook,
    /// Service class
    Service,
    /// Entity plus a CRUD controller bound to it
    RestApi,
}

impl Kind {
    /// Every kind, in the order they are listed to users.
    pub const ALL: [Kind; 6] = [
        Kind::SubApp,
        Kind::Controller,
        Kind::Entity,
        Kind::Hook,
        Kind::Service,
        Kind::RestApi,
    ];

    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::SubApp => "sub-app",
            Kind::Controller => "controller",
            Kind::Entity => "entity",
            Kind::Hook => "hook",
            Kind::Service => "service",
            Kind::RestApi => "rest-api",
        }
    }

    /// One-line description shown by `hatch list`.
    pub fn description(&self) -> &'static str {
        match self {
            Kind::SubApp => "module with its own controller, hooks, entities and services",
            Kind::Controller => "controller class and its test file",
            Kind::Entity => "ORM entity",
            Kind::Hook => "hook decorator",
            Kind::Service => "service class",
            Kind::RestApi => "entity and a CRUD controller for it",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sub-app" | "subapp" | "sub_app" => Ok(Kind::SubApp),
            "controller" => Ok(Kind::Controller),
            "entity" => Ok(Kind::Entity),
            "hook" => Ok(Kind::Hook),
            "service" => Ok(Kind::Service),
            "rest-api" | "restapi" | "rest_api" => Ok(Kind::RestApi),
            _ => Err(format!(
                "unknown generator '{}', expected one of: {}",
                s,
                Kind::ALL.map(|k| k.as_str()).join(", ")
            )),
        }
    }
}
