//! Slug record entity and its field enums

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of subject a record refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserType {
    Prospect,
    Resident,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prospect => write!(f, "prospect"),
            Self::Resident => write!(f, "resident"),
        }
    }
}

impl FromStr for UserType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prospect" => Ok(Self::Prospect),
            "resident" => Ok(Self::Resident),
            _ => Err(()),
        }
    }
}

/// The action a record authorizes a lookup for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsentAction {
    SmsConsent,
    AppointmentChange,
}

impl fmt::Display for ConsentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SmsConsent => write!(f, "smsConsent"),
            Self::AppointmentChange => write!(f, "appointmentChange"),
        }
    }
}

impl FromStr for ConsentAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smsConsent" => Ok(Self::SmsConsent),
            "appointmentChange" => Ok(Self::AppointmentChange),
            _ => Err(()),
        }
    }
}

/// The identity entry persisted under a slug
///
/// Immutable once stored. There is no update path; a record lives until its
/// TTL elapses and is then evicted by the store itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugRecord {
    /// Opaque subject identifier
    pub user: String,
    pub user_type: UserType,
    pub action: ConsentAction,
}

impl SlugRecord {
    pub fn new(user: impl Into<String>, user_type: UserType, action: ConsentAction) -> Self {
        Self {
            user: user.into(),
            user_type,
            action,
        }
    }
}
