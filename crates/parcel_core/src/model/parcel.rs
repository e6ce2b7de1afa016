//! Parcel domain model.
//!
//! # Responsibility
//! - Define the parcel record and its known lifecycle states.
//! - Validate fields that storage cannot check by itself.
//!
//! # Invariants
//! - `number` is assigned by storage and never reused.
//! - `created_at` is an RFC-3339 timestamp captured at creation.
//! - `status` is an open string; only `registered` carries special meaning.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned parcel identifier.
pub type ParcelNumber = i64;

/// Identifier of the client a parcel belongs to.
pub type ClientId = i64;

/// Known parcel lifecycle states.
///
/// Stored parcels may carry statuses outside this set; see [`Parcel::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Accepted for delivery. Address changes and deletion are allowed.
    Registered,
    /// Handed over to the carrier.
    Sent,
    /// Received by the client.
    Delivered,
}

impl ParcelStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// Parses a stored status string. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "registered" => Some(Self::Registered),
            "sent" => Some(Self::Sent),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }

    /// Returns the state that follows this one, or `None` for the last one.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Registered => Some(Self::Sent),
            Self::Sent => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }
}

impl Display for ParcelStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for parcel fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParcelValidationError {
    InvalidCreatedAt(String),
}

impl Display for ParcelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCreatedAt(value) => {
                write!(f, "created_at `{value}` is not an RFC-3339 timestamp")
            }
        }
    }
}

impl Error for ParcelValidationError {}

/// Canonical parcel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Assigned on insert; ignored by `add`.
    pub number: ParcelNumber,
    pub client: ClientId,
    /// Free-form status. Not validated against [`ParcelStatus`].
    pub status: String,
    pub address: String,
    /// RFC-3339 creation timestamp.
    pub created_at: String,
}

impl Parcel {
    /// Creates an unsaved `registered` parcel stamped with the current UTC time.
    pub fn new(client: ClientId, address: impl Into<String>) -> Self {
        Self {
            number: 0,
            client,
            status: ParcelStatus::Registered.as_str().to_string(),
            address: address.into(),
            created_at: now_rfc3339(),
        }
    }

    /// Returns the known status, if the stored string is one.
    pub fn known_status(&self) -> Option<ParcelStatus> {
        ParcelStatus::parse(&self.status)
    }

    pub fn is_registered(&self) -> bool {
        self.status == ParcelStatus::Registered.as_str()
    }

    pub fn validate(&self) -> Result<(), ParcelValidationError> {
        if DateTime::parse_from_rfc3339(&self.created_at).is_err() {
            return Err(ParcelValidationError::InvalidCreatedAt(
                self.created_at.clone(),
            ));
        }
        Ok(())
    }
}

/// Current UTC time as RFC-3339 with second precision, e.g. `2024-05-01T10:00:00Z`.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
