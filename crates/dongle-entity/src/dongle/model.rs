//! Dongle entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dongle_core::error::AppError;

/// Lifecycle state of a dongle.
///
/// Holder details exist only while checked out, so a dongle can never be
/// "available with a holder" or "checked out by nobody".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DongleState {
    /// On the shelf.
    Available,
    /// Held by someone.
    CheckedOut {
        /// Who took it.
        holder: String,
        /// Where they are sitting.
        location: String,
        /// When it was taken.
        since: DateTime<Utc>,
    },
}

/// A shared hardware dongle.
///
/// Serialized in the flat layout the UI and the data file use:
/// `{name, isCheckedOut, checkedOutBy, location, checkedOutAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DongleRecord", try_from = "DongleRecord")]
pub struct Dongle {
    /// Display label.
    pub name: String,
    /// Current lifecycle state.
    pub state: DongleState,
}

impl Dongle {
    /// Creates an available dongle.
    pub fn available(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: DongleState::Available,
        }
    }

    /// Whether the dongle is currently checked out.
    pub fn is_checked_out(&self) -> bool {
        matches!(self.state, DongleState::CheckedOut { .. })
    }

    /// Current holder, if checked out.
    pub fn holder(&self) -> Option<&str> {
        match &self.state {
            DongleState::CheckedOut { holder, .. } => Some(holder),
            DongleState::Available => None,
        }
    }

    /// Current holder's location, if checked out.
    pub fn location(&self) -> Option<&str> {
        match &self.state {
            DongleState::CheckedOut { location, .. } => Some(location),
            DongleState::Available => None,
        }
    }

    /// Checkout time, if checked out.
    pub fn checked_out_at(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            DongleState::CheckedOut { since, .. } => Some(*since),
            DongleState::Available => None,
        }
    }

    /// Moves the dongle from `Available` to `CheckedOut`.
    pub fn check_out(
        &mut self,
        holder: impl Into<String>,
        location: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        if let DongleState::CheckedOut { holder, .. } = &self.state {
            return Err(AppError::conflict(format!(
                "Dongle is already checked out by {holder}"
            )));
        }

        self.state = DongleState::CheckedOut {
            holder: holder.into(),
            location: location.into(),
            since: at,
        };
        Ok(())
    }

    /// Moves the dongle from `CheckedOut` back to `Available`.
    ///
    /// Returns the outgoing holder and location.
    pub fn check_in(&mut self) -> Result<(String, String), AppError> {
        match std::mem::replace(&mut self.state, DongleState::Available) {
            DongleState::CheckedOut {
                holder, location, ..
            } => Ok((holder, location)),
            DongleState::Available => {
                Err(AppError::conflict("Dongle is not currently checked out"))
            }
        }
    }
}

/// Flat wire representation of a [`Dongle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DongleRecord {
    name: String,
    #[serde(default)]
    is_checked_out: bool,
    #[serde(default)]
    checked_out_by: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    checked_out_at: Option<DateTime<Utc>>,
}

impl From<Dongle> for DongleRecord {
    fn from(dongle: Dongle) -> Self {
        match dongle.state {
            DongleState::Available => Self {
                name: dongle.name,
                is_checked_out: false,
                checked_out_by: None,
                location: None,
                checked_out_at: None,
            },
            DongleState::CheckedOut {
                holder,
                location,
                since,
            } => Self {
                name: dongle.name,
                is_checked_out: true,
                checked_out_by: Some(holder),
                location: Some(location),
                checked_out_at: Some(since),
            },
        }
    }
}

impl TryFrom<DongleRecord> for Dongle {
    type Error = String;

    fn try_from(record: DongleRecord) -> Result<Self, Self::Error> {
        if !record.is_checked_out {
            return Ok(Dongle::available(record.name));
        }

        match (record.checked_out_by, record.location, record.checked_out_at) {
            (Some(holder), Some(location), Some(since)) => Ok(Dongle {
                name: record.name,
                state: DongleState::CheckedOut {
                    holder,
                    location,
                    since,
                },
            }),
            _ => Err(format!(
                "dongle '{}' is checked out but is missing its holder, location or checkout time",
                record.name
            )),
        }
    }
}
