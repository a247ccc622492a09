//! Checkout and checkin transitions applied to an in-memory document.

use chrono::{DateTime, Utc};

use dongle_core::error::AppError;
use dongle_entity::{Dongle, DongleDocument, HistoryAction, HistoryEntry};

/// Name recorded in history when a dongle has no display name.
const UNKNOWN_DONGLE: &str = "Unknown Dongle";

/// Outcome of a successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Dongle state after the transition.
    pub dongle: Dongle,
    /// History entry recorded for it.
    pub entry: HistoryEntry,
}

/// Trims checkout input, rejecting blank values.
pub fn validate_checkout_input(
    user_name: &str,
    location: &str,
) -> Result<(String, String), AppError> {
    let user_name = user_name.trim();
    let location = location.trim();
    if user_name.is_empty() || location.is_empty() {
        return Err(AppError::validation(
            "User name and desk location are required",
        ));
    }
    Ok((user_name.to_string(), location.to_string()))
}

/// Checks `dongle_id` out to `user_name` at `location`.
pub fn check_out(
    document: &mut DongleDocument,
    dongle_id: &str,
    user_name: &str,
    location: &str,
    now: DateTime<Utc>,
) -> Result<Transition, AppError> {
    let dongle = document
        .dongles
        .get_mut(dongle_id)
        .ok_or_else(|| AppError::not_found("Dongle not found"))?;

    dongle.check_out(user_name, location, now)?;
    let dongle = dongle.clone();

    let entry = record(
        document,
        dongle_id,
        &dongle,
        HistoryAction::Checkout,
        user_name.to_string(),
        Some(location.to_string()),
        now,
    );
    Ok(Transition { dongle, entry })
}

/// Returns `dongle_id`, crediting the history entry to its last holder.
pub fn check_in(
    document: &mut DongleDocument,
    dongle_id: &str,
    now: DateTime<Utc>,
) -> Result<Transition, AppError> {
    let dongle = document
        .dongles
        .get_mut(dongle_id)
        .ok_or_else(|| AppError::not_found("Dongle not found"))?;

    let (holder, location) = dongle.check_in()?;
    let dongle = dongle.clone();

    let entry = record(
        document,
        dongle_id,
        &dongle,
        HistoryAction::Checkin,
        holder,
        Some(location),
        now,
    );
    Ok(Transition { dongle, entry })
}

fn record(
    document: &mut DongleDocument,
    dongle_id: &str,
    dongle: &Dongle,
    action: HistoryAction,
    user_name: String,
    location: Option<String>,
    now: DateTime<Utc>,
) -> HistoryEntry {
    let name = if dongle.name.is_empty() {
        UNKNOWN_DONGLE
    } else {
        dongle.name.as_str()
    };

    let entry = HistoryEntry::new(
        document.history.next_id(now),
        dongle_id,
        name,
        action,
        user_name,
        location,
        now,
    );
    document.history.push(entry.clone());
    entry
}
