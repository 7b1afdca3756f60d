//! Reservation form
//!
//! Field state, the fixed time-slot selector, submit handling and the
//! live availability panel. Network outcomes are fed back in through
//! `apply_submit` / `apply_availability`; the form itself never performs
//! I/O.

use std::time::Instant;

use tui_input::Input;

use shared::{ApiOutcome, Availability, AvailabilityQuery, RESERVATION_TIME_SLOTS, ReservationRequest};
use tavola_client::ClientResult;

use super::alerts::{AlertKind, AlertSlot};
use crate::utils::time::today_string;

/// Party size assumed when the guests field is left empty
const DEFAULT_GUESTS: u32 = 2;

pub const RESERVATION_CONFIRMED_MSG: &str =
    "Reservation request sent successfully! We will contact you shortly to confirm.";
pub const GENERIC_RETRY_MSG: &str = "An error occurred. Please try again later.";

/// Form fields in display order; the time selector sits directly after
/// the date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationField {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Guests,
    Message,
}

impl ReservationField {
    pub fn next(self) -> Self {
        use ReservationField::*;
        match self {
            Name => Email,
            Email => Phone,
            Phone => Date,
            Date => Time,
            Time => Guests,
            Guests => Message,
            Message => Name,
        }
    }

    pub fn label(self) -> &'static str {
        use ReservationField::*;
        match self {
            Name => "Name",
            Email => "Email",
            Phone => "Phone",
            Date => "Date",
            Time => "Reservation Time",
            Guests => "Guests",
            Message => "Message",
        }
    }
}

/// Result of the latest availability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Available { guests: u32 },
    Unavailable { suggested: Vec<String> },
}

impl AvailabilityStatus {
    /// Display lines for the status panel
    pub fn lines(&self) -> Vec<String> {
        match self {
            AvailabilityStatus::Available { guests } => {
                vec![format!("✓ Table available for {} guests", guests)]
            }
            AvailabilityStatus::Unavailable { suggested } => {
                let mut lines = vec!["✗ Fully booked at this time".to_string()];
                if !suggested.is_empty() {
                    lines.push(format!("Suggested times: {}", suggested.join(", ")));
                }
                lines
            }
        }
    }
}

#[derive(Debug)]
pub struct ReservationForm {
    pub name: Input,
    pub email: Input,
    pub phone: Input,
    pub date: Input,
    pub guests: Input,
    pub message: Input,
    /// Index into [`RESERVATION_TIME_SLOTS`]
    pub time_index: usize,
    pub focus: ReservationField,
    /// Earliest selectable date (today at startup)
    min_date: String,
    availability: Option<AvailabilityStatus>,
    /// Sequence number of the latest issued availability query; older
    /// responses are discarded so only the latest intent renders.
    seq: u64,
}

impl ReservationForm {
    pub fn new() -> Self {
        let today = today_string();
        Self {
            name: Input::default(),
            email: Input::default(),
            phone: Input::default(),
            date: Input::new(today.clone()),
            guests: Input::new(DEFAULT_GUESTS.to_string()),
            message: Input::default(),
            time_index: 0,
            focus: ReservationField::Name,
            min_date: today,
            availability: None,
            seq: 0,
        }
    }

    pub fn min_date(&self) -> &str {
        &self.min_date
    }

    pub fn time_label(&self) -> &'static str {
        RESERVATION_TIME_SLOTS[self.time_index]
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// The input currently focused, if the focus is on a text field
    pub fn focused_input(&mut self) -> Option<&mut Input> {
        use ReservationField::*;
        match self.focus {
            Name => Some(&mut self.name),
            Email => Some(&mut self.email),
            Phone => Some(&mut self.phone),
            Date => Some(&mut self.date),
            Guests => Some(&mut self.guests),
            Message => Some(&mut self.message),
            Time => None,
        }
    }

    /// Move the time selector; returns true when the selection changed
    /// (the caller then issues an availability check).
    pub fn time_next(&mut self) -> bool {
        if self.time_index + 1 < RESERVATION_TIME_SLOTS.len() {
            self.time_index += 1;
            true
        } else {
            false
        }
    }

    pub fn time_prev(&mut self) -> bool {
        if self.time_index > 0 {
            self.time_index -= 1;
            true
        } else {
            false
        }
    }

    /// Empty, unparseable and zero values all fall back to the default
    fn guests_or_default(&self) -> u32 {
        match self.guests.value().trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => DEFAULT_GUESTS,
        }
    }

    /// Collect the current field values, trimming the free-text fields
    pub fn request(&self) -> ReservationRequest {
        ReservationRequest {
            name: self.name.value().trim().to_string(),
            email: self.email.value().trim().to_string(),
            phone: self.phone.value().trim().to_string(),
            date: self.date.value().to_string(),
            time: self.time_label().to_string(),
            guests: self.guests_or_default(),
            message: self.message.value().trim().to_string(),
        }
    }

    /// Start an availability check for the current selection.
    ///
    /// Returns `None` when no date is chosen. Clears the previous status
    /// so at most one indicator is ever visible, and bumps the sequence
    /// number that stale responses are checked against.
    pub fn begin_availability_check(&mut self) -> Option<(u64, AvailabilityQuery)> {
        let date = self.date.value().trim();
        if date.is_empty() {
            return None;
        }
        self.availability = None;
        self.seq += 1;
        Some((
            self.seq,
            AvailabilityQuery {
                date: date.to_string(),
                time: self.time_label().to_string(),
                guests: self.guests_or_default(),
            },
        ))
    }

    /// Apply an availability response.
    ///
    /// Responses from superseded queries are dropped. Failures are logged
    /// only; this check never surfaces an error to the user.
    pub fn apply_availability(&mut self, seq: u64, result: ClientResult<Availability>) {
        if seq != self.seq {
            tracing::debug!(seq, latest = self.seq, "Discarding stale availability response");
            return;
        }
        match result {
            Ok(availability) => {
                self.availability = Some(if availability.available {
                    AvailabilityStatus::Available {
                        guests: self.guests_or_default(),
                    }
                } else {
                    AvailabilityStatus::Unavailable {
                        suggested: availability.suggested_times,
                    }
                });
            }
            Err(e) => {
                tracing::error!("Error checking availability: {}", e);
            }
        }
    }

    pub fn availability(&self) -> Option<&AvailabilityStatus> {
        self.availability.as_ref()
    }

    /// Apply the outcome of a reservation submit
    pub fn apply_submit(
        &mut self,
        result: ClientResult<ApiOutcome>,
        alert: &mut AlertSlot,
        now: Instant,
    ) {
        match result {
            Ok(outcome) if outcome.success => {
                alert.show(RESERVATION_CONFIRMED_MSG, AlertKind::Success, now);
                self.reset();
            }
            Ok(outcome) => {
                alert.show(outcome.message, AlertKind::Error, now);
            }
            Err(e) => {
                alert.show(GENERIC_RETRY_MSG, AlertKind::Error, now);
                tracing::error!("Error submitting reservation: {}", e);
            }
        }
    }

    /// Reset every field to its initial value
    pub fn reset(&mut self) {
        self.name.reset();
        self.email.reset();
        self.phone.reset();
        self.message.reset();
        self.date = Input::new(self.min_date.clone());
        self.guests = Input::new(DEFAULT_GUESTS.to_string());
        self.time_index = 0;
    }
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self::new()
    }
}
