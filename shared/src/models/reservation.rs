//! Reservation Model

use serde::{Deserialize, Serialize};

/// Bookable time slots, two service windows (lunch and dinner)
pub const RESERVATION_TIME_SLOTS: [&str; 16] = [
    "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM", "1:00 PM", "1:30 PM", "2:00 PM", "5:00 PM",
    "5:30 PM", "6:00 PM", "6:30 PM", "7:00 PM", "7:30 PM", "8:00 PM", "8:30 PM", "9:00 PM",
];

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Calendar date, YYYY-MM-DD
    pub date: String,
    /// Human-readable slot label (e.g. "6:00 PM")
    pub time: String,
    pub guests: u32,
    pub message: String,
}

/// Availability query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub date: String,
    pub time: String,
    pub guests: u32,
}

/// Availability report for a (date, time, guests) triple
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub available: bool,
    /// Alternative slots offered when fully booked
    #[serde(default)]
    pub suggested_times: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_slots_cover_both_service_windows() {
        assert_eq!(RESERVATION_TIME_SLOTS.len(), 16);
        assert_eq!(RESERVATION_TIME_SLOTS[0], "11:00 AM");
        assert_eq!(RESERVATION_TIME_SLOTS[6], "2:00 PM");
        assert_eq!(RESERVATION_TIME_SLOTS[7], "5:00 PM");
        assert_eq!(RESERVATION_TIME_SLOTS[15], "9:00 PM");
    }

    #[test]
    fn availability_defaults_missing_suggestions_to_empty() {
        let av: Availability = serde_json::from_str(r#"{"available": false}"#).unwrap();
        assert!(!av.available);
        assert!(av.suggested_times.is_empty());

        let av: Availability = serde_json::from_str(
            r#"{"available": false, "suggested_times": ["6:30 PM", "7:00 PM"]}"#,
        )
        .unwrap();
        assert_eq!(av.suggested_times, vec!["6:30 PM", "7:00 PM"]);
    }
}
