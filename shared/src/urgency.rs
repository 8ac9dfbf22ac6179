//! Reservation urgency classification
//!
//! Pure wall-clock comparisons used by the floor board and the polling
//! notifier. Everything is parameterized by `now` so the flows and the
//! tests supply the clock explicitly. There is no timezone handling:
//! the restaurant's local clock is the only frame of reference, and a
//! slot is always compared against "today".

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Minutes after the slot before a no-show can be declared
pub const NO_SHOW_TOLERANCE_MIN: i64 = 15;

/// Minutes ahead within which a slot counts as "soon"
pub const SOON_WINDOW_MIN: i64 = 60;

/// Minutes ahead of the slot within which assignment is offered
pub const ASSIGN_WINDOW_MIN: i64 = 120;

/// Urgency bucket for an unassigned reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    /// The slot has passed without a check-in
    Late,
    /// The slot is within the next hour
    Soon,
    /// More than an hour away
    Upcoming,
}

/// Parse a wire `"HH:MM"` slot
pub fn parse_slot(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// True iff `now` is strictly after the slot, same day
pub fn is_late(slot: NaiveTime, now: NaiveTime) -> bool {
    now > slot
}

/// True iff the slot is ahead of `now` by at most an hour
pub fn is_soon(slot: NaiveTime, now: NaiveTime) -> bool {
    let until = slot.signed_duration_since(now);
    until > TimeDelta::zero() && until <= TimeDelta::minutes(SOON_WINDOW_MIN)
}

/// Classify a slot relative to `now`
pub fn classify(slot: NaiveTime, now: NaiveTime) -> Urgency {
    if is_late(slot, now) {
        Urgency::Late
    } else if is_soon(slot, now) {
        Urgency::Soon
    } else {
        Urgency::Upcoming
    }
}

/// A party cannot check in before its slot
pub fn too_early_to_check_in(slot: NaiveTime, now: NaiveTime) -> bool {
    now < slot
}

/// Whether the 15-minute no-show tolerance has run out
pub fn past_no_show_tolerance(slot: NaiveTime, now: NaiveTime) -> bool {
    now.signed_duration_since(slot) > TimeDelta::minutes(NO_SHOW_TOLERANCE_MIN)
}

/// Whether it is more than two hours before the reservation's slot on
/// its own day, so assignment should not be offered yet
pub fn too_early_to_assign(day: NaiveDate, slot: NaiveTime, now: NaiveDateTime) -> bool {
    let at = day.and_time(slot);
    at.signed_duration_since(now) > TimeDelta::minutes(ASSIGN_WINDOW_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(value: &str) -> NaiveTime {
        parse_slot(value).unwrap()
    }

    #[test]
    fn late_is_strictly_after() {
        assert!(is_late(t("20:00"), t("20:01")));
        assert!(!is_late(t("20:00"), t("20:00")));
        assert!(!is_late(t("20:00"), t("19:59")));
    }

    #[test]
    fn soon_window_is_left_open_right_closed() {
        // Exactly at the slot: not soon (and not late either).
        assert!(!is_soon(t("20:00"), t("20:00")));
        // One minute ahead through one hour ahead: soon.
        assert!(is_soon(t("20:00"), t("19:59")));
        assert!(is_soon(t("20:00"), t("19:00")));
        // Sixty-one minutes ahead: not yet.
        assert!(!is_soon(t("20:00"), t("18:59")));
    }

    #[test]
    fn soon_and_late_are_mutually_exclusive() {
        for now in ["18:00", "19:00", "19:30", "20:00", "20:15", "23:59"] {
            let now = t(now);
            assert!(
                !(is_soon(t("20:00"), now) && is_late(t("20:00"), now)),
                "both at now={}",
                now
            );
        }
    }

    #[test]
    fn classify_half_hour_before_slot() {
        // Reservation at 20:00 seen at 19:30.
        assert_eq!(classify(t("20:00"), t("19:30")), Urgency::Soon);
        assert!(!is_late(t("20:00"), t("19:30")));
    }

    #[test]
    fn classify_quarter_past_slot() {
        // Reservation at 20:00 seen at 20:15.
        assert_eq!(classify(t("20:00"), t("20:15")), Urgency::Late);
    }

    #[test]
    fn check_in_gates() {
        assert!(too_early_to_check_in(t("20:00"), t("19:59")));
        assert!(!too_early_to_check_in(t("20:00"), t("20:00")));

        assert!(!past_no_show_tolerance(t("20:00"), t("20:15")));
        assert!(past_no_show_tolerance(t("20:00"), t("20:16")));
    }

    #[test]
    fn assign_window_is_two_hours() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let at = |hm: &str| day.and_time(t(hm));

        assert!(too_early_to_assign(day, t("21:00"), at("18:30")));
        assert!(!too_early_to_assign(day, t("21:00"), at("19:00")));
        assert!(!too_early_to_assign(day, t("21:00"), at("21:30")));
    }

    #[test]
    fn parse_slot_rejects_garbage() {
        assert!(parse_slot("not-a-time").is_none());
        assert!(parse_slot("25:99").is_none());
        assert_eq!(parse_slot(" 09:05 "), Some(t("09:05")));
    }
}
