//! Upcoming-reservation poller
//!
//! A fixed-interval loop that re-fetches today's reservations, counts
//! the late and soon unassigned ones, and publishes a snapshot. The
//! alert is a one-shot latch: it fires the first time the urgent count
//! goes positive and does not re-arm until it has been dismissed and
//! the count has dropped to zero and risen again. A failed tick logs
//! and waits for the next one; there is no backoff.

use crate::api::FloorBackend;
use chrono::{Local, NaiveTime};
use shared::{urgency, Reservation};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Poller configuration
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Time between refreshes
    pub interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
        }
    }
}

/// Counts published after every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReservationSnapshot {
    /// Unassigned, slot already passed
    pub late: usize,
    /// Unassigned, slot within the next hour
    pub soon: usize,
    /// All unassigned reservations today
    pub unassigned: usize,
    /// Whether the alert fired on this tick
    pub alert: bool,
}

impl ReservationSnapshot {
    pub fn urgent(&self) -> usize {
        self.late + self.soon
    }
}

/// Count late and soon among the unassigned reservations
pub(crate) fn count_urgent(reservations: &[Reservation], now: NaiveTime) -> (usize, usize, usize) {
    let mut late = 0;
    let mut soon = 0;
    let mut unassigned = 0;
    for reservation in reservations.iter().filter(|r| !r.is_assigned()) {
        unassigned += 1;
        let Some(slot) = urgency::parse_slot(&reservation.reservation_time) else {
            continue;
        };
        if urgency::is_late(slot, now) {
            late += 1;
        } else if urgency::is_soon(slot, now) {
            soon += 1;
        }
    }
    (late, soon, unassigned)
}

/// One-shot alert latch
///
/// Armed on creation. `observe` returns whether the alert should fire
/// for the given urgent count; re-arming requires a dismissal followed
/// by an observed zero.
#[derive(Debug, Clone)]
pub struct UpcomingAlert {
    armed: bool,
    dismissed: bool,
}

impl Default for UpcomingAlert {
    fn default() -> Self {
        Self::new()
    }
}

impl UpcomingAlert {
    pub fn new() -> Self {
        Self {
            armed: true,
            dismissed: false,
        }
    }

    /// Feed the latest urgent count; true means "show the banner now"
    pub fn observe(&mut self, urgent: usize) -> bool {
        if urgent == 0 {
            if !self.armed && self.dismissed {
                self.armed = true;
                self.dismissed = false;
            }
            return false;
        }
        if self.armed {
            self.armed = false;
            true
        } else {
            false
        }
    }

    /// The staff closed the banner
    pub fn dismiss(&mut self) {
        if !self.armed {
            self.dismissed = true;
        }
    }
}

/// Fixed-interval reservation poller
pub struct ReservationWatcher {
    backend: Arc<dyn FloorBackend>,
    config: WatcherConfig,
}

impl ReservationWatcher {
    pub fn new(backend: Arc<dyn FloorBackend>, config: WatcherConfig) -> Self {
        Self { backend, config }
    }

    /// Start polling until the token is cancelled
    ///
    /// Returns the snapshot receiver and the task handle. The watcher
    /// re-reads "today" on every tick so it survives midnight.
    pub fn spawn(
        self,
        cancel: CancellationToken,
    ) -> (watch::Receiver<ReservationSnapshot>, JoinHandle<()>) {
        let (tx, rx) = watch::channel(ReservationSnapshot::default());

        let handle = tokio::spawn(async move {
            let mut alert = UpcomingAlert::new();
            let mut ticker = tokio::time::interval(self.config.interval);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::debug!("reservation watcher stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        let today = Local::now().date_naive();
                        match self.backend.reservations_by_day(today).await {
                            Ok(reservations) => {
                                let now = Local::now().time();
                                let (late, soon, unassigned) = count_urgent(&reservations, now);
                                let fired = alert.observe(late + soon);
                                let snapshot = ReservationSnapshot {
                                    late,
                                    soon,
                                    unassigned,
                                    alert: fired,
                                };
                                if tx.send(snapshot).is_err() {
                                    // Every receiver is gone; polling is pointless.
                                    break;
                                }
                            }
                            Err(err) => {
                                tracing::warn!(%err, "reservation refresh failed");
                            }
                        }
                    }
                }
            }
        });

        (rx, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(id: i64, time: &str, table_id: Option<i64>) -> Reservation {
        Reservation {
            id: Some(id),
            customer_name: format!("guest-{}", id),
            user_email: "guest@example.com".into(),
            amount_of_people: 2,
            reservation_date: "2025-06-01".into(),
            reservation_time: time.into(),
            table_id,
        }
    }

    #[test]
    fn counts_skip_assigned_reservations() {
        let now = urgency::parse_slot("20:00").unwrap();
        let list = vec![
            reservation(1, "19:00", None),    // late
            reservation(2, "20:30", None),    // soon
            reservation(3, "19:00", Some(4)), // assigned: not counted
            reservation(4, "23:00", None),    // upcoming
        ];
        assert_eq!(count_urgent(&list, now), (1, 1, 3));
    }

    #[test]
    fn unparseable_slot_counts_as_unassigned_only() {
        let now = urgency::parse_slot("20:00").unwrap();
        let list = vec![reservation(1, "??", None)];
        assert_eq!(count_urgent(&list, now), (0, 0, 1));
    }

    #[test]
    fn alert_fires_once() {
        let mut alert = UpcomingAlert::new();
        assert!(alert.observe(1));
        assert!(!alert.observe(3));
        assert!(!alert.observe(2));
    }

    #[test]
    fn alert_rearms_only_after_dismiss_and_zero() {
        let mut alert = UpcomingAlert::new();
        assert!(alert.observe(2));

        // Count drops to zero without a dismissal: still spent.
        assert!(!alert.observe(0));
        assert!(!alert.observe(1));

        // Dismiss, but the count has not been zero since: still spent.
        alert.dismiss();
        assert!(!alert.observe(1));

        // Zero after the dismissal re-arms the latch.
        assert!(!alert.observe(0));
        assert!(alert.observe(4));
    }

    #[test]
    fn dismiss_before_first_fire_is_a_no_op() {
        let mut alert = UpcomingAlert::new();
        alert.dismiss();
        assert!(alert.observe(1));
    }
}
