use std::time::{Duration, Instant};

/// Debounce window applied to keystroke-level edits.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Controller phase, shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Debouncing,
    Fetching,
}

/// Reactive update controller.
///
/// Collapses rapid draft edits into a single fetch (last-write-wins over a
/// 300 ms window), lets discrete control changes bypass the debounce, and
/// tags every dispatch with a monotonically increasing sequence token so a
/// slow stale response can never overwrite a newer render. In-flight
/// requests are not cancelled; the token comparison alone guarantees
/// convergence to the newest result.
#[derive(Debug)]
pub struct UpdateController {
    /// Single-slot debounce deadline, replaced atomically on every draft.
    deadline: Option<Instant>,
    next_seq: u64,
    applied_seq: u64,
    in_flight: usize,
}

impl UpdateController {
    pub fn new() -> Self {
        Self {
            deadline: None,
            next_seq: 0,
            applied_seq: 0,
            in_flight: 0,
        }
    }

    /// Draft edit: (re)arm the debounce window, dropping any pending
    /// deadline. Only the most recent burst survives.
    pub fn note_draft(&mut self, now: Instant) {
        self.deadline = Some(now + DEBOUNCE);
    }

    /// Discrete control change: dispatch immediately, cancelling any pending
    /// debounce. Returns the sequence token for the fetch.
    pub fn note_commit(&mut self) -> u64 {
        self.deadline = None;
        self.begin_fetch()
    }

    /// Returns a fetch token once the pending deadline has elapsed.
    pub fn poll_deadline(&mut self, now: Instant) -> Option<u64> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(self.begin_fetch())
            }
            _ => None,
        }
    }

    fn begin_fetch(&mut self) -> u64 {
        self.next_seq += 1;
        self.in_flight += 1;
        self.next_seq
    }

    /// Note a response arrival (applied or not, success or failure).
    pub fn finish_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// True when `seq` is newer than the last applied response; the caller
    /// then renders it. Stale arrivals return false and must be dropped.
    pub fn try_apply(&mut self, seq: u64) -> bool {
        if seq > self.applied_seq {
            self.applied_seq = seq;
            true
        } else {
            false
        }
    }

    /// Time until the pending deadline fires, for frame scheduling.
    pub fn time_to_deadline(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight > 0 {
            Phase::Fetching
        } else if self.deadline.is_some() {
            Phase::Debouncing
        } else {
            Phase::Idle
        }
    }
}

impl Default for UpdateController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_burst_collapses_to_one_fetch() {
        let mut controller = UpdateController::new();
        let start = Instant::now();

        // Five edits, 50 ms apart; each restarts the window.
        for i in 0..5 {
            let at = start + Duration::from_millis(50 * i);
            controller.note_draft(at);
            assert_eq!(
                controller.poll_deadline(at),
                None,
                "no fetch while the burst is live"
            );
        }

        let last_edit = start + Duration::from_millis(200);
        // Just before the window closes: still nothing.
        assert_eq!(
            controller.poll_deadline(last_edit + Duration::from_millis(299)),
            None
        );
        // At the deadline: exactly one fetch.
        assert_eq!(
            controller.poll_deadline(last_edit + DEBOUNCE),
            Some(1),
            "one fetch, 300 ms after the last edit"
        );
        // The slot is consumed.
        assert_eq!(
            controller.poll_deadline(last_edit + Duration::from_millis(600)),
            None
        );
    }

    #[test]
    fn test_commit_bypasses_debounce() {
        let mut controller = UpdateController::new();
        let now = Instant::now();

        controller.note_draft(now);
        let seq = controller.note_commit();
        assert_eq!(seq, 1, "commit dispatches immediately");
        // The pending draft deadline was cancelled by the commit.
        assert_eq!(controller.poll_deadline(now + DEBOUNCE), None);
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut controller = UpdateController::new();
        let a = controller.note_commit();
        let b = controller.note_commit();
        assert!(b > a, "tokens are monotonic");

        // B (newer) lands first and renders.
        controller.finish_fetch();
        assert!(controller.try_apply(b));
        // A arrives late: discarded, B's render stands.
        controller.finish_fetch();
        assert!(!controller.try_apply(a), "stale response must not apply");
    }

    #[test]
    fn test_failed_fetch_keeps_prior_render_applicable() {
        let mut controller = UpdateController::new();
        let a = controller.note_commit();
        let b = controller.note_commit();

        assert!(b > a);
        // B fails: finishes without advancing the applied token.
        controller.finish_fetch();
        // A's slower success still renders: a failed newer request must not
        // block the older in-flight one.
        controller.finish_fetch();
        assert!(controller.try_apply(a));
    }

    #[test]
    fn test_phase_transitions() {
        let mut controller = UpdateController::new();
        let now = Instant::now();
        assert_eq!(controller.phase(), Phase::Idle);

        controller.note_draft(now);
        assert_eq!(controller.phase(), Phase::Debouncing);

        let seq = controller.poll_deadline(now + DEBOUNCE).unwrap();
        assert_eq!(controller.phase(), Phase::Fetching);

        controller.finish_fetch();
        controller.try_apply(seq);
        assert_eq!(controller.phase(), Phase::Idle);
    }
}
