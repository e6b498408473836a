use std::thread;
use std::time::{Duration, Instant};

use log::warn;

/// Holds the caller until the next tick is due.
pub trait Pacer {
    fn wait(&mut self);
}

/// Fixed-rate pacer. A tick that overruns its slot re-anchors the schedule
/// instead of letting later ticks fire back to back.
#[derive(Debug)]
pub struct TickPacer {
    period: Duration,
    next_tick: Instant,
}

impl TickPacer {
    pub fn new(ticks_per_second: u32) -> Self {
        assert!(ticks_per_second > 0, "tick rate must be positive");
        let period = Duration::from_secs(1) / ticks_per_second;
        TickPacer {
            period,
            next_tick: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    fn schedule(&mut self, now: Instant) -> Option<Duration> {
        if now < self.next_tick {
            let remaining = self.next_tick - now;
            self.next_tick += self.period;
            Some(remaining)
        } else {
            let behind = now - self.next_tick;
            if behind > self.period {
                warn!("Tick overran its slot by {:?}", behind);
            }
            self.next_tick = now + self.period;
            None
        }
    }
}

impl Pacer for TickPacer {
    fn wait(&mut self) {
        if let Some(remaining) = self.schedule(Instant::now()) {
            thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_rate() {
        assert_eq!(TickPacer::new(8).period(), Duration::from_millis(125));
        assert_eq!(TickPacer::new(1).period(), Duration::from_secs(1));
    }

    #[test]
    #[should_panic]
    fn test_zero_rate_rejected() {
        TickPacer::new(0);
    }

    #[test]
    fn test_schedule_waits_out_remaining_time() {
        let mut pacer = TickPacer::new(10);
        let start = pacer.next_tick - pacer.period;

        let wait = pacer.schedule(start + Duration::from_millis(30));
        assert_eq!(wait, Some(Duration::from_millis(70)));
        assert_eq!(pacer.next_tick, start + Duration::from_millis(200));
    }

    #[test]
    fn test_schedule_reanchors_after_overrun() {
        let mut pacer = TickPacer::new(10);
        let late = pacer.next_tick + Duration::from_millis(500);

        assert_eq!(pacer.schedule(late), None);
        assert_eq!(pacer.next_tick, late + Duration::from_millis(100));

        let wait = pacer.schedule(late + Duration::from_millis(40));
        assert_eq!(wait, Some(Duration::from_millis(60)));
    }

    #[test]
    fn test_wait_paces_ticks() {
        let mut pacer = TickPacer::new(100);
        let start = Instant::now();
        for _ in 0..5 {
            pacer.wait();
        }
        assert!(start.elapsed() >= Duration::from_millis(40));
    }
}
