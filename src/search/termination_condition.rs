use crate::search::FailureReason;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Cooperative time budget of a search run. The engines poll it once per
/// loop iteration, so an expansion that has started always finishes.
#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(time_limit: Option<Duration>) -> Self {
        info!(time_limit = time_limit.map(|d| d.as_secs_f64()));
        Self {
            time_limit,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = self.elapsed().as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.elapsed().as_secs_f64(),
        );
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// What is left of the budget, `None` if there is no limit.
    pub fn remaining(&self) -> Option<Duration> {
        self.time_limit
            .map(|time_limit| time_limit.saturating_sub(self.elapsed()))
    }

    /// A limit of zero always terminates, the elapsed time is never negative.
    pub fn should_terminate(&self) -> Option<FailureReason> {
        match self.time_limit {
            Some(time_limit) if self.elapsed() >= time_limit => {
                Some(FailureReason::TimeLimitExceeded)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_terminates_immediately() {
        let termination = TerminationCondition::new(Some(Duration::ZERO));
        assert_eq!(
            termination.should_terminate(),
            Some(FailureReason::TimeLimitExceeded)
        );
    }

    #[test]
    fn no_limit_never_terminates() {
        let termination = TerminationCondition::new(None);
        assert_eq!(termination.should_terminate(), None);
    }

    #[test]
    fn generous_limit_does_not_terminate() {
        let termination = TerminationCondition::new(Some(Duration::from_secs(3600)));
        assert_eq!(termination.should_terminate(), None);
    }

    #[test]
    fn remaining_budget() {
        let unbounded = TerminationCondition::new(None);
        assert_eq!(unbounded.remaining(), None);

        let exhausted = TerminationCondition::new(Some(Duration::ZERO));
        assert_eq!(exhausted.remaining(), Some(Duration::ZERO));

        let limit = Duration::from_secs(3600);
        let generous = TerminationCondition::new(Some(limit));
        let remaining = generous.remaining().unwrap();
        assert!(remaining <= limit);
        assert!(remaining > Duration::from_secs(3500));
    }
}
