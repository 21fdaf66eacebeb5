use std::time::Duration;

/// A cosmetic progress message, appended `delay` after the cycle started.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTick {
    pub delay: Duration,
    pub message: String,
}

/// Progress messages shown while waiting for the optimizer. They never gate
/// the request: ticks still pending when the response arrives are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSchedule {
    ticks: Vec<ProgressTick>,
}

impl ProgressSchedule {
    pub fn none() -> Self {
        Self { ticks: Vec::new() }
    }

    pub fn with_tick(mut self, delay: Duration, message: impl Into<String>) -> Self {
        self.ticks.push(ProgressTick {
            delay,
            message: message.into(),
        });
        self.ticks.sort_by_key(|tick| tick.delay);
        self
    }

    pub fn ticks(&self) -> &[ProgressTick] {
        &self.ticks
    }
}

impl Default for ProgressSchedule {
    fn default() -> Self {
        Self::none()
            .with_tick(Duration::from_millis(500), "Generating route alternatives...")
            .with_tick(Duration::from_millis(1000), "Calculating real road distances...")
            .with_tick(Duration::from_millis(1500), "Evaluating CO2 emissions...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let schedule = ProgressSchedule::default();
        let delays: Vec<u128> = schedule
            .ticks()
            .iter()
            .map(|tick| tick.delay.as_millis())
            .collect();

        assert_eq!(delays, vec![500, 1000, 1500]);
    }

    #[test]
    fn test_ticks_are_sorted() {
        let schedule = ProgressSchedule::none()
            .with_tick(Duration::from_millis(300), "late")
            .with_tick(Duration::from_millis(100), "early");

        assert_eq!(schedule.ticks()[0].message, "early");
        assert_eq!(schedule.ticks()[1].message, "late");
    }
}
