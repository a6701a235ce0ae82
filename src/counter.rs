use crate::config;

/// Linear count-up from zero, advanced once per tick.
pub struct CounterAnimation {
    target: u32,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        let ticks = f64::from(config::COUNTER_DURATION_MS) / f64::from(config::COUNTER_TICK_MS);
        Self {
            target,
            step: f64::from(target) / ticks,
            current: 0.0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.current >= f64::from(self.target)
    }

    /// Returns the value to display after this tick.
    pub fn tick(&mut self) -> u32 {
        self.current += self.step;
        if self.is_done() {
            self.current = f64::from(self.target);
        }
        self.current.floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_target_and_stops() {
        let mut counter = CounterAnimation::new(500);
        let mut ticks = 0;
        let mut last = 0;
        while !counter.is_done() {
            let shown = counter.tick();
            assert!(shown >= last);
            last = shown;
            ticks += 1;
            assert!(ticks <= 200, "counter never finished");
        }
        assert_eq!(last, 500);
        assert_eq!(ticks, 125);
    }

    #[test]
    fn small_targets_floor() {
        let mut counter = CounterAnimation::new(3);
        assert_eq!(counter.tick(), 0);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut counter = CounterAnimation::new(0);
        assert_eq!(counter.tick(), 0);
        assert!(counter.is_done());
    }
}
