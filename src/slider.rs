//! Hero slide rotation.
//!
//! `Slider` owns the active index and the autoplay handle. The handle type is
//! generic so the browser can plug in a `gloo_timers` interval (cancelled on
//! drop) while tests use a counter.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Prev,
    Goto(usize),
}

pub struct Slider<H> {
    len: usize,
    current: usize,
    autoplay: Option<H>,
}

impl<H> Slider<H> {
    /// Returns `None` for an empty slide set; the hero then renders nothing.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            current: 0,
            autoplay: None,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn show(&mut self, index: usize) -> usize {
        self.current = index % self.len;
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.show((self.current + 1) % self.len)
    }

    pub fn prev(&mut self) -> usize {
        self.show((self.current + self.len - 1) % self.len)
    }

    pub fn apply(&mut self, nav: Navigation) -> usize {
        match nav {
            Navigation::Next => self.next(),
            Navigation::Prev => self.prev(),
            Navigation::Goto(index) => self.show(index),
        }
    }

    /// Replaces any running autoplay with `handle`. The old one is dropped first.
    pub fn start_autoplay(&mut self, handle: H) {
        self.stop_autoplay();
        self.autoplay = Some(handle);
    }

    /// Safe to call when nothing is running. Returns whether a handle was dropped.
    pub fn stop_autoplay(&mut self) -> bool {
        self.autoplay.take().is_some()
    }

    #[cfg(test)]
    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Manual navigation: move, then restart the autoplay countdown.
    pub fn navigate(&mut self, nav: Navigation, schedule: impl FnOnce() -> H) -> usize {
        let index = self.apply(nav);
        // cancel before the replacement exists
        self.stop_autoplay();
        self.autoplay = Some(schedule());
        index
    }
}

/// One touch interaction: start position on touchstart, resolved on touchend.
#[derive(Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finger moving left (positive delta) goes forward. Short drags are taps.
    pub fn end(&mut self, end_x: f64) -> Option<Navigation> {
        let start_x = self.start_x.take()?;
        classify_swipe(start_x, end_x, config::SWIPE_THRESHOLD_PX)
    }
}

pub fn classify_swipe(start_x: f64, end_x: f64, threshold: f64) -> Option<Navigation> {
    let delta = start_x - end_x;
    if delta.abs() <= threshold {
        None
    } else if delta > 0.0 {
        Some(Navigation::Next)
    } else {
        Some(Navigation::Prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live handles so tests can check nothing leaks.
    struct FakeTimer(Rc<Cell<i32>>);

    impl FakeTimer {
        fn new(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            FakeTimer(live.clone())
        }
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn empty_slide_set_is_not_initialised() {
        assert!(Slider::<()>::new(0).is_none());
    }

    #[test]
    fn next_cycles_back_to_start() {
        for len in 1..6 {
            for start in 0..len {
                let mut slider = Slider::<()>::new(len).unwrap();
                slider.show(start);
                for _ in 0..len {
                    slider.next();
                }
                assert_eq!(slider.current(), start);
            }
        }
    }

    #[test]
    fn prev_undoes_next() {
        let mut slider = Slider::<()>::new(4).unwrap();
        for start in 0..4 {
            slider.show(start);
            slider.next();
            slider.prev();
            assert_eq!(slider.current(), start);
        }
        slider.show(0);
        assert_eq!(slider.prev(), 3);
    }

    #[test]
    fn exactly_one_slide_is_active() {
        let mut slider = Slider::<()>::new(3).unwrap();
        for nav in [Navigation::Next, Navigation::Goto(7), Navigation::Prev, Navigation::Prev] {
            slider.apply(nav);
            let active = (0..slider.len()).filter(|&i| slider.is_active(i)).count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn manual_navigation_restarts_single_timer() {
        let live = Rc::new(Cell::new(0));
        let mut slider = Slider::new(3).unwrap();
        slider.start_autoplay(FakeTimer::new(&live));
        assert_eq!(live.get(), 1);

        slider.navigate(Navigation::Next, || FakeTimer::new(&live));
        slider.navigate(Navigation::Goto(0), || FakeTimer::new(&live));
        assert_eq!(live.get(), 1);
        assert!(slider.autoplay_running());
        assert_eq!(slider.current(), 0);
    }

    #[test]
    fn stop_autoplay_is_idempotent() {
        let live = Rc::new(Cell::new(0));
        let mut slider = Slider::new(2).unwrap();
        slider.start_autoplay(FakeTimer::new(&live));
        assert!(slider.stop_autoplay());
        assert!(!slider.stop_autoplay());
        assert_eq!(live.get(), 0);
        assert!(!slider.autoplay_running());
    }

    #[test]
    fn swipe_threshold() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200.0);
        assert_eq!(swipe.end(140.0), Some(Navigation::Next));

        swipe.begin(200.0);
        assert_eq!(swipe.end(170.0), None);

        swipe.begin(100.0);
        assert_eq!(swipe.end(160.0), Some(Navigation::Prev));

        // exactly at the threshold is still a tap
        swipe.begin(100.0);
        assert_eq!(swipe.end(50.0), None);
    }

    #[test]
    fn swipe_state_is_discarded_after_use() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(300.0);
        assert!(swipe.end(0.0).is_some());
        assert_eq!(swipe.end(0.0), None);
    }
}
