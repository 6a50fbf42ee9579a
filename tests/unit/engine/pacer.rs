//! Tests for speed-scaled step pacing

#[cfg(test)]
mod tests {
    use sortviz::engine::pacer::{Pacer, Sleeper};
    use sortviz::io::configuration::{AnimationStyle, RunOptions, Speed};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Records requested sleeps instead of blocking
    #[derive(Clone, Default)]
    struct FakeSleeper {
        slept: Arc<Mutex<Vec<Duration>>>,
    }

    impl Sleeper for FakeSleeper {
        fn sleep(&mut self, duration: Duration) {
            self.slept
                .lock()
                .expect("Sleep log poisoned")
                .push(duration);
        }
    }

    fn animated(style: AnimationStyle) -> RunOptions {
        RunOptions {
            animation_style: style,
            ..RunOptions::default()
        }
    }

    fn speed(value: u8) -> Speed {
        Speed::new(value).expect("Speed within range")
    }

    fn millis(pacer: &Pacer, nominal: u32) -> u128 {
        pacer
            .effective_delay(nominal)
            .expect("Animation is enabled")
            .as_millis()
    }

    // Tests speed divides the nominal delay
    // Verified by multiplying instead of dividing
    #[test]
    fn test_speed_divides_delay() {
        let slow = Pacer::for_sorting(animated(AnimationStyle::Basic), speed(1));
        let fast = Pacer::for_sorting(animated(AnimationStyle::Basic), speed(5));

        assert_eq!(millis(&slow, 200), 200);
        assert_eq!(millis(&fast, 200), 40);
    }

    // Tests the basic sort profile floors short delays
    // Verified by removing the floor
    #[test]
    fn test_basic_sort_floor() {
        let pacer = Pacer::for_sorting(animated(AnimationStyle::Basic), speed(10));
        assert_eq!(millis(&pacer, 50), 20);
        assert_eq!(millis(&pacer, 1_000), 100);
    }

    // Tests the smooth sort profile caps long delays and keeps the floor
    // Verified by clamping to the wrong bound
    #[test]
    fn test_smooth_sort_band() {
        let pacer = Pacer::for_sorting(animated(AnimationStyle::Smooth), speed(1));
        assert_eq!(millis(&pacer, 2_000), 500);
        assert_eq!(millis(&pacer, 10), 20);
        assert_eq!(millis(&pacer, 250), 250);
    }

    // Tests the search profile applies neither floor nor cap
    // Verified by reusing the sort profile for searches
    #[test]
    fn test_search_profile_is_raw() {
        let pacer = Pacer::for_searching(animated(AnimationStyle::Smooth), speed(10));
        assert_eq!(millis(&pacer, 500), 50);
        assert_eq!(millis(&pacer, 50), 5);

        let slow = Pacer::for_searching(animated(AnimationStyle::Basic), speed(1));
        assert_eq!(millis(&slow, 2_000), 2_000);
    }

    // Tests waits reach the sleeper and are accounted
    // Verified by skipping the sleeper call
    #[test]
    fn test_wait_uses_sleeper() {
        let sleeper = FakeSleeper::default();
        let log = Arc::clone(&sleeper.slept);
        let mut pacer = Pacer::for_sorting(animated(AnimationStyle::Basic), speed(2))
            .with_sleeper(sleeper);

        pacer.wait(200);
        pacer.wait(100);

        let slept = log.lock().expect("Sleep log poisoned").clone();
        assert_eq!(
            slept,
            vec![Duration::from_millis(100), Duration::from_millis(50)]
        );
        assert_eq!(pacer.waits(), 2);
        assert_eq!(pacer.total_delay(), Duration::from_millis(150));
    }

    // Tests disabled animation never reaches the sleeper
    // Verified by ignoring the show_animation flag
    #[test]
    fn test_unpaced_runs_do_not_sleep() {
        let sleeper = FakeSleeper::default();
        let log = Arc::clone(&sleeper.slept);
        let mut pacer =
            Pacer::for_searching(RunOptions::instant(), speed(1)).with_sleeper(sleeper);

        assert!(pacer.effective_delay(500).is_none());
        pacer.wait(500);

        assert!(log.lock().expect("Sleep log poisoned").is_empty());
        assert_eq!(pacer.waits(), 0);
        assert_eq!(pacer.options(), &RunOptions::instant());
    }
}
