// tests/limiter/reclamation_tests.rs

#[cfg(test)]
mod tests {
    use crate::fixtures::test_clock::TestClock;
    use std::time::Duration;
    use turnstile::{
        IntervalThrottle, RateLimiter, SlidingWindowConfig, SlidingWindowLimiter, ThrottleConfig,
    };

    #[test]
    fn expired_key_state_dropped_on_its_next_query() {
        let clock = TestClock::new(0.0);
        let config = SlidingWindowConfig::new(Duration::from_secs(10), 2);
        let limiter = SlidingWindowLimiter::with_config(config, clock.clone()).unwrap();

        assert!(limiter.record("user1"));
        assert!(limiter.record("user1"));
        assert_eq!(limiter.tracked_keys(), 1);

        // The key's own next query observes the expiry and drops the log
        clock.set_time(10.0);
        assert!(limiter.can_send(&"user1"));
        assert_eq!(limiter.tracked_keys(), 0);
    }

    #[test]
    fn wait_query_also_reclaims() {
        let clock = TestClock::new(0.0);
        let config = SlidingWindowConfig::new(Duration::from_secs(10), 1);
        let limiter = SlidingWindowLimiter::with_config(config, clock.clone()).unwrap();

        assert!(limiter.record("user1"));
        assert_eq!(limiter.tracked_keys(), 1);

        clock.set_time(12.0);
        assert_eq!(limiter.time_until_next_allowed(&"user1"), Duration::ZERO);
        assert_eq!(limiter.tracked_keys(), 0);
    }

    #[test]
    fn queries_on_other_keys_leave_stale_state_alone() {
        let clock = TestClock::new(0.0);
        let config = SlidingWindowConfig::new(Duration::from_secs(10), 1);
        let limiter = SlidingWindowLimiter::with_config(config, clock.clone()).unwrap();

        assert!(limiter.record("user1"));
        clock.set_time(20.0);

        // touching user2 does not scan user1's stale log
        assert!(limiter.record("user2"));
        assert_eq!(limiter.tracked_keys(), 2);

        // user1's own query reclaims it
        assert!(limiter.can_send(&"user1"));
        assert_eq!(limiter.tracked_keys(), 1);
    }

    #[test]
    fn purge_drops_fully_expired_windows() {
        let clock = TestClock::new(0.0);
        let config = SlidingWindowConfig::new(Duration::from_secs(10), 1);
        let limiter = SlidingWindowLimiter::with_config(config, clock.clone()).unwrap();

        // Admissions for three keys at different times
        assert!(limiter.record("user1".to_string()));
        clock.set_time(5.0);
        assert!(limiter.record("user2".to_string()));
        clock.set_time(10.0);
        assert!(limiter.record("user3".to_string()));
        assert_eq!(limiter.tracked_keys(), 3);

        // At t=12 only user1's admission (t=0) has aged out of the window
        clock.set_time(12.0);
        limiter.purge_stale();
        assert_eq!(limiter.tracked_keys(), 2);

        // Much later, everything has aged out
        clock.set_time(100.0);
        limiter.purge_stale();
        assert_eq!(limiter.tracked_keys(), 0);
    }

    #[test]
    fn purge_handles_empty_state() {
        let clock = TestClock::new(0.0);
        let config = SlidingWindowConfig::new(Duration::from_secs(10), 1);
        let limiter = SlidingWindowLimiter::<String, _>::with_config(config, clock).unwrap();

        // Purge with no keys must not panic
        limiter.purge_stale();
        assert_eq!(limiter.tracked_keys(), 0);
    }

    #[test]
    fn purge_preserves_recent_keys() {
        let clock = TestClock::new(100.0);
        let config = SlidingWindowConfig::new(Duration::from_secs(10), 1);
        let limiter = SlidingWindowLimiter::with_config(config, clock.clone()).unwrap();

        // Several keys admitted moments ago
        for i in 0..5 {
            let key = format!("user{}", i);
            assert!(limiter.record(key));
            clock.advance(0.01);
        }

        let initial_count = limiter.tracked_keys();
        limiter.purge_stale();
        assert_eq!(limiter.tracked_keys(), initial_count);
    }

    #[test]
    fn throttle_purge_is_behavior_preserving() {
        let clock = TestClock::new(0.0);
        let config = ThrottleConfig::new(Duration::from_secs(10));
        let throttle = IntervalThrottle::with_config(config, clock.clone()).unwrap();

        assert!(throttle.record("user1"));
        clock.set_time(6.0);
        assert!(throttle.record("user2"));

        // At t=12, user1 (12s ago) is eligible again and purgeable;
        // user2 (6s ago) is still inside its interval and must stay
        clock.set_time(12.0);
        throttle.purge_stale();
        assert_eq!(throttle.tracked_keys(), 1);

        // Decisions are unchanged by the purge
        assert!(throttle.record("user1"));
        assert!(!throttle.record("user2"));
        assert_eq!(
            throttle.time_until_next_allowed(&"user2"),
            Duration::from_secs(4)
        );
    }

    #[test]
    fn throttle_state_persists_until_purged() {
        let clock = TestClock::new(0.0);
        let config = ThrottleConfig::new(Duration::from_secs(10));
        let throttle = IntervalThrottle::with_config(config, clock.clone()).unwrap();

        assert!(throttle.record("user1"));

        // Read-only queries keep the last-seen timestamp around
        clock.set_time(1000.0);
        assert!(throttle.can_send(&"user1"));
        assert_eq!(throttle.tracked_keys(), 1);

        throttle.purge_stale();
        assert_eq!(throttle.tracked_keys(), 0);

        // A purged key behaves exactly like a fresh one
        assert!(throttle.record("user1"));
    }
}
