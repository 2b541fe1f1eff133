// Single-contact swipe recognizer: idle -> tracking -> resolved (back to idle).
use crate::model::{Bounds, GestureConfig, GestureResult, SwipeDirection, TouchSample};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Tracking { start: TouchSample },
}

type Listener = Box<dyn FnMut(&GestureResult)>;

pub struct SwipeRecognizer {
    config: GestureConfig,
    phase: Phase,
    last: GestureResult,
    listeners: Vec<Listener>,
}

impl SwipeRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            last: GestureResult::none(),
            listeners: Vec::new(),
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::Tracking { .. })
    }

    /// Result of the most recently resolved gesture; reset when a new start is accepted.
    pub fn last_result(&self) -> GestureResult {
        self.last
    }

    /// Registers a listener run once per resolved gesture.
    pub fn subscribe(&mut self, listener: impl FnMut(&GestureResult) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Buffers `sample` as the gesture start unless the start region rejects it.
    /// A later start overwrites an unresolved one.
    pub fn on_touch_start(&mut self, sample: TouchSample, bounds: Option<Bounds>) {
        if let (Some(region), Some(b)) = (self.config.start_region.as_ref(), bounds.as_ref()) {
            let rel_x = sample.x - b.left;
            let rel_y = sample.y - b.top;
            if !region.contains(rel_x, rel_y, b) {
                log::debug!("swipe start rejected at ({rel_x}, {rel_y})");
                // Rejected start also drops any earlier unresolved start.
                self.phase = Phase::Idle;
                return;
            }
        }
        self.last = GestureResult::none();
        self.phase = Phase::Tracking { start: sample };
    }

    /// Resolves the buffered start against `sample`. Without one, returns `none` and notifies nobody.
    pub fn on_touch_end(&mut self, sample: TouchSample) -> GestureResult {
        let start = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Tracking { start } => start,
            Phase::Idle => return GestureResult::none(),
        };
        let result = classify(&self.config, &start, &sample);
        log::debug!(
            "swipe resolved: {} (dx={}, dy={}, elapsed={}ms)",
            result.direction.label(),
            sample.x - start.x,
            sample.y - start.y,
            elapsed_millis(&start, &sample)
        );
        self.last = result;
        for listener in self.listeners.iter_mut() {
            listener(&result);
        }
        result
    }
}

fn elapsed_millis(start: &TouchSample, end: &TouchSample) -> i64 {
    end.timestamp_millis.saturating_sub(start.timestamp_millis)
}

/// Vertical is checked before horizontal, so a motion qualifying on both axes is vertical.
pub fn classify(config: &GestureConfig, start: &TouchSample, end: &TouchSample) -> GestureResult {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if elapsed_millis(start, end) > config.max_duration_millis {
        return GestureResult::none();
    }
    if dy.abs() >= config.min_distance && dx.abs() <= config.cross_axis_tolerance {
        let dir = if dy < 0.0 { SwipeDirection::Up } else { SwipeDirection::Down };
        return GestureResult::swipe(dir);
    }
    if dx.abs() >= config.min_distance && dy.abs() <= config.cross_axis_tolerance {
        let dir = if dx < 0.0 { SwipeDirection::Left } else { SwipeDirection::Right };
        return GestureResult::swipe(dir);
    }
    GestureResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StartRegion;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn at(x: f64, y: f64, t: i64) -> TouchSample {
        TouchSample::new(x, y, t)
    }

    fn swipe(r: &mut SwipeRecognizer, from: TouchSample, to: TouchSample) -> GestureResult {
        r.on_touch_start(from, None);
        r.on_touch_end(to)
    }

    #[test]
    fn short_upward_motion_is_up() {
        let mut r = SwipeRecognizer::new(GestureConfig::default());
        let res = swipe(&mut r, at(100.0, 100.0, 0), at(100.0, 40.0, 150));
        assert_eq!(res, GestureResult::swipe(SwipeDirection::Up));
        assert!(!r.is_tracking());
    }

    #[test]
    fn slow_motion_is_ignored() {
        let mut r = SwipeRecognizer::new(GestureConfig::default());
        let res = swipe(&mut r, at(100.0, 100.0, 0), at(170.0, 100.0, 500));
        assert_eq!(res, GestureResult::none());
    }

    #[test]
    fn elapsed_exactly_at_limit_still_counts() {
        let mut r = SwipeRecognizer::new(GestureConfig::default());
        let res = swipe(&mut r, at(0.0, 0.0, 1_000), at(-60.0, 0.0, 1_300));
        assert_eq!(res.direction, SwipeDirection::Left);
    }

    #[test]
    fn each_direction() {
        let mut r = SwipeRecognizer::new(GestureConfig::default());
        let o = at(200.0, 200.0, 0);
        assert_eq!(swipe(&mut r, o, at(200.0, 260.0, 10)).direction, SwipeDirection::Down);
        assert_eq!(swipe(&mut r, o, at(140.0, 200.0, 10)).direction, SwipeDirection::Left);
        assert_eq!(swipe(&mut r, o, at(260.0, 200.0, 10)).direction, SwipeDirection::Right);
        assert_eq!(swipe(&mut r, o, at(200.0, 140.0, 10)).direction, SwipeDirection::Up);
    }

    #[test]
    fn diagonal_prefers_vertical() {
        let mut r = SwipeRecognizer::new(GestureConfig::default());
        let res = swipe(&mut r, at(0.0, 0.0, 0), at(80.0, 80.0, 100));
        assert_eq!(res.direction, SwipeDirection::Down);
    }

    #[test]
    fn distance_threshold_is_inclusive() {
        let cfg = GestureConfig::default();
        let o = at(0.0, 0.0, 0);
        assert_eq!(classify(&cfg, &o, &at(0.0, -50.0, 10)).direction, SwipeDirection::Up);
        assert_eq!(classify(&cfg, &o, &at(0.0, 49.999, 10)), GestureResult::none());
        assert_eq!(classify(&cfg, &o, &at(-50.0, 0.0, 10)).direction, SwipeDirection::Left);
    }

    #[test]
    fn cross_axis_tolerance_is_inclusive() {
        let cfg = GestureConfig::default();
        let o = at(0.0, 0.0, 0);
        assert_eq!(classify(&cfg, &o, &at(100.0, 50.0, 10)).direction, SwipeDirection::Down);
        // Both axes qualify here, vertical still wins.
        assert_eq!(classify(&cfg, &o, &at(50.0, 100.0, 10)).direction, SwipeDirection::Down);
        assert_eq!(classify(&cfg, &o, &at(150.0, 100.0, 10)).direction, SwipeDirection::Right);
        assert_eq!(classify(&cfg, &o, &at(150.0, 100.001, 10)), GestureResult::none());

        // Tight tolerance: vertical fails on distance, horizontal passes exactly at the limit.
        let tight = GestureConfig { cross_axis_tolerance: 30.0, ..Default::default() };
        assert_eq!(classify(&tight, &o, &at(50.0, 30.0, 10)).direction, SwipeDirection::Right);
        assert_eq!(classify(&tight, &o, &at(50.0, 30.001, 10)), GestureResult::none());
    }

    #[test]
    fn extreme_timestamps_do_not_panic_with_debug_logging() {
        log::set_max_level(log::LevelFilter::Debug);
        let mut r = SwipeRecognizer::new(GestureConfig::default());
        r.on_touch_start(at(0.0, 0.0, i64::MIN), None);
        assert_eq!(r.on_touch_end(at(0.0, -80.0, 0)), GestureResult::none());
        r.on_touch_start(at(0.0, 0.0, i64::MAX), None);
        assert_eq!(r.on_touch_end(at(0.0, -80.0, i64::MIN)).direction, SwipeDirection::Up);
    }

    #[test]
    fn too_much_cross_travel_is_none() {
        let mut r = SwipeRecognizer::new(GestureConfig::default());
        let res = swipe(&mut r, at(0.0, 0.0, 0), at(150.0, 120.0, 100));
        assert_eq!(res, GestureResult::none());
    }

    #[test]
    fn end_without_start_is_noop() {
        let hits = Rc::new(RefCell::new(0));
        let mut r = SwipeRecognizer::new(GestureConfig::default());
        let h = hits.clone();
        r.subscribe(move |_| *h.borrow_mut() += 1);
        assert_eq!(r.on_touch_end(at(0.0, 100.0, 10)), GestureResult::none());
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn start_is_consumed_once() {
        let mut r = SwipeRecognizer::new(GestureConfig::default());
        r.on_touch_start(at(0.0, 0.0, 0), None);
        assert!(r.on_touch_end(at(0.0, 80.0, 50)).detected);
        assert_eq!(r.on_touch_end(at(0.0, 160.0, 60)), GestureResult::none());
        assert_eq!(r.last_result().direction, SwipeDirection::Down);
    }

    #[test]
    fn second_start_overwrites_first() {
        let mut r = SwipeRecognizer::new(GestureConfig::default());
        r.on_touch_start(at(0.0, 0.0, 0), None);
        r.on_touch_start(at(0.0, 200.0, 100), None);
        let res = r.on_touch_end(at(0.0, 120.0, 200));
        assert_eq!(res.direction, SwipeDirection::Up);
    }

    #[test]
    fn accepted_start_clears_last_result() {
        let mut r = SwipeRecognizer::new(GestureConfig::default());
        swipe(&mut r, at(0.0, 0.0, 0), at(90.0, 0.0, 10));
        assert!(r.last_result().detected);
        r.on_touch_start(at(0.0, 0.0, 20), None);
        assert_eq!(r.last_result(), GestureResult::none());
    }

    #[test]
    fn start_region_gates_on_surface_position() {
        let cfg = GestureConfig {
            start_region: Some(StartRegion { left: Some(10.0), right: Some(10.0), ..Default::default() }),
            ..Default::default()
        };
        let bounds = Some(Bounds { left: 50.0, top: 20.0, width: 300.0, height: 400.0 });
        let mut r = SwipeRecognizer::new(cfg);

        r.on_touch_start(at(55.0, 100.0, 0), bounds);
        assert!(!r.is_tracking());
        assert_eq!(r.on_touch_end(at(55.0, 20.0, 50)), GestureResult::none());

        r.on_touch_start(at(345.0, 100.0, 0), bounds);
        assert!(!r.is_tracking());

        r.on_touch_start(at(200.0, 100.0, 0), bounds);
        assert!(r.is_tracking());
        assert_eq!(r.on_touch_end(at(200.0, 20.0, 50)).direction, SwipeDirection::Up);
    }

    #[test]
    fn rejected_start_drops_pending_start() {
        let cfg = GestureConfig {
            start_region: Some(StartRegion { top: Some(50.0), ..Default::default() }),
            ..Default::default()
        };
        let bounds = Some(Bounds { left: 0.0, top: 0.0, width: 300.0, height: 400.0 });
        let mut r = SwipeRecognizer::new(cfg);
        r.on_touch_start(at(100.0, 200.0, 0), bounds);
        assert!(r.is_tracking());
        r.on_touch_start(at(100.0, 10.0, 20), bounds);
        assert!(!r.is_tracking());
        assert_eq!(r.on_touch_end(at(100.0, 100.0, 60)), GestureResult::none());
    }

    #[test]
    fn start_region_ignored_without_bounds() {
        let cfg = GestureConfig {
            start_region: Some(StartRegion { top: Some(1_000.0), ..Default::default() }),
            ..Default::default()
        };
        let mut r = SwipeRecognizer::new(cfg);
        r.on_touch_start(at(0.0, 0.0, 0), None);
        assert!(r.is_tracking());
    }

    #[test]
    fn listeners_see_every_resolved_gesture() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut r = SwipeRecognizer::new(GestureConfig::default());
        let s = seen.clone();
        r.subscribe(move |res| s.borrow_mut().push(res.direction));
        swipe(&mut r, at(0.0, 0.0, 0), at(0.0, -70.0, 10));
        swipe(&mut r, at(0.0, 0.0, 0), at(5.0, 5.0, 10));
        assert_eq!(*seen.borrow(), vec![SwipeDirection::Up, SwipeDirection::None]);
    }

    proptest! {
        #[test]
        fn qualifying_vertical_motion_is_vertical(
            dy in 50.0f64..1_000.0,
            dx in -100.0f64..=100.0,
            up in any::<bool>(),
            elapsed in 0i64..=300,
        ) {
            let cfg = GestureConfig::default();
            let dy = if up { -dy } else { dy };
            let res = classify(&cfg, &at(0.0, 0.0, 0), &at(dx, dy, elapsed));
            let want = if up { SwipeDirection::Up } else { SwipeDirection::Down };
            prop_assert_eq!(res, GestureResult::swipe(want));
        }

        #[test]
        fn qualifying_horizontal_motion_is_horizontal(
            dx in 50.0f64..1_000.0,
            dy in -49.0f64..49.0,
            left in any::<bool>(),
            elapsed in 0i64..=300,
        ) {
            let cfg = GestureConfig::default();
            let dx = if left { -dx } else { dx };
            let res = classify(&cfg, &at(0.0, 0.0, 0), &at(dx, dy, elapsed));
            let want = if left { SwipeDirection::Left } else { SwipeDirection::Right };
            prop_assert_eq!(res, GestureResult::swipe(want));
        }

        #[test]
        fn both_axes_qualifying_resolves_vertical(
            dx in 50.0f64..=100.0,
            dy in 50.0f64..=100.0,
            sx in any::<bool>(),
            sy in any::<bool>(),
        ) {
            let cfg = GestureConfig::default();
            let dx = if sx { -dx } else { dx };
            let dy = if sy { -dy } else { dy };
            let res = classify(&cfg, &at(0.0, 0.0, 0), &at(dx, dy, 100));
            prop_assert!(matches!(res.direction, SwipeDirection::Up | SwipeDirection::Down));
        }

        #[test]
        fn overtime_is_never_detected(
            dx in -1_000.0f64..1_000.0,
            dy in -1_000.0f64..1_000.0,
            elapsed in 301i64..100_000,
        ) {
            let res = classify(&GestureConfig::default(), &at(0.0, 0.0, 0), &at(dx, dy, elapsed));
            prop_assert_eq!(res, GestureResult::none());
        }
    }
}
