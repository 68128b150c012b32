// Recognizers attached to the root view: vertical swipes and right-edge pan
use crate::config::GestureConfig;
use crate::gesture::{GestureEvent, ScreenEdgePanGesture};
use crate::transform::Point;

use super::touch::{GestureTarget, PointerFrame};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Tracking {
        start: Point,
        start_ms: f64,
        last: Point,
        from_edge: bool,
    },
    Spent,
}

pub struct RootRecognizer {
    cfg: GestureConfig,
    width: f64,
    phase: Phase,
}

impl RootRecognizer {
    pub fn new(cfg: GestureConfig, width: f64) -> Self {
        Self {
            cfg,
            width,
            phase: Phase::Idle,
        }
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    fn in_right_edge(&self, p: Point) -> bool {
        self.width > 0.0 && p.x >= self.width - self.cfg.edge_band_px
    }

    /// Forgets a stroke in progress; nothing is reported for it.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn frame(&mut self, frame: &PointerFrame, target: &mut dyn GestureTarget) {
        if frame.count() == 0 {
            self.release(frame.t_ms, target);
            return;
        }
        if frame.count() > 1 {
            self.phase = Phase::Spent;
            return;
        }
        let Some(p) = frame.first() else { return };
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Tracking {
                    start: p,
                    start_ms: frame.t_ms,
                    last: p,
                    from_edge: self.in_right_edge(p),
                };
            }
            Phase::Tracking {
                start,
                start_ms,
                last,
                from_edge,
            } => {
                if p == last {
                    return;
                }
                self.phase = Phase::Tracking {
                    start,
                    start_ms,
                    last: p,
                    from_edge,
                };
                if from_edge {
                    target.on_gesture(&mut GestureEvent::ScreenEdgePan(ScreenEdgePanGesture {
                        location: p,
                    }));
                }
            }
            Phase::Spent => {}
        }
    }

    fn release(&mut self, t_ms: f64, target: &mut dyn GestureTarget) {
        if let Phase::Tracking {
            start,
            start_ms,
            last,
            from_edge: false,
        } = self.phase
        {
            let travel = start.to(last);
            let quick = t_ms - start_ms <= self.cfg.swipe_max_ms;
            let far = travel.dy.abs() >= self.cfg.swipe_min_distance_px;
            let vertical = travel.dy.abs() >= self.cfg.swipe_axis_dominance * travel.dx.abs();
            if quick && far && vertical {
                let mut ev = if travel.dy < 0.0 {
                    GestureEvent::SwipeUp
                } else {
                    GestureEvent::SwipeDown
                };
                target.on_gesture(&mut ev);
            }
        }
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Gesture;

    #[derive(Default)]
    struct Recording(Vec<GestureEvent>);

    impl GestureTarget for Recording {
        fn on_gesture(&mut self, event: &mut GestureEvent) {
            self.0.push(*event);
        }
    }

    fn recognizer() -> RootRecognizer {
        RootRecognizer::new(GestureConfig::default(), 400.0)
    }

    fn drag(r: &mut RootRecognizer, out: &mut Recording, pts: &[(f64, f64, f64)], end_ms: f64) {
        for &(t, x, y) in pts {
            r.frame(&PointerFrame::single(t, x, y), out);
        }
        r.frame(&PointerFrame::released(end_ms), out);
    }

    #[test]
    fn fast_upward_stroke_is_swipe_up() {
        let mut r = recognizer();
        let mut out = Recording::default();
        drag(&mut r, &mut out, &[(0.0, 200.0, 500.0), (100.0, 210.0, 380.0)], 150.0);
        assert_eq!(out.0, [GestureEvent::SwipeUp]);
    }

    #[test]
    fn fast_downward_stroke_is_swipe_down() {
        let mut r = recognizer();
        let mut out = Recording::default();
        drag(&mut r, &mut out, &[(0.0, 200.0, 100.0), (80.0, 190.0, 260.0)], 120.0);
        assert_eq!(out.0, [GestureEvent::SwipeDown]);
    }

    #[test]
    fn slow_short_or_diagonal_strokes_are_not_swipes() {
        let mut r = recognizer();
        let mut out = Recording::default();
        // too slow
        drag(&mut r, &mut out, &[(0.0, 200.0, 500.0), (400.0, 200.0, 300.0)], 700.0);
        // too short
        drag(&mut r, &mut out, &[(0.0, 200.0, 500.0), (50.0, 200.0, 450.0)], 80.0);
        // too diagonal
        drag(&mut r, &mut out, &[(0.0, 100.0, 500.0), (50.0, 220.0, 380.0)], 80.0);
        assert!(out.0.is_empty());
    }

    #[test]
    fn right_edge_drag_reports_each_location() {
        let mut r = recognizer();
        let mut out = Recording::default();
        drag(
            &mut r,
            &mut out,
            &[(0.0, 395.0, 300.0), (16.0, 300.0, 300.0), (32.0, 100.0, 302.0)],
            48.0,
        );
        let xs: Vec<f64> = out
            .0
            .iter()
            .map(|e| match e {
                GestureEvent::ScreenEdgePan(g) => g.location.x,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(xs, [300.0, 100.0]);
    }

    #[test]
    fn edge_drag_never_becomes_swipe() {
        let mut r = recognizer();
        let mut out = Recording::default();
        drag(&mut r, &mut out, &[(0.0, 390.0, 500.0), (50.0, 390.0, 300.0)], 80.0);
        assert!(out.0.iter().all(|e| e.gesture() == Gesture::ScreenEdgePan));
    }

    #[test]
    fn second_finger_cancels_tracking() {
        let mut r = recognizer();
        let mut out = Recording::default();
        r.frame(&PointerFrame::single(0.0, 200.0, 500.0), &mut out);
        r.frame(
            &PointerFrame::new(10.0, vec![Point::new(200.0, 500.0), Point::new(100.0, 100.0)]),
            &mut out,
        );
        r.frame(&PointerFrame::single(30.0, 200.0, 300.0), &mut out);
        r.frame(&PointerFrame::released(60.0), &mut out);
        assert!(out.0.is_empty());
    }

    #[test]
    fn cancelled_stroke_reports_nothing_and_next_stroke_is_fresh() {
        let mut r = recognizer();
        let mut out = Recording::default();
        r.frame(&PointerFrame::single(0.0, 200.0, 500.0), &mut out);
        r.frame(&PointerFrame::single(100.0, 205.0, 380.0), &mut out);
        r.cancel();
        r.frame(&PointerFrame::released(150.0), &mut out);
        assert!(out.0.is_empty());
        drag(&mut r, &mut out, &[(200.0, 200.0, 100.0), (280.0, 195.0, 260.0)], 320.0);
        assert_eq!(out.0, [GestureEvent::SwipeDown]);
    }
}
