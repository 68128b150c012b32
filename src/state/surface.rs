// Recognizers attached to the image: tap, long-press, pan, pinch, rotation
use std::f64::consts::PI;

use crate::config::GestureConfig;
use crate::gesture::{GestureEvent, PanGesture, PinchGesture, RotationGesture};
use crate::transform::Point;

use super::touch::{GestureTarget, PointerFrame};

// Two-finger movement needed before pinch or rotation takes over.
const PINCH_START_RATIO: f64 = 0.05;
const ROTATION_START_RAD: f64 = 0.08;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TwoFingerMode {
    Undecided,
    Pinch,
    Rotation,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Pressing {
        start: Point,
        start_ms: f64,
        /// Pointer stayed within tap slop so far.
        still: bool,
        long_fired: bool,
    },
    Panning {
        last: Point,
    },
    TwoFinger {
        mode: TwoFingerMode,
        /// Distance and angle at the last applied report (or at touch down).
        dist: f64,
        angle: f64,
    },
    /// Nothing more to recognize until every pointer is up.
    Spent,
}

/// Smallest signed difference between two angles.
fn angle_delta(from: f64, to: f64) -> f64 {
    let mut d = (to - from) % (2.0 * PI);
    if d > PI {
        d -= 2.0 * PI;
    } else if d <= -PI {
        d += 2.0 * PI;
    }
    d
}

pub struct SurfaceRecognizer {
    cfg: GestureConfig,
    phase: Phase,
    pinch: PinchGesture,
    pan: PanGesture,
    rotation: RotationGesture,
}

impl SurfaceRecognizer {
    pub fn new(cfg: GestureConfig) -> Self {
        Self {
            cfg,
            phase: Phase::Idle,
            pinch: PinchGesture::default(),
            pan: PanGesture::default(),
            rotation: RotationGesture::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Carried pinch scale not yet consumed by a target.
    pub fn pending_scale(&self) -> f64 {
        self.pinch.scale
    }

    fn reset_deltas(&mut self) {
        self.pinch = PinchGesture::default();
        self.pan = PanGesture::default();
        self.rotation = RotationGesture::default();
    }

    fn emit_pinch(&mut self, target: &mut dyn GestureTarget) {
        let mut ev = GestureEvent::Pinch(self.pinch);
        target.on_gesture(&mut ev);
        if let GestureEvent::Pinch(g) = ev {
            self.pinch = g;
        }
    }

    fn emit_pan(&mut self, target: &mut dyn GestureTarget) {
        let mut ev = GestureEvent::Pan(self.pan);
        target.on_gesture(&mut ev);
        if let GestureEvent::Pan(g) = ev {
            self.pan = g;
        }
    }

    fn emit_rotation(&mut self, target: &mut dyn GestureTarget) {
        let mut ev = GestureEvent::Rotation(self.rotation);
        target.on_gesture(&mut ev);
        if let GestureEvent::Rotation(g) = ev {
            self.rotation = g;
        }
    }

    fn two_finger_phase(frame: &PointerFrame) -> Phase {
        match frame.pair() {
            Some((_, dist, angle)) => Phase::TwoFinger {
                mode: TwoFingerMode::Undecided,
                dist,
                angle,
            },
            None => Phase::Spent,
        }
    }

    /// Feeds a pointer snapshot; recognized gestures are delivered to `target`.
    pub fn frame(&mut self, frame: &PointerFrame, target: &mut dyn GestureTarget) {
        if frame.count() == 0 {
            self.release(frame.t_ms, target);
            return;
        }
        match self.phase {
            Phase::Idle => {
                self.reset_deltas();
                self.phase = match frame.first() {
                    Some(_) if frame.count() >= 2 => Self::two_finger_phase(frame),
                    Some(start) => Phase::Pressing {
                        start,
                        start_ms: frame.t_ms,
                        still: true,
                        long_fired: false,
                    },
                    None => Phase::Idle,
                };
            }
            Phase::Pressing {
                start,
                start_ms,
                still,
                long_fired,
            } => {
                if frame.count() >= 2 {
                    self.phase = if long_fired {
                        Phase::Spent
                    } else {
                        Self::two_finger_phase(frame)
                    };
                    return;
                }
                let Some(p) = frame.first() else { return };
                let moved = start.distance(p);
                if moved > self.cfg.pan_slop_px {
                    if long_fired {
                        self.phase = Phase::Spent;
                    } else {
                        self.pan.accumulate(start.to(p));
                        self.phase = Phase::Panning { last: p };
                        self.emit_pan(target);
                    }
                    return;
                }
                self.phase = Phase::Pressing {
                    start,
                    start_ms,
                    still: still && moved <= self.cfg.tap_slop_px,
                    long_fired,
                };
                self.check_long_press(frame.t_ms, target);
            }
            Phase::Panning { last } => {
                let Some(p) = frame.first() else { return };
                if p != last {
                    self.pan.accumulate(last.to(p));
                    self.phase = Phase::Panning { last: p };
                    self.emit_pan(target);
                }
            }
            Phase::TwoFinger { mode, dist, angle } => {
                let Some((_, new_dist, new_angle)) = frame.pair() else {
                    // Lifting one finger ends pinch/rotation.
                    self.phase = Phase::Spent;
                    return;
                };
                let turn = angle_delta(angle, new_angle);
                let mode = match mode {
                    TwoFingerMode::Undecided if dist > 0.0
                        && (new_dist / dist - 1.0).abs() > PINCH_START_RATIO =>
                    {
                        TwoFingerMode::Pinch
                    }
                    TwoFingerMode::Undecided if turn.abs() > ROTATION_START_RAD => {
                        TwoFingerMode::Rotation
                    }
                    other => other,
                };
                match mode {
                    TwoFingerMode::Undecided => {
                        self.phase = Phase::TwoFinger { mode, dist, angle };
                    }
                    TwoFingerMode::Pinch => {
                        if dist > 0.0 && new_dist != dist {
                            self.pinch.accumulate(new_dist / dist);
                            self.phase = Phase::TwoFinger {
                                mode,
                                dist: new_dist,
                                angle: new_angle,
                            };
                            self.emit_pinch(target);
                        } else {
                            self.phase = Phase::TwoFinger { mode, dist, angle };
                        }
                    }
                    TwoFingerMode::Rotation => {
                        if turn != 0.0 {
                            self.rotation.accumulate(turn);
                            self.phase = Phase::TwoFinger {
                                mode,
                                dist: new_dist,
                                angle: new_angle,
                            };
                            self.emit_rotation(target);
                        } else {
                            self.phase = Phase::TwoFinger { mode, dist, angle };
                        }
                    }
                }
            }
            Phase::Spent => {}
        }
    }

    fn check_long_press(&mut self, now_ms: f64, target: &mut dyn GestureTarget) {
        if let Phase::Pressing {
            start,
            start_ms,
            still: true,
            long_fired: false,
        } = self.phase
        {
            if now_ms - start_ms >= self.cfg.long_press_ms {
                self.phase = Phase::Pressing {
                    start,
                    start_ms,
                    still: true,
                    long_fired: true,
                };
                target.on_gesture(&mut GestureEvent::LongPress);
            }
        }
    }

    /// Timer tick so a held pointer fires long-press without moving.
    pub fn poll(&mut self, now_ms: f64, target: &mut dyn GestureTarget) {
        self.check_long_press(now_ms, target);
    }

    /// Drops an unfinished interaction without reporting anything.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
        self.reset_deltas();
    }

    fn release(&mut self, t_ms: f64, target: &mut dyn GestureTarget) {
        // A long-press the timer has not reported yet still counts.
        self.check_long_press(t_ms, target);
        if let Phase::Pressing {
            start_ms,
            still: true,
            long_fired: false,
            ..
        } = self.phase
        {
            if t_ms - start_ms <= self.cfg.tap_max_ms {
                target.on_gesture(&mut GestureEvent::Tap);
            }
        }
        self.phase = Phase::Idle;
        self.reset_deltas();
    }

    /// Wheel input: plain wheel zooms, shift+wheel rotates. Each notch is
    /// reported on its own, so nothing is carried over to the next one.
    pub fn wheel(&mut self, delta_y: f64, rotate: bool, target: &mut dyn GestureTarget) {
        if delta_y == 0.0 || self.is_active() {
            return;
        }
        if rotate {
            self.rotation = RotationGesture::new(delta_y * self.cfg.wheel_rotation_factor);
            self.emit_rotation(target);
        } else {
            self.pinch = PinchGesture::new((-delta_y * self.cfg.wheel_zoom_factor).exp());
            self.emit_pinch(target);
        }
        self.reset_deltas();
    }
}
