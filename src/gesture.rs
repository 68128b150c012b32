//! Gesture vocabulary shared by the recognizers and the mapper.
//!
//! Continuous gestures (pinch, pan, rotation) carry a delta that grows while
//! the recognizer observes movement and is handed back to neutral by whoever
//! applies it, so each report stays relative to the previous one.

use crate::transform::{Point, Vector};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    Tap,
    Pinch,
    Pan,
    ScreenEdgePan,
    Rotation,
    SwipeUp,
    SwipeDown,
    LongPress,
}

impl Gesture {
    pub const ALL: [Gesture; 8] = [
        Gesture::Tap,
        Gesture::Pinch,
        Gesture::Pan,
        Gesture::ScreenEdgePan,
        Gesture::Rotation,
        Gesture::SwipeUp,
        Gesture::SwipeDown,
        Gesture::LongPress,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Gesture::Tap => "Tap Gesture",
            Gesture::Pinch => "Pinch Gesture",
            Gesture::Pan => "Pan Gesture",
            Gesture::ScreenEdgePan => "Screen Edge Pan Gesture",
            Gesture::Rotation => "Rotation Gesture",
            Gesture::SwipeUp => "Swipe Up Gesture",
            Gesture::SwipeDown => "Swipe Down Gesture",
            Gesture::LongPress => "Long Press Gesture",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Label text for the most recent gesture; empty before any gesture.
pub fn status_text(gesture: Option<Gesture>) -> String {
    match gesture {
        Some(g) => format!("{} detected", g.display_name()),
        None => String::new(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchGesture {
    pub scale: f64,
}

impl Default for PinchGesture {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl PinchGesture {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Folds a further relative scale factor into the carried one.
    pub fn accumulate(&mut self, factor: f64) {
        self.scale *= factor;
    }

    pub fn consume(&mut self) -> f64 {
        std::mem::replace(&mut self.scale, 1.0)
    }

    pub fn is_neutral(&self) -> bool {
        self.scale == 1.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanGesture {
    pub translation: Vector,
}

impl PanGesture {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            translation: Vector::new(dx, dy),
        }
    }

    pub fn accumulate(&mut self, delta: Vector) {
        self.translation = self.translation + delta;
    }

    pub fn consume(&mut self) -> Vector {
        std::mem::replace(&mut self.translation, Vector::ZERO)
    }

    pub fn is_neutral(&self) -> bool {
        self.translation.is_zero()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationGesture {
    /// Radians, positive is clockwise on screen (y grows downwards).
    pub rotation: f64,
}

impl RotationGesture {
    pub fn new(rotation: f64) -> Self {
        Self { rotation }
    }

    pub fn accumulate(&mut self, angle: f64) {
        self.rotation += angle;
    }

    pub fn consume(&mut self) -> f64 {
        std::mem::replace(&mut self.rotation, 0.0)
    }

    pub fn is_neutral(&self) -> bool {
        self.rotation == 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenEdgePanGesture {
    /// Pointer position in the container's coordinate space.
    pub location: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    Tap,
    Pinch(PinchGesture),
    Pan(PanGesture),
    ScreenEdgePan(ScreenEdgePanGesture),
    Rotation(RotationGesture),
    SwipeUp,
    SwipeDown,
    LongPress,
}

impl GestureEvent {
    pub fn gesture(&self) -> Gesture {
        match self {
            GestureEvent::Tap => Gesture::Tap,
            GestureEvent::Pinch(_) => Gesture::Pinch,
            GestureEvent::Pan(_) => Gesture::Pan,
            GestureEvent::ScreenEdgePan(_) => Gesture::ScreenEdgePan,
            GestureEvent::Rotation(_) => Gesture::Rotation,
            GestureEvent::SwipeUp => Gesture::SwipeUp,
            GestureEvent::SwipeDown => Gesture::SwipeDown,
            GestureEvent::LongPress => Gesture::LongPress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_is_empty_without_gesture() {
        assert_eq!(status_text(None), "");
    }

    #[test]
    fn status_text_names_each_gesture() {
        assert_eq!(status_text(Some(Gesture::Tap)), "Tap Gesture detected");
        assert_eq!(
            status_text(Some(Gesture::ScreenEdgePan)),
            "Screen Edge Pan Gesture detected"
        );
        for g in Gesture::ALL {
            let text = status_text(Some(g));
            assert!(text.starts_with(g.display_name()));
            assert!(text.ends_with(" detected"));
        }
    }

    #[test]
    fn display_names_are_distinct() {
        let mut names: Vec<_> = Gesture::ALL.iter().map(|g| g.display_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Gesture::ALL.len());
    }

    #[test]
    fn pinch_accumulates_multiplicatively_and_consumes_to_one() {
        let mut p = PinchGesture::default();
        assert!(p.is_neutral());
        p.accumulate(2.0);
        p.accumulate(1.5);
        assert_eq!(p.scale, 3.0);
        assert_eq!(p.consume(), 3.0);
        assert_eq!(p.scale, 1.0);
    }

    #[test]
    fn pan_and_rotation_consume_to_zero() {
        let mut pan = PanGesture::new(3.0, 4.0);
        pan.accumulate(Vector::new(1.0, 1.0));
        assert_eq!(pan.consume(), Vector::new(4.0, 5.0));
        assert!(pan.is_neutral());

        let mut rot = RotationGesture::new(0.25);
        rot.accumulate(0.25);
        assert_eq!(rot.consume(), 0.5);
        assert!(rot.is_neutral());
    }

    #[test]
    fn event_maps_to_gesture_kind() {
        assert_eq!(GestureEvent::Tap.gesture(), Gesture::Tap);
        assert_eq!(
            GestureEvent::Pinch(PinchGesture::default()).gesture(),
            Gesture::Pinch
        );
        assert_eq!(GestureEvent::LongPress.gesture(), Gesture::LongPress);
    }
}
