// Raw pointer input and routing between the image and the root view
use crate::gesture::GestureEvent;
use crate::transform::Point;

/// Snapshot of every active pointer, in root-view coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerFrame {
    pub t_ms: f64,
    pub touches: Vec<Point>,
}

impl PointerFrame {
    pub fn new(t_ms: f64, touches: Vec<Point>) -> Self {
        Self { t_ms, touches }
    }

    pub fn single(t_ms: f64, x: f64, y: f64) -> Self {
        Self::new(t_ms, vec![Point::new(x, y)])
    }

    pub fn released(t_ms: f64) -> Self {
        Self::new(t_ms, Vec::new())
    }

    pub fn count(&self) -> usize {
        self.touches.len()
    }

    pub fn first(&self) -> Option<Point> {
        self.touches.first().copied()
    }

    /// (midpoint, distance, angle) of the first two pointers.
    pub fn pair(&self) -> Option<(Point, f64, f64)> {
        match self.touches.as_slice() {
            [a, b, ..] => Some((a.midpoint(*b), a.distance(*b), a.to(*b).angle())),
            _ => None,
        }
    }
}

/// Receives recognized gestures. Carried deltas may be consumed in place;
/// whatever is left is kept by the recognizer for the next report.
pub trait GestureTarget {
    fn on_gesture(&mut self, event: &mut GestureEvent);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Surface,
    Root,
}

/// Which recognizer owns the current interaction.
#[derive(Default, Debug, Clone)]
pub struct TouchState {
    pub owner: Option<Owner>,
    pub mouse_down: bool,
}

impl TouchState {
    /// Claims the interaction on the first pointer down; later downs keep the owner.
    pub fn begin(&mut self, on_surface: bool) -> Owner {
        *self.owner.get_or_insert(if on_surface {
            Owner::Surface
        } else {
            Owner::Root
        })
    }

    pub fn end(&mut self) {
        self.owner = None;
        self.mouse_down = false;
    }
}
