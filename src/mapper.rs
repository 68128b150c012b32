//! Gesture-to-transform mapper: the state behind one gesture screen.

use crate::gesture::{
    status_text, Gesture, GestureEvent, PanGesture, PinchGesture, RotationGesture,
    ScreenEdgePanGesture,
};
use crate::images::{
    image_filename, tap_category, RandomSource, LONG_PRESS_CATEGORY, SWIPE_DOWN_CATEGORY,
    SWIPE_UP_CATEGORY,
};
use crate::state::GestureTarget;
use crate::transform::{Affine, Point};

/// The image view: what is shown and how it is placed.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplaySurface {
    pub image: Option<String>,
    pub transform: Affine,
    pub center: Point,
}

impl DisplaySurface {
    pub fn new(center: Point) -> Self {
        Self {
            image: None,
            transform: Affine::IDENTITY,
            center,
        }
    }
}

/// The root view the image sits in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    pub width: f64,
    /// Always within `0.0..=1.0`.
    pub opacity: f64,
}

impl Container {
    pub fn new(width: f64) -> Self {
        Self { width, opacity: 1.0 }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusText {
    last: Option<Gesture>,
    text: String,
}

impl StatusText {
    pub fn set(&mut self, gesture: Option<Gesture>) {
        self.last = gesture;
        self.text = status_text(gesture);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last(&self) -> Option<Gesture> {
        self.last
    }
}

pub struct GestureMapper<R> {
    surface: DisplaySurface,
    container: Container,
    status: StatusText,
    tap_counter: u64,
    last_category: Option<&'static str>,
    rng: R,
}

impl<R: RandomSource> GestureMapper<R> {
    pub fn new(rng: R, center: Point, container_width: f64) -> Self {
        Self {
            surface: DisplaySurface::new(center),
            container: Container::new(container_width),
            status: StatusText::default(),
            tap_counter: 0,
            last_category: None,
            rng,
        }
    }

    pub fn surface(&self) -> &DisplaySurface {
        &self.surface
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn status(&self) -> &StatusText {
        &self.status
    }

    pub fn tap_counter(&self) -> u64 {
        self.tap_counter
    }

    pub fn last_category(&self) -> Option<&'static str> {
        self.last_category
    }

    /// Layout changes from the host view; gesture state is untouched.
    pub fn resize(&mut self, container_width: f64) {
        self.container.width = container_width;
    }

    pub fn set_center(&mut self, center: Point) {
        self.surface.center = center;
    }

    /// Picks the first image without reporting a gesture.
    pub fn prime(&mut self, category: &'static str) {
        self.show_random(category);
    }

    fn show_random(&mut self, category: &'static str) {
        let filename = image_filename(category, &mut self.rng);
        tracing::info!(%filename, "new image");
        self.last_category = Some(category);
        self.surface.image = Some(filename);
    }

    fn report(&mut self, gesture: Gesture) {
        tracing::debug!(gesture = gesture.display_name(), "gesture handled");
        self.status.set(Some(gesture));
    }

    pub fn tap(&mut self) {
        self.tap_counter += 1;
        self.surface.transform = Affine::IDENTITY;
        self.show_random(tap_category(self.tap_counter));
        self.report(Gesture::Tap);
    }

    pub fn pinch(&mut self, gesture: &mut PinchGesture) {
        let s = gesture.consume();
        self.surface.transform = self.surface.transform.scaled_by(s, s);
        self.report(Gesture::Pinch);
    }

    pub fn pan(&mut self, gesture: &mut PanGesture) {
        let delta = gesture.consume();
        self.surface.center = self.surface.center.offset(delta);
        self.report(Gesture::Pan);
    }

    pub fn rotation(&mut self, gesture: &mut RotationGesture) {
        let angle = gesture.consume();
        self.surface.transform = self.surface.transform.rotated_by(angle);
        self.report(Gesture::Rotation);
    }

    pub fn screen_edge_pan(&mut self, gesture: &ScreenEdgePanGesture) {
        if self.container.width > 0.0 {
            let ratio = gesture.location.x / self.container.width;
            self.container.opacity = ratio.clamp(0.0, 1.0);
        }
        self.report(Gesture::ScreenEdgePan);
    }

    pub fn swipe_up(&mut self) {
        self.show_random(SWIPE_UP_CATEGORY);
        self.report(Gesture::SwipeUp);
    }

    pub fn swipe_down(&mut self) {
        self.show_random(SWIPE_DOWN_CATEGORY);
        self.report(Gesture::SwipeDown);
    }

    pub fn long_press(&mut self) {
        self.surface.transform = Affine::IDENTITY;
        self.show_random(LONG_PRESS_CATEGORY);
        self.report(Gesture::LongPress);
    }

    /// Dispatches a recognized gesture; carried deltas are consumed in place.
    pub fn handle(&mut self, event: &mut GestureEvent) {
        match event {
            GestureEvent::Tap => self.tap(),
            GestureEvent::Pinch(g) => self.pinch(g),
            GestureEvent::Pan(g) => self.pan(g),
            GestureEvent::ScreenEdgePan(g) => self.screen_edge_pan(g),
            GestureEvent::Rotation(g) => self.rotation(g),
            GestureEvent::SwipeUp => self.swipe_up(),
            GestureEvent::SwipeDown => self.swipe_down(),
            GestureEvent::LongPress => self.long_press(),
        }
    }
}

impl<R: RandomSource> GestureTarget for GestureMapper<R> {
    fn on_gesture(&mut self, event: &mut GestureEvent) {
        self.handle(event);
    }
}
