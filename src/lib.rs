//! Gesture playground: an image view driven by tap, pinch, pan, rotation,
//! swipe, long-press and screen-edge-pan gestures.

pub mod components;
pub mod config;
pub mod error;
pub mod gesture;
pub mod images;
pub mod logging;
pub mod mapper;
pub mod screen;
pub mod state;
pub mod transform;
