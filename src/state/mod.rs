pub mod root;
pub mod surface;
pub mod touch;

pub use root::RootRecognizer;
pub use surface::SurfaceRecognizer;
pub use touch::{GestureTarget, Owner, PointerFrame, TouchState};
