pub mod app;
pub mod gesture_screen;
pub mod screen_nav;
pub mod status_label;

pub use app::App;
