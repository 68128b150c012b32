use gesture_playground::components::app::{App, AppProps};
use gesture_playground::config::GestureConfig;
use gesture_playground::logging;

fn main() {
    let loaded = GestureConfig::from_storage();
    let level = loaded
        .as_ref()
        .ok()
        .and_then(GestureConfig::level)
        .unwrap_or(tracing::Level::INFO);
    logging::init(level);
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "using default gesture config");
        GestureConfig::default()
    });
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
