use super::{gesture_screen::GestureScreen, screen_nav::ScreenNav};
use crate::config::GestureConfig;
use crate::screen::ScreenKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: GestureConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let current = use_state(|| ScreenKind::First);

    let on_select = {
        let current = current.clone();
        Callback::from(move |kind: ScreenKind| {
            tracing::debug!(screen = kind.title(), "switch screen");
            current.set(kind);
        })
    };

    // Both screens stay mounted so each keeps its own image, transform and tap count.
    let screens = ScreenKind::ALL.iter().map(|&kind| {
        html! {
            <GestureScreen
                key={kind.title()}
                kind={kind}
                config={props.config.clone()}
                visible={kind == *current}
            />
        }
    });

    html! {
        <div id="root" style="width:100vw; height:100vh; margin:0; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <ScreenNav current={*current} on_select={on_select} />
            { for screens }
        </div>
    }
}
