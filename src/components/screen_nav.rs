use yew::prelude::*;

use crate::screen::ScreenKind;

#[derive(Properties, PartialEq, Clone)]
pub struct ScreenNavProps {
    pub current: ScreenKind,
    pub on_select: Callback<ScreenKind>,
}

#[function_component]
pub fn ScreenNav(props: &ScreenNavProps) -> Html {
    let buttons = ScreenKind::ALL.iter().map(|&kind| {
        let cb = props.on_select.clone();
        let onclick = Callback::from(move |_| cb.emit(kind));
        let style = if kind == props.current {
            "padding:6px 14px; background:#1f6feb; border:1px solid #388bfd; color:#fff; border-radius:6px;"
        } else {
            "padding:6px 14px; background:#21262d; border:1px solid #30363d; color:#c9d1d9; border-radius:6px;"
        };
        html! { <button onclick={onclick} style={style}>{ kind.title() }</button> }
    });
    html! {<div id="top-bar" style="height:48px; box-sizing:border-box; display:flex; align-items:center; justify-content:center; gap:8px; background:#161b22; border-bottom:1px solid #30363d;">
        { for buttons }
    </div>}
}
