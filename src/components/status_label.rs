use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusLabelProps {
    pub text: String,
}

#[function_component]
pub fn StatusLabel(props: &StatusLabelProps) -> Html {
    // keep the box height when empty so the layout doesn't jump on the first gesture
    let text = if props.text.is_empty() {
        "\u{00a0}".to_string()
    } else {
        props.text.clone()
    };
    html! {<div style="position:absolute; left:50%; bottom:24px; transform:translateX(-50%); background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 14px; min-width:220px; text-align:center; font-size:16px; font-weight:600; pointer-events:none;">
        { text }
    </div>}
}
