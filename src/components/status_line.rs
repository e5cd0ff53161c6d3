use yew::prelude::*;

use crate::model::VariableBindings;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusLineProps {
    pub submitting: bool,
    pub error: Option<String>,
    pub bindings: VariableBindings,
    pub on_dismiss: Callback<()>,
}

#[function_component]
pub fn StatusLine(props: &StatusLineProps) -> Html {
    let dismiss_cb = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let vars = props
        .bindings
        .iter()
        .map(|(k, v)| format!("{k} = {v}"))
        .collect::<Vec<_>>()
        .join(", ");
    html! {<div style="position:absolute; bottom:12px; left:12px; z-index:20; display:flex; flex-direction:column; gap:6px; font-size:12px; color:#c9d1d9;">
        { if props.submitting { html!{ <div style="opacity:0.8;">{"Recognising drawing..."}</div> } } else { html!{} } }
        { if let Some(err) = &props.error {
            html!{ <div style="background:#3d1214; border:1px solid #b62324; padding:4px 8px; border-radius:6px; display:flex; gap:8px; align-items:center;">
                <span>{ err.clone() }</span>
                <button onclick={dismiss_cb} style="padding:0 6px;">{"x"}</button>
            </div> }
        } else { html!{} } }
        { if !vars.is_empty() { html!{ <div style="opacity:0.7;">{ format!("Variables: {vars}") }</div> } } else { html!{} } }
    </div>}
}
