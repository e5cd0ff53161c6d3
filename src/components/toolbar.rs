use yew::prelude::*;

use super::swatch::Swatch;
use crate::palette::{SWATCHES, parse_css_color};

#[derive(Properties, PartialEq, Clone)]
pub struct ToolbarProps {
    pub ink_color: String,
    pub busy: bool,
    pub on_reset: Callback<()>,
    pub on_select_color: Callback<String>,
    pub on_calculate: Callback<()>,
}

#[function_component]
pub fn Toolbar(props: &ToolbarProps) -> Html {
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let calculate_cb = {
        let cb = props.on_calculate.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let current = parse_css_color(&props.ink_color);
    let calc_label = if props.busy { "Calculating..." } else { "Calculate" };
    html! {<div id="toolbar" style="position:relative; z-index:20; display:grid; grid-template-columns:repeat(3, 1fr); gap:8px; align-items:center; padding:8px;">
        <button onclick={reset_cb} style="background:#000; color:#fff; border:1px solid #30363d; border-radius:6px; padding:6px 10px; cursor:pointer;">{"Reset"}</button>
        <div style="display:flex; gap:6px; flex-wrap:wrap; justify-content:center;">
            { for SWATCHES.iter().map(|c| html! {
                <Swatch color={*c} selected={current.is_some() && parse_css_color(c) == current} on_pick={props.on_select_color.clone()} />
            }) }
        </div>
        <button onclick={calculate_cb} disabled={props.busy} style="background:#000; color:#fff; border:1px solid #30363d; border-radius:6px; padding:6px 10px; cursor:pointer;">{ calc_label }</button>
    </div>}
}
