use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SwatchProps {
    pub color: &'static str,
    pub selected: bool,
    pub on_pick: Callback<String>,
}

#[function_component(Swatch)]
pub fn swatch(props: &SwatchProps) -> Html {
    let pick = {
        let cb = props.on_pick.clone();
        let color = props.color;
        Callback::from(move |_| cb.emit(color.to_string()))
    };
    let ring = if props.selected { "#58a6ff" } else { "#30363d" };
    html! { <span onclick={pick} title={props.color} style={format!("display:inline-block; width:22px; height:22px; background:{}; border:2px solid {}; border-radius:50%; cursor:pointer;", props.color, ring)}></span> }
}
