use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::model::{OverlayEntry, Point};
use crate::state::OverlayDrag;

#[derive(Properties, PartialEq, Clone)]
pub struct OverlayLayerProps {
    pub overlays: Vec<OverlayEntry>,
    pub on_move: Callback<(usize, Point)>,
}

/// Typeset results, each draggable on its own.
#[function_component(OverlayLayer)]
pub fn overlay_layer(props: &OverlayLayerProps) -> Html {
    let drag = use_mut_ref(OverlayDrag::default);
    let on_move_ref = use_mut_ref(|| props.on_move.clone());
    *on_move_ref.borrow_mut() = props.on_move.clone();

    // Window-level move/up so a fast drag does not lose the overlay
    {
        let drag = drag.clone();
        let on_move_ref = on_move_ref.clone();
        use_effect_with((), move |_| {
            let mousemove_cb = {
                let drag = drag.clone();
                let on_move_ref = on_move_ref.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let next = drag.borrow().follow(e.client_x() as f64, e.client_y() as f64);
                    if let Some(moved) = next {
                        on_move_ref.borrow().emit(moved);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let mouseup_cb = {
                let drag = drag.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    if let Some(i) = drag.borrow_mut().release() {
                        log::debug!("overlay {i} dropped");
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let window = web_sys::window();
            if let Some(w) = &window {
                w.add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .ok();
                w.add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                    .ok();
            }
            move || {
                if let Some(w) = &window {
                    let _ = w.remove_event_listener_with_callback(
                        "mousemove",
                        mousemove_cb.as_ref().unchecked_ref(),
                    );
                    let _ = w.remove_event_listener_with_callback(
                        "mouseup",
                        mouseup_cb.as_ref().unchecked_ref(),
                    );
                }
                let _keep_alive = (&mousemove_cb, &mouseup_cb);
            }
        });
    }

    html! {<>
        { for props.overlays.iter().enumerate().map(|(i, o)| {
            let grab = {
                let drag = drag.clone();
                let origin = o.position;
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    drag.borrow_mut().grab(i, e.client_x() as f64, e.client_y() as f64, origin);
                })
            };
            html! {
                <div key={i} onmousedown={grab}
                    style={format!("position:absolute; left:{}px; top:{}px; z-index:10; padding:8px; color:#fff; border-radius:6px; box-shadow:0 2px 8px rgba(0,0,0,0.5); cursor:move; user-select:none;", o.position.x, o.position.y)}>
                    <div class="latex-content">{ o.latex() }</div>
                </div>
            }
        }) }
    </>}
}
