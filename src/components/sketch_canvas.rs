use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::canvas_ink::{CanvasInk, SurfaceHandle};
use crate::config::Config;
use crate::surface::DrawingSurface;

#[derive(Properties, PartialEq, Clone)]
pub struct SketchCanvasProps {
    pub surface: SurfaceHandle,
    pub config: Config,
    pub ink_color: String,
}

#[function_component(SketchCanvas)]
pub fn sketch_canvas(props: &SketchCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    // Mount: attach the surface and wire pointer events
    {
        let canvas_ref = canvas_ref.clone();
        let surface = props.surface.clone();
        let config = props.config.clone();
        let ink_color = props.ink_color.clone();
        use_effect_with((), move |_| {
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            match canvas.clone().and_then(|c| CanvasInk::attach(c, &config)) {
                Some(ink) => {
                    let mut s = DrawingSurface::new(ink);
                    s.select_color(&ink_color);
                    surface.set(Some(s));
                    log::debug!("sketch surface attached");
                }
                None => log::warn!("2D canvas unavailable, drawing disabled"),
            }

            let mousedown_cb = {
                let surface = surface.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    surface.with(|s| s.begin(e.offset_x() as f64, e.offset_y() as f64));
                }) as Box<dyn FnMut(_)>)
            };
            let mousemove_cb = {
                let surface = surface.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    surface.with(|s| s.extend(e.offset_x() as f64, e.offset_y() as f64));
                }) as Box<dyn FnMut(_)>)
            };
            // mouseup and mouseout both end the stroke
            let stop_cb = {
                let surface = surface.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    surface.with(|s| s.end());
                }) as Box<dyn FnMut(_)>)
            };
            let resize_cb = {
                let surface = surface.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    surface.with(|s| {
                        if let Some((w, h)) = s.target().viewport_size() {
                            s.resize(w, h);
                        }
                    });
                }) as Box<dyn FnMut(_)>)
            };

            if let Some(c) = &canvas {
                c.add_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                )
                .ok();
                c.add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .ok();
                c.add_event_listener_with_callback("mouseup", stop_cb.as_ref().unchecked_ref())
                    .ok();
                c.add_event_listener_with_callback("mouseout", stop_cb.as_ref().unchecked_ref())
                    .ok();
            }
            let window = web_sys::window();
            if let Some(w) = &window {
                w.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                    .ok();
            }

            // Cleanup
            move || {
                if let Some(c) = &canvas {
                    let _ = c.remove_event_listener_with_callback(
                        "mousedown",
                        mousedown_cb.as_ref().unchecked_ref(),
                    );
                    let _ = c.remove_event_listener_with_callback(
                        "mousemove",
                        mousemove_cb.as_ref().unchecked_ref(),
                    );
                    let _ = c.remove_event_listener_with_callback(
                        "mouseup",
                        stop_cb.as_ref().unchecked_ref(),
                    );
                    let _ = c.remove_event_listener_with_callback(
                        "mouseout",
                        stop_cb.as_ref().unchecked_ref(),
                    );
                }
                if let Some(w) = &window {
                    let _ = w.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
                surface.set(None);
                let _keep_alive = (&mousedown_cb, &mousemove_cb, &stop_cb, &resize_cb);
            }
        });
    }

    // Keep the surface's ink in step with the palette
    {
        let surface = props.surface.clone();
        let color = props.ink_color.clone();
        use_effect_with(color, move |color| {
            surface.with(|s| s.select_color(color));
            || ()
        });
    }

    html! {
        <canvas ref={canvas_ref} id="canvas"
            style="position:absolute; top:0; left:0; width:100%; height:100%; display:block; cursor:crosshair;"></canvas>
    }
}
