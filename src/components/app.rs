use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::{
    overlay_layer::OverlayLayer, sketch_canvas::SketchCanvas, status_line::StatusLine,
    toolbar::Toolbar,
};
use crate::api::{CalculateRequest, post_calculate};
use crate::canvas_ink::SurfaceHandle;
use crate::config::Config;
use crate::model::{Point, SketchAction, SketchState};
use crate::state::SubmitGate;
use crate::typeset;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| Config::from_env());
    let state = use_reducer(SketchState::default);
    let surface = (*use_state(SurfaceHandle::default)).clone();
    // Synchronous guard; the reducer flag only updates on the next render.
    let in_flight = use_mut_ref(SubmitGate::default);

    // Typeset engine: inject once on mount, remove on unmount
    {
        let src = config.typeset_script_src;
        use_effect_with((), move |_| {
            if let Err(e) = typeset::install(src) {
                log::error!("could not load typeset engine: {e:?}");
            }
            typeset::teardown
        });
    }
    // Re-typeset whenever the overlay texts change
    {
        let texts: Vec<String> = state.overlays.iter().map(|o| o.latex()).collect();
        let delay = config.typeset_delay_ms;
        use_effect_with(texts, move |texts| {
            if !texts.is_empty() {
                typeset::schedule_typeset(delay);
            }
            || ()
        });
    }

    let on_select_color = {
        let state = state.clone();
        let surface = surface.clone();
        Callback::from(move |color: String| {
            surface.with(|s| s.select_color(&color));
            state.dispatch(SketchAction::SelectColor(color));
        })
    };

    let on_reset = {
        let state = state.clone();
        let surface = surface.clone();
        Callback::from(move |()| {
            surface.with(|s| {
                s.end();
                s.clear();
            });
            state.dispatch(SketchAction::Reset);
        })
    };

    let on_calculate = {
        let state = state.clone();
        let surface = surface.clone();
        let config = config.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |()| {
            if !surface.is_attached() {
                return;
            }
            if in_flight.borrow().is_held() {
                log::warn!("calculate ignored: a submission is already in flight");
                return;
            }
            let image = match surface.with(|s| s.target().to_png_data_url()) {
                Some(Ok(image)) => image,
                Some(Err(e)) => {
                    log::error!("calculate failed: {e}");
                    state.dispatch(SketchAction::SubmitFailed(e.to_string()));
                    return;
                }
                None => return,
            };
            let request = CalculateRequest::new(image, &state.bindings);
            if !in_flight.borrow_mut().try_acquire() {
                return;
            }
            state.dispatch(SketchAction::SubmitStarted);
            log::info!(
                "submitting drawing with {} variable binding(s)",
                request.dict_of_vars.len()
            );

            let state = state.clone();
            let surface = surface.clone();
            let config = (*config).clone();
            let in_flight = in_flight.clone();
            let fallback_anchor: Point = state.anchor;
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = post_calculate(&config, &request).await;
                let records = match in_flight.borrow_mut().finish(outcome) {
                    Ok(records) => records,
                    Err(e) => {
                        log::error!("calculate failed: {e}");
                        state.dispatch(SketchAction::SubmitFailed(e.to_string()));
                        return;
                    }
                };
                log::info!("received {} result(s)", records.len());
                let anchor = surface
                    .with(|s| s.bounding_box())
                    .flatten()
                    .map(|bb| bb.center())
                    .unwrap_or(fallback_anchor);
                state.dispatch(SketchAction::ResponseReceived {
                    records: records.clone(),
                    anchor,
                });
                for rec in records {
                    let state = state.clone();
                    let surface = surface.clone();
                    Timeout::new(config.overlay_delay_ms, move || {
                        state.dispatch(SketchAction::AddOverlay {
                            expression: rec.expr,
                            answer: rec.result,
                        });
                        surface.with(|s| s.clear());
                    })
                    .forget();
                }
                state.dispatch(SketchAction::SubmitFinished);
            });
        })
    };

    let on_move = {
        let state = state.clone();
        Callback::from(move |(index, position): (usize, Point)| {
            state.dispatch(SketchAction::MoveOverlay { index, position })
        })
    };
    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(SketchAction::DismissError))
    };

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:black;">
        <SketchCanvas surface={surface.clone()} config={(*config).clone()} ink_color={state.ink_color.clone()} />
        <Toolbar ink_color={state.ink_color.clone()} busy={state.submitting} on_reset={on_reset} on_select_color={on_select_color} on_calculate={on_calculate} />
        <OverlayLayer overlays={state.overlays.clone()} on_move={on_move} />
        <StatusLine submitting={state.submitting} error={state.last_error.clone()} bindings={state.bindings.clone()} on_dismiss={on_dismiss} />
    </div>}
}
