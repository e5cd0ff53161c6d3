//! MathJax loader and typeset trigger.
//!
//! The engine script is injected into `<head>` at most once per page; the
//! slot below remembers it so a second mount does not inject again and so
//! unmount can remove it.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlScriptElement;

struct ScriptSlot {
    script: HtmlScriptElement,
    _onload: Closure<dyn FnMut()>,
}

/// Holds at most one value; filling an occupied slot is a no-op.
#[derive(Debug)]
pub struct OnceSlot<T> {
    value: Option<T>,
}

impl<T> OnceSlot<T> {
    pub const fn new() -> Self {
        Self { value: None }
    }

    pub fn is_filled(&self) -> bool {
        self.value.is_some()
    }

    /// Runs `make` only when empty. `Ok(false)` means the slot was already filled.
    pub fn fill_with<E>(&mut self, make: impl FnOnce() -> Result<T, E>) -> Result<bool, E> {
        if self.value.is_some() {
            return Ok(false);
        }
        self.value = Some(make()?);
        Ok(true)
    }

    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl<T> Default for OnceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static SLOT: RefCell<OnceSlot<ScriptSlot>> = const { RefCell::new(OnceSlot::new()) };
}

/// `MathJax.Hub.Config` argument: inline math between `$...$` or `\(...\)`.
pub fn hub_config() -> serde_json::Value {
    serde_json::json!({
        "tex2jax": {
            "inlineMath": [["$", "$"], ["\\(", "\\)"]]
        }
    })
}

/// Injects the engine script. Returns false when it is already present.
pub fn install(src: &str) -> Result<bool, JsValue> {
    let injected = SLOT.with(|s| s.borrow_mut().fill_with(|| inject(src)))?;
    if injected {
        log::info!("typeset engine script injected from {src}");
    } else {
        log::debug!("typeset engine already installed");
    }
    Ok(injected)
}

fn inject(src: &str) -> Result<ScriptSlot, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_src(src);
    script.set_async(true);

    let onload = Closure::wrap(Box::new(move || {
        if let Err(e) = configure() {
            log::error!("typeset engine configuration failed: {e:?}");
        } else {
            log::info!("typeset engine ready");
        }
    }) as Box<dyn FnMut()>);
    script.set_onload(Some(onload.as_ref().unchecked_ref()));
    head.append_child(&script)?;
    Ok(ScriptSlot {
        script,
        _onload: onload,
    })
}

/// Removes the injected script, if any. Safe to call repeatedly.
pub fn teardown() {
    if let Some(slot) = SLOT.with(|s| s.borrow_mut().take()) {
        slot.script.set_onload(None);
        slot.script.remove();
        log::debug!("typeset engine script removed");
    }
}

fn hub() -> Option<JsValue> {
    let window = web_sys::window()?;
    let mj = Reflect::get(&window, &JsValue::from_str("MathJax")).ok()?;
    if mj.is_undefined() || mj.is_null() {
        return None;
    }
    let hub = Reflect::get(&mj, &JsValue::from_str("Hub")).ok()?;
    if hub.is_undefined() || hub.is_null() {
        None
    } else {
        Some(hub)
    }
}

pub fn is_available() -> bool {
    hub().is_some()
}

fn hub_method(hub: &JsValue, name: &str) -> Result<Function, JsValue> {
    Reflect::get(hub, &JsValue::from_str(name))?.dyn_into::<Function>()
}

fn configure() -> Result<(), JsValue> {
    let hub = hub().ok_or_else(|| JsValue::from_str("MathJax.Hub missing after load"))?;
    let cfg = js_sys::JSON::parse(&hub_config().to_string())?;
    hub_method(&hub, "Config")?.call1(&hub, &cfg)?;
    Ok(())
}

/// `MathJax.Hub.Queue(["Typeset", MathJax.Hub])`
pub fn queue_typeset() -> Result<(), JsValue> {
    let Some(hub) = hub() else {
        return Ok(());
    };
    let job = Array::of2(&JsValue::from_str("Typeset"), &hub);
    hub_method(&hub, "Queue")?.call1(&hub, &job)?;
    Ok(())
}

/// Runs a typeset pass after `delay_ms`, once the DOM has the new overlays.
pub fn schedule_typeset(delay_ms: u32) {
    Timeout::new(delay_ms, || {
        if !is_available() {
            return;
        }
        if let Err(e) = queue_typeset() {
            log::warn!("typeset pass failed: {e:?}");
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slot_fills_once() {
        let mut slot = OnceSlot::<u32>::new();
        assert_eq!(slot.fill_with(|| Ok::<_, ()>(1)), Ok(true));
        let mut called = false;
        let again = slot.fill_with(|| {
            called = true;
            Ok::<_, ()>(2)
        });
        assert_eq!(again, Ok(false));
        assert!(!called);
        assert_eq!(slot.take(), Some(1));
    }

    #[test]
    fn failed_fill_leaves_slot_empty() {
        let mut slot = OnceSlot::<u32>::new();
        assert_eq!(slot.fill_with(|| Err("no <head>")), Err("no <head>"));
        assert!(!slot.is_filled());
        assert_eq!(slot.fill_with(|| Ok::<_, &str>(5)), Ok(true));
    }

    #[test]
    fn take_is_idempotent() {
        let mut slot = OnceSlot::<u32>::default();
        slot.fill_with(|| Ok::<_, ()>(7)).ok();
        assert_eq!(slot.take(), Some(7));
        assert_eq!(slot.take(), None);
        assert!(!slot.is_filled());
        assert_eq!(slot.fill_with(|| Ok::<_, ()>(8)), Ok(true));
    }

    #[test]
    fn inline_delimiters() {
        let cfg = hub_config();
        let inline = &cfg["tex2jax"]["inlineMath"];
        assert_eq!(inline[0], serde_json::json!(["$", "$"]));
        assert_eq!(inline[1], serde_json::json!(["\\(", "\\)"]));
    }
}
