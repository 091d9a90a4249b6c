use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::{self, SiteError};

/// Window scroll subscription that is released when dropped.
pub struct ScrollListener {
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
    pending_frame: Option<Rc<Cell<Option<i32>>>>,
}

impl ScrollListener {
    pub fn subscribe<F>(mut handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(f64) + 'static,
    {
        let window = error::window()?;
        let window_clone = window.clone();
        let on_scroll = Closure::wrap(Box::new(move || {
            if let Ok(scroll_y) = window_clone.scroll_y() {
                handler(scroll_y);
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
        Ok(Self {
            window,
            on_scroll,
            pending_frame: None,
        })
    }

    pub fn coalesced<F>(mut handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(f64) + 'static,
    {
        let window = error::window()?;
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let on_frame = {
            let pending = pending.clone();
            let window = window.clone();
            Rc::new(Closure::wrap(Box::new(move |_timestamp: f64| {
                pending.set(None);
                if let Ok(scroll_y) = window.scroll_y() {
                    handler(scroll_y);
                }
            }) as Box<dyn FnMut(f64)>))
        };

        let on_scroll = {
            let pending = pending.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                if pending.get().is_some() {
                    return;
                }
                match window.request_animation_frame((*on_frame).as_ref().unchecked_ref()) {
                    Ok(id) => pending.set(Some(id)),
                    Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
                }
            }) as Box<dyn FnMut()>)
        };

        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
        Ok(Self {
            window,
            on_scroll,
            pending_frame: Some(pending),
        })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(id) = self.pending_frame.as_ref().and_then(|p| p.take()) {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("failed to cancel pending scroll frame: {:?}", e);
            }
        }
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove scroll listener: {:?}", e);
        }
    }
}

pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    if scroll_y.is_nan() || scroll_y < 0.0 {
        0.0
    } else {
        scroll_y * rate
    }
}

pub fn scroll_to(selector: &str) -> Result<(), SiteError> {
    if let Some(element) = error::document()?.query_selector(selector)? {
        element.scroll_into_view();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_moves_at_fraction_of_scroll() {
        assert_eq!(parallax_offset(200.0, 0.5), 100.0);
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
    }

    #[test]
    fn parallax_ignores_overscroll_bounce() {
        assert_eq!(parallax_offset(-40.0, 0.5), 0.0);
        assert_eq!(parallax_offset(f64::NAN, 0.5), 0.0);
    }
}
