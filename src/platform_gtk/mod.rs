use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use tracing::{trace, warn};

use crate::api::TimelineEngine;
use crate::error::TimelineError;
use crate::interaction::KeyBindings;
use crate::render::{CairoContextRenderer, Renderer};

pub type SharedEngine<R> = Rc<RefCell<TimelineEngine<R>>>;

/// Binds a [`TimelineEngine`] to a GTK4 `DrawingArea`.
///
/// Key presses mapped by [`KeyBindings`] are queued on the engine and a
/// redraw is requested; the draw callback drains the queue, reads the
/// allocated size and renders through Cairo.
pub struct GtkTimelineAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    engine: SharedEngine<R>,
    drawing_area: gtk::DrawingArea,
}

impl<R> GtkTimelineAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    #[must_use]
    pub fn new(engine: TimelineEngine<R>, key_bindings: KeyBindings) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        drawing_area.set_focusable(true);

        drawing_area.set_draw_func({
            let engine = Rc::clone(&engine);
            move |_, context, width, height| {
                let Ok(mut engine) = engine.try_borrow_mut() else {
                    warn!("timeline engine busy, skipping frame");
                    return;
                };
                match engine.render_on_cairo_context(context, width, height) {
                    Ok(()) => {}
                    Err(TimelineError::InvalidViewport { width, height }) => {
                        trace!(width, height, "skipping frame for empty drawable");
                    }
                    Err(err) => warn!(error = %err, "timeline frame failed"),
                }
            }
        });

        let key_controller = gtk::EventControllerKey::new();
        key_controller.connect_key_pressed({
            let engine = Rc::clone(&engine);
            let area = drawing_area.downgrade();
            move |_, key, _, _| {
                let Some(command) = key
                    .to_unicode()
                    .and_then(|ch| key_bindings.command_for_char(ch))
                else {
                    return glib::Propagation::Proceed;
                };
                engine.borrow_mut().enqueue(command);
                if let Some(area) = area.upgrade() {
                    area.queue_draw();
                }
                glib::Propagation::Stop
            }
        });
        drawing_area.add_controller(key_controller);

        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine<R> {
        Rc::clone(&self.engine)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }
}
