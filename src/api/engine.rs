use tracing::{debug, trace, warn};

use crate::core::{Catalog, Geometry, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{CommandQueue, NavigationCommand, NavigationController};
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::build_timeline_frame;
use super::{TimelineConfig, TimelineStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Top-level run state consumed by host applications.
///
/// Owns the catalog, the visible window, pending navigation commands and the
/// renderer. One frame is: drain commands in arrival order, read the host
/// drawable size, build the frame, draw it.
pub struct TimelineEngine<R: Renderer> {
    renderer: R,
    catalog: Catalog,
    initial_viewport: Viewport,
    viewport: Viewport,
    navigation: NavigationController,
    style: TimelineStyle,
    pending: CommandQueue,
}

impl<R: Renderer> TimelineEngine<R> {
    /// Creates the engine with the window fitted to the first and last entries.
    pub fn new(renderer: R, catalog: Catalog, config: &TimelineConfig) -> TimelineResult<Self> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(TimelineError::InvalidData(
                "timeline engine requires a non-empty catalog".to_owned(),
            ));
        }

        let viewport = Viewport::initialize(&catalog)?;
        debug!(
            entries = catalog.len(),
            time_min = viewport.time_min(),
            time_max = viewport.time_max(),
            "timeline engine initialized"
        );

        Ok(Self {
            renderer,
            catalog,
            initial_viewport: viewport,
            viewport,
            navigation: NavigationController::new(config.navigation)?,
            style: config.style,
            pending: CommandQueue::default(),
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn style(&self) -> TimelineStyle {
        self.style
    }

    pub fn set_style(&mut self, style: TimelineStyle) -> TimelineResult<()> {
        self.style = style.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Applies one command immediately.
    ///
    /// A rejected step leaves the window untouched.
    pub fn apply_command(&mut self, command: NavigationCommand) -> TimelineResult<()> {
        self.viewport = self.navigation.apply(self.viewport, command)?;
        trace!(
            ?command,
            time_min = self.viewport.time_min(),
            time_max = self.viewport.time_max(),
            "navigation applied"
        );
        Ok(())
    }

    /// Queues a command for the next frame.
    pub fn enqueue(&mut self, command: NavigationCommand) {
        self.pending.push(command);
    }

    #[must_use]
    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    /// Applies every queued command in arrival order; returns how many took effect.
    pub fn drain_pending(&mut self) -> usize {
        let commands: Vec<NavigationCommand> = self.pending.drain().collect();
        let mut applied = 0;
        for command in commands {
            match self.apply_command(command) {
                Ok(()) => applied += 1,
                Err(err) => warn!(?command, error = %err, "navigation step rejected"),
            }
        }
        applied
    }

    /// Restores the window fitted at startup.
    pub fn reset_viewport(&mut self) {
        self.viewport = self.initial_viewport;
    }

    /// Frame geometry for the current host drawable size.
    #[must_use]
    pub fn current_geometry(&self, drawable_width: i32, drawable_height: i32) -> Geometry {
        Geometry::current(drawable_width, drawable_height, self.style.margin_px)
    }

    pub fn build_render_frame(&self, geometry: Geometry) -> TimelineResult<RenderFrame> {
        build_timeline_frame(&self.catalog, self.viewport, geometry, self.style)
    }

    pub fn render(&mut self, geometry: Geometry) -> TimelineResult<()> {
        let frame = self.build_render_frame(geometry)?;
        self.renderer.render(&frame)
    }

    /// Runs one full frame against a drawable of the given size.
    pub fn render_frame_for_size(
        &mut self,
        drawable_width: i32,
        drawable_height: i32,
    ) -> TimelineResult<()> {
        self.drain_pending();
        let geometry = self.current_geometry(drawable_width, drawable_height);
        self.render(geometry)
    }

    /// Runs one full frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        drawable_width: i32,
        drawable_height: i32,
    ) -> TimelineResult<()>
    where
        R: CairoContextRenderer,
    {
        self.drain_pending();
        let geometry = self.current_geometry(drawable_width, drawable_height);
        let frame = self.build_render_frame(geometry)?;
        self.renderer.render_on_cairo_context(context, &frame)
    }
}
