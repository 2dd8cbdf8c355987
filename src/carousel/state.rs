use crate::{
    animation::controller::{AnimationState, TickOutcome},
    carousel::{config::CarouselConfig, schedule::Scheduler},
    foundation::{
        core::Viewport,
        error::{CoverflowError, CoverflowResult},
        fixed::Fixed,
    },
    layout::{arrange::arrange_covers, cover::Cover, geometry::Geometry},
    render::{
        compose::{ComposeOptions, FrameReport, compose_detail, compose_frame},
        surface::FrameBuffer,
    },
};

/// What the carousel is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The scrolling carousel.
    Browse,
    /// One cover, full size and facing the viewer.
    Detail { index: usize },
}

/// How a pointer press was interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Previous,
    Next,
    OpenDetail(usize),
    CloseDetail,
    Ignored,
}

/// Owns the covers, the output buffer and all animation state.
///
/// Drive it with a [`Scheduler`]: call [`Carousel::on_tick`] while ticking is
/// requested and [`Carousel::on_render_requested`] when a render is pending.
#[derive(Debug)]
pub struct Carousel {
    config: CarouselConfig,
    geometry: Geometry,
    covers: Vec<Cover>,
    focus: usize,
    animation: AnimationState,
    mode: Mode,
    buffer: FrameBuffer,
    last_report: Option<FrameReport>,
}

impl Carousel {
    pub fn new(config: CarouselConfig, covers: Vec<Cover>) -> CoverflowResult<Self> {
        config.validate()?;
        let geometry = build_geometry(&config);
        let buffer = FrameBuffer::new(
            config.viewport.width,
            config.viewport.height,
            config.background,
        );
        let mut carousel = Self {
            config,
            geometry,
            covers,
            focus: 0,
            animation: AnimationState::resting(0),
            mode: Mode::Browse,
            buffer,
            last_report: None,
        };
        carousel.rearrange();
        tracing::debug!(covers = carousel.covers.len(), "carousel created");
        Ok(carousel)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn covers(&self) -> &[Cover] {
        &self.covers
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn is_transitioning(&self) -> bool {
        self.animation.is_transitioning()
    }

    /// Output of the latest render pass.
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn last_report(&self) -> Option<&FrameReport> {
        self.last_report.as_ref()
    }

    /// Periodic animation callback.
    pub fn on_tick(&mut self, sched: &mut dyn Scheduler) -> TickOutcome {
        if let Mode::Detail { .. } = self.mode {
            sched.request_tick(false);
            return TickOutcome::Idle;
        }

        let outcome = self
            .animation
            .advance(&mut self.covers, &mut self.focus, &self.geometry);
        match outcome {
            TickOutcome::Idle => sched.request_tick(false),
            TickOutcome::Moving { .. } => sched.request_render_once(),
            TickOutcome::Arrived { .. } => {
                sched.request_tick(false);
                sched.request_render_once();
            }
        }
        outcome
    }

    /// Clear the buffer and draw the current mode.
    pub fn on_render_requested(&mut self) -> FrameReport {
        let report = match self.mode {
            Mode::Browse => {
                let opts = ComposeOptions {
                    background: self.config.background,
                    side_limit: self.config.side_limit,
                    edge_fade: self.animation.edge_fade(),
                };
                compose_frame(
                    &mut self.buffer,
                    &self.geometry,
                    &self.covers,
                    self.focus,
                    &opts,
                )
            }
            Mode::Detail { index } => match self.covers.get(index) {
                Some(cover) => {
                    compose_detail(&mut self.buffer, &self.geometry, cover, self.config.background)
                }
                None => {
                    self.buffer.clear(self.config.background);
                    FrameReport::default()
                }
            },
        };
        self.last_report = Some(report);
        report
    }

    /// Step one cover back. Returns whether a transition started.
    pub fn show_previous(&mut self, sched: &mut dyn Scheduler) -> bool {
        if !self.accepts_navigation() {
            return false;
        }
        self.finish_transition(sched);
        match self.focus.checked_sub(1) {
            Some(target) => self.start_transition(target, sched),
            None => false,
        }
    }

    /// Step one cover forward. Returns whether a transition started.
    pub fn show_next(&mut self, sched: &mut dyn Scheduler) -> bool {
        if !self.accepts_navigation() {
            return false;
        }
        self.finish_transition(sched);
        let target = self.focus + 1;
        if target >= self.covers.len() {
            return false;
        }
        self.start_transition(target, sched)
    }

    /// Animate to `index` (clamped), passing through every cover in between.
    pub fn show_cover(&mut self, index: usize, sched: &mut dyn Scheduler) -> bool {
        if !self.accepts_navigation() {
            return false;
        }
        self.finish_transition(sched);
        let target = index.min(self.covers.len() - 1);
        self.start_transition(target, sched)
    }

    /// Jump to `index` (clamped) without animating.
    pub fn set_current(&mut self, index: usize, sched: &mut dyn Scheduler) {
        if self.covers.is_empty() {
            return;
        }
        self.focus = index.min(self.covers.len() - 1);
        self.animation = AnimationState::resting(self.focus);
        self.rearrange();
        sched.request_tick(false);
        sched.request_render_once();
    }

    pub fn set_zoom(&mut self, percent: u32, sched: &mut dyn Scheduler) -> CoverflowResult<()> {
        if percent == 0 {
            return Err(CoverflowError::validation("zoom_percent must be > 0"));
        }
        if percent != self.config.zoom_percent {
            self.config.zoom_percent = percent;
            self.geometry = build_geometry(&self.config);
            sched.request_render_once();
        }
        Ok(())
    }

    /// Append a cover at the end of the list.
    pub fn push_cover(&mut self, cover: Cover, sched: &mut dyn Scheduler) {
        self.covers.push(cover);
        if !self.is_transitioning() {
            self.rearrange();
        }
        tracing::debug!(covers = self.covers.len(), "cover added");
        sched.request_render_once();
    }

    /// Drop every cover and return to an empty, resting browse view.
    pub fn clear_covers(&mut self, sched: &mut dyn Scheduler) {
        self.covers.clear();
        self.focus = 0;
        self.animation = AnimationState::resting(0);
        self.mode = Mode::Browse;
        tracing::debug!("covers cleared");
        sched.request_tick(false);
        sched.request_render_once();
    }

    /// Change the cell size used for layout and the pointer band.
    ///
    /// Covers already prepared keep their pixels; prepare new ones with
    /// [`crate::prepare_cover`] at the new size to match.
    pub fn set_cell_size(
        &mut self,
        width: u32,
        height: u32,
        sched: &mut dyn Scheduler,
    ) -> CoverflowResult<()> {
        if width == 0 || height == 0 {
            return Err(CoverflowError::validation(format!(
                "cell must be non-empty, got {width}x{height}"
            )));
        }
        if (width, height) == (self.config.cell_width, self.config.cell_height) {
            return Ok(());
        }
        tracing::debug!(width, height, "cell size changed");
        self.config.cell_width = width;
        self.config.cell_height = height;
        self.geometry = build_geometry(&self.config);
        if !self.is_transitioning() {
            self.rearrange();
        }
        sched.request_render_once();
        Ok(())
    }

    /// Adopt a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32, sched: &mut dyn Scheduler) {
        let viewport = Viewport { width, height };
        if viewport == self.config.viewport {
            return;
        }
        tracing::debug!(width, height, "resize");
        self.config.viewport = viewport;
        self.geometry = build_geometry(&self.config);
        self.buffer.resize(width, height, self.config.background);
        if !self.is_transitioning() {
            self.rearrange();
        }
        sched.request_render_once();
    }

    /// Interpret a pointer press at column `x`.
    ///
    /// In browse mode a press left of the central band (one cell wide, centered)
    /// steps back, right of it steps forward, inside it opens the detail view.
    /// Any press in the detail view closes it.
    pub fn on_pointer_down(&mut self, x: u32, sched: &mut dyn Scheduler) -> PointerAction {
        if let Mode::Detail { .. } = self.mode {
            self.mode = Mode::Browse;
            tracing::debug!("detail view closed");
            sched.request_render_once();
            return PointerAction::CloseDetail;
        }
        if self.covers.is_empty() {
            return PointerAction::Ignored;
        }
        self.finish_transition(sched);

        let center = i64::from(self.config.viewport.width / 2);
        let half_cell = i64::from(self.config.cell_width / 2);
        let x = i64::from(x);
        if x < center - half_cell {
            self.show_previous(sched);
            PointerAction::Previous
        } else if x > center + half_cell {
            self.show_next(sched);
            PointerAction::Next
        } else {
            self.mode = Mode::Detail { index: self.focus };
            tracing::debug!(index = self.focus, "detail view opened");
            sched.request_tick(false);
            sched.request_render_once();
            PointerAction::OpenDetail(self.focus)
        }
    }

    fn accepts_navigation(&self) -> bool {
        self.mode == Mode::Browse && !self.covers.is_empty()
    }

    /// Force arrival of a running transition.
    fn finish_transition(&mut self, sched: &mut dyn Scheduler) {
        if !self.is_transitioning() {
            return;
        }
        self.animation
            .settle(&mut self.covers, &mut self.focus, &self.geometry);
        sched.request_tick(false);
        sched.request_render_once();
    }

    fn start_transition(&mut self, target: usize, sched: &mut dyn Scheduler) -> bool {
        if !self.animation.begin(self.focus, target) {
            return false;
        }
        sched.request_tick(true);
        sched.request_render_once();
        true
    }

    fn rearrange(&mut self) {
        arrange_covers(&mut self.covers, self.focus, &self.geometry, Fixed::ZERO);
    }
}

fn build_geometry(config: &CarouselConfig) -> Geometry {
    Geometry::new(
        config.viewport,
        config.cell_width,
        config.zoom_percent,
        config.tilt(),
        config.spacing,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/state.rs"]
mod tests;
