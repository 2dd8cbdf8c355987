/// Timer hooks the carousel drives; implemented by whatever hosts it.
///
/// The host calls [`crate::Carousel::on_tick`] periodically while ticking is
/// enabled and [`crate::Carousel::on_render_requested`] once, soon, after a
/// render request. Several requests before the host gets to render collapse
/// into one render.
pub trait Scheduler {
    fn request_tick(&mut self, enable: bool);
    fn request_render_once(&mut self);
}

/// Headless scheduler that only records what was asked of it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualScheduler {
    ticking: bool,
    render_pending: bool,
    render_requests: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn render_pending(&self) -> bool {
        self.render_pending
    }

    /// Consume the pending render, if any.
    pub fn take_render(&mut self) -> bool {
        std::mem::take(&mut self.render_pending)
    }

    /// Raw request count, before debouncing.
    pub fn render_requests(&self) -> u64 {
        self.render_requests
    }
}

impl Scheduler for ManualScheduler {
    fn request_tick(&mut self, enable: bool) {
        if self.ticking != enable {
            tracing::trace!(enable, "tick request");
        }
        self.ticking = enable;
    }

    fn request_render_once(&mut self) {
        self.render_pending = true;
        self.render_requests += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/schedule.rs"]
mod tests;
