//! GTK widget hosting one animated progress ring
//!
//! Each widget owns its animator exclusively. Frames are driven by a tick
//! callback on the widget's own frame clock, attached only while the value is
//! moving and detached as soon as it settles. Unrealizing the widget bumps a
//! generation counter so a callback that is still queued stops on its next
//! invocation instead of touching torn-down state. The target survives, so a
//! re-realized ring picks up where it should be.

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{DrawingArea, Widget};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use hls_ring_core::frame::validate_options;
use hls_ring_core::{compose_frame, ProgressAnimator, ProgressValue};
use hls_ring_render::render_ring;
use hls_ring_types::{Palette, RingOptions};

/// What an attached tick callback should do on this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickOutcome {
    /// The callback belongs to a detached generation
    Stale,
    /// Redraw and keep ticking
    Animate,
    /// Redraw one last time, the value has settled
    Settled,
}

struct RingState {
    animator: ProgressAnimator,
    options: RingOptions,
    palette: Palette,
    /// Whether a tick callback is attached
    ticking: bool,
    /// Incremented whenever the attached tick callback must stop
    tick_generation: u64,
    /// Instant sampled by the latest tick, shared with the draw that follows
    frame_instant: Option<Instant>,
}

impl RingState {
    fn new(options: RingOptions, palette: Palette, initial: f64) -> Self {
        Self {
            animator: ProgressAnimator::from_options(&options, initial),
            options,
            palette,
            ticking: false,
            tick_generation: 0,
            frame_instant: None,
        }
    }

    /// Options with the ring shrunk to fit a `width` x `height` allocation
    fn fitted_options(&self, width: f64, height: f64) -> RingOptions {
        let available = width.min(height);
        let mut options = self.options.clone();
        if available > 0.0 && available < options.size {
            options.size = available;
        }
        options
    }

    /// Time to sample the animator at when drawing
    fn draw_instant(&self) -> Instant {
        match self.frame_instant {
            Some(instant) if self.ticking => instant,
            _ => Instant::now(),
        }
    }

    /// Mark a tick callback as attached and return its generation, or `None`
    /// when one is already running
    fn attach(&mut self) -> Option<u64> {
        if self.ticking {
            return None;
        }
        self.ticking = true;
        Some(self.tick_generation)
    }

    /// Invalidate the attached tick callback, keeping the target
    fn detach(&mut self) {
        self.ticking = false;
        self.tick_generation += 1;
        self.frame_instant = None;
    }

    /// Decide what the callback of `generation` does at `now`
    fn tick(&mut self, generation: u64, now: Instant) -> TickOutcome {
        if self.tick_generation != generation {
            return TickOutcome::Stale;
        }

        self.frame_instant = Some(now);
        if self.animator.is_settled(now) {
            self.ticking = false;
            return TickOutcome::Settled;
        }
        TickOutcome::Animate
    }

    /// Swap in new options, continuing any running animation without a jump
    fn apply_options(&mut self, options: RingOptions, now: Instant) {
        self.animator
            .set_duration(Duration::from_millis(options.duration_ms), now);
        self.animator.set_easing(options.easing, now);
        self.options = options;
    }
}

/// Animated HLS ring
pub struct RingWidget {
    area: DrawingArea,
    state: Rc<RefCell<RingState>>,
}

impl RingWidget {
    /// Create a ring showing `initial` without animating to it
    pub fn new(options: RingOptions, palette: Palette, initial: f64) -> Self {
        if let Err(e) = validate_options(&options) {
            log::warn!("Ring configured with bad geometry: {}", e);
        }

        let state = Rc::new(RefCell::new(RingState::new(options, palette, initial)));

        let area = DrawingArea::new();
        {
            let size = state.borrow().options.size.max(1.0) as i32;
            area.set_size_request(size, size);
        }

        let state_for_draw = state.clone();
        area.set_draw_func(move |_, cr, width, height| {
            // Skip this frame if a retarget holds the state; the next tick redraws
            let Ok(state) = state_for_draw.try_borrow() else {
                return;
            };
            let (width, height) = (width as f64, height as f64);
            let options = state.fitted_options(width, height);
            let value = state.animator.value_at(state.draw_instant());
            let frame = compose_frame(&options, value);

            if let Err(e) = render_ring(cr, &frame, &options, &state.palette, width, height) {
                log::warn!("Failed to render ring: {}", e);
            }
        });

        let state_for_realize = state.clone();
        area.connect_realize(move |area| {
            let settled = state_for_realize
                .borrow()
                .animator
                .is_settled(Instant::now());
            if !settled {
                start_ticking(area, &state_for_realize);
            }
        });

        let state_for_unrealize = state.clone();
        area.connect_unrealize(move |_| {
            state_for_unrealize.borrow_mut().detach();
            log::debug!("Ring unrealized, tick callback detached");
        });

        Self { area, state }
    }

    /// The widget to pack into a container
    pub fn widget(&self) -> Widget {
        self.area.clone().upcast()
    }

    /// Animate toward `value` (clamped to 0..=100) from whatever is shown now
    pub fn set_value(&self, value: f64) {
        self.state
            .borrow_mut()
            .animator
            .retarget(value, Instant::now());
        self.area.queue_draw();
        start_ticking(&self.area, &self.state);
    }

    /// Value the ring is heading to
    pub fn target(&self) -> ProgressValue {
        self.state.borrow().animator.target()
    }

    /// Current options
    pub fn options(&self) -> RingOptions {
        self.state.borrow().options.clone()
    }

    /// Replace the options; geometry is recomputed on the next frame
    pub fn set_options(&self, options: RingOptions) {
        if let Err(e) = validate_options(&options) {
            log::warn!("Ring configured with bad geometry: {}", e);
        }

        let size = options.size.max(1.0) as i32;
        self.state
            .borrow_mut()
            .apply_options(options, Instant::now());
        self.area.set_size_request(size, size);
        self.area.queue_draw();
    }

    pub fn set_palette(&self, palette: Palette) {
        self.state.borrow_mut().palette = palette;
        self.area.queue_draw();
    }
}

/// Attach a frame-clock tick callback unless one is already running.
///
/// Without a realized widget there is no frame clock; the realize handler
/// starts ticking later if the value is still moving.
fn start_ticking(area: &DrawingArea, state: &Rc<RefCell<RingState>>) {
    if !area.is_realized() {
        return;
    }

    let Some(generation) = state.borrow_mut().attach() else {
        return;
    };

    let state = state.clone();
    let _ = area.add_tick_callback(move |area, _clock| {
        let Ok(mut s) = state.try_borrow_mut() else {
            // Borrowed by a retarget; try again next frame
            return glib::ControlFlow::Continue;
        };

        match s.tick(generation, Instant::now()) {
            TickOutcome::Stale => {
                log::debug!(
                    "Ring: removing stale tick callback (gen {} vs current {})",
                    generation,
                    s.tick_generation
                );
                glib::ControlFlow::Break
            }
            TickOutcome::Animate => {
                area.queue_draw();
                glib::ControlFlow::Continue
            }
            TickOutcome::Settled => {
                area.queue_draw();
                log::trace!("Ring settled at {:.2}", s.animator.target().percent());
                glib::ControlFlow::Break
            }
        }
    });
}
