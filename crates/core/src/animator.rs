//! Drives an interpolator over time.
//!
//! The animator owns the clock: it turns elapsed time into a raw fraction,
//! passes it through an [`Easing`] and reports the interpolated color to a
//! listener on every tick.

use std::fmt;
use std::time::{Duration, Instant};

use tokio::time::interval;

use crate::{Color, Easing, Interpolate, Interpolator};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

type ColorListener = Box<dyn FnMut(Color) + Send>;
type EndListener = Box<dyn FnMut() + Send>;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AnimatorState {
    Idle,
    Running,
    Finished,
    Cancelled,
}

pub struct ColorAnimator {
    interpolator: Interpolator,
    duration: Duration,
    easing: Easing,
    on_color: ColorListener,
    on_end: Option<EndListener>,
    state: AnimatorState,
    started_at: Option<Instant>,
    fraction: f32,
}

impl Interpolator {
    /// Wrap this interpolator in an animator that calls `on_color` with the
    /// current color on every tick.
    pub fn into_animator<F>(self, on_color: F) -> ColorAnimator
    where
        F: FnMut(Color) + Send + 'static,
    {
        ColorAnimator::new(self, on_color)
    }
}

impl ColorAnimator {
    pub fn new<F>(interpolator: Interpolator, on_color: F) -> Self
    where
        F: FnMut(Color) + Send + 'static,
    {
        Self {
            interpolator,
            duration: DEFAULT_DURATION,
            easing: Easing::Linear,
            on_color: Box::new(on_color),
            on_end: None,
            state: AnimatorState::Idle,
            started_at: None,
            fraction: 0.0,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Called once when the animation reaches its end. Not called on cancel.
    pub fn on_end<F>(mut self, on_end: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_end = Some(Box::new(on_end));
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// Raw fraction of the last tick, before easing.
    pub fn animated_fraction(&self) -> f32 {
        self.fraction
    }

    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    /// Start (or restart) from the beginning.
    pub fn start(&mut self) {
        log::debug!(
            "Starting {} color animation over {:?} ({})",
            self.interpolator.kind(),
            self.duration,
            self.easing
        );
        self.state = AnimatorState::Running;
        self.started_at = Some(Instant::now());
        self.fraction = 0.0;
    }

    pub fn cancel(&mut self) {
        if self.is_running() {
            log::debug!("Color animation cancelled at {:.3}", self.fraction);
            self.state = AnimatorState::Cancelled;
        }
    }

    /// Advance to `elapsed` since start and notify the listener.
    ///
    /// Returns the emitted color, or `None` when not running.
    pub fn tick(&mut self, elapsed: Duration) -> Option<Color> {
        if !self.is_running() {
            return None;
        }

        self.fraction = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        let color = self
            .interpolator
            .color_at(self.easing.apply(self.fraction));
        (self.on_color)(color);

        if self.fraction >= 1.0 {
            self.state = AnimatorState::Finished;
            log::debug!("Color animation finished at {}", color);
            if let Some(on_end) = self.on_end.as_mut() {
                on_end();
            }
        }

        Some(color)
    }

    /// Tick using the wall clock since [`ColorAnimator::start`].
    pub fn tick_now(&mut self) -> Option<Color> {
        let elapsed = self.started_at?.elapsed();
        self.tick(elapsed)
    }

    /// Run the whole animation at `fps` ticks per second.
    ///
    /// Returns the last emitted color.
    pub async fn run(&mut self, fps: u32) -> Option<Color> {
        let frame_duration = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        let mut frame_interval = interval(frame_duration);
        let mut last = None;

        self.start();
        log::info!("Color animation running at {}Hz", fps);

        while self.is_running() {
            frame_interval.tick().await;
            if let Some(color) = self.tick_now() {
                last = Some(color);
            }
        }

        last
    }
}

impl fmt::Debug for ColorAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorAnimator")
            .field("interpolator", &self.interpolator.kind())
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("state", &self.state)
            .field("fraction", &self.fraction)
            .finish()
    }
}
