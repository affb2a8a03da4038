//! Scroll-position logic: the visibility threshold and the return-to-top
//! animation curve.
//!
//! Time enters as plain `f64` milliseconds so the sampler can be driven by a
//! real frame clock or by a test loop alike.

/// Two-state visibility of the back-to-top control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Visible strictly above the threshold, hidden at or below it.
///
/// # Examples
///
/// ```
/// use widget_core::{Visibility, visibility_for};
///
/// assert_eq!(visibility_for(0.0, 300.0), Visibility::Hidden);
/// assert_eq!(visibility_for(300.0, 300.0), Visibility::Hidden);
/// assert_eq!(visibility_for(301.0, 300.0), Visibility::Visible);
/// ```
pub fn visibility_for(offset: f64, show_after: f64) -> Visibility {
    if offset > show_after {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

/// Cubic ease-in-out over normalized progress `t` in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use widget_core::ease_in_out_cubic;
///
/// assert_eq!(ease_in_out_cubic(0.0), 0.0);
/// assert_eq!(ease_in_out_cubic(0.5), 0.5);
/// assert_eq!(ease_in_out_cubic(1.0), 1.0);
/// ```
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One sampled animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    /// The page offset to apply for this frame.
    pub offset: f64,
    /// Set once normalized progress reaches 1; the caller stops sampling.
    pub done: bool,
}

/// A time-based scroll-to-top animation over a captured start offset.
///
/// The start offset is pinned at construction and never re-read, so manual
/// scrolling while the animation runs does not move its trajectory. The
/// start *time* is pinned by the first [`sample`](Self::sample) call, which
/// keeps construction free of any clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    start_offset: f64,
    duration_ms: f64,
    started_ms: Option<f64>,
}

impl ScrollAnimation {
    pub fn new(start_offset: f64, duration_ms: f64) -> Self {
        Self {
            start_offset,
            duration_ms,
            started_ms: None,
        }
    }

    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    /// Sample the animation at `now_ms`.
    ///
    /// Progress is clamped to 1, so late samples keep returning offset 0 and
    /// `done`. A non-positive duration completes on the first sample.
    pub fn sample(&mut self, now_ms: f64) -> ScrollSample {
        let started = *self.started_ms.get_or_insert(now_ms);

        let progress = if self.duration_ms > 0.0 {
            ((now_ms - started) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        ScrollSample {
            offset: self.start_offset * (1.0 - ease_in_out_cubic(progress)),
            done: progress >= 1.0,
        }
    }
}
