// File: crates/heatmap-core/src/tooltip.rs
// Summary: Hover tooltip state machine (hidden/visible) with timed, interruptible opacity transitions.
// Notes:
// - Time is passed in explicitly as a `Duration` since an arbitrary epoch so
//   callers (event loops, tests) own the clock.
// - Starting a transition interrupts the running one; the new ramp starts
//   from whatever opacity was on screen at that instant.

use std::time::Duration;

use crate::config::TooltipConfig;
use crate::dataset::MonthRecord;
use crate::format::{format_number, to_fixed};
use crate::geometry::Point;
use crate::types::TOOLTIP_ID;

/// Line separator inside tooltip content.
pub const LINE_BREAK: &str = "<br>";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipState {
    Hidden,
    Visible,
}

/// Symmetric cubic easing.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Transition {
    from: f64,
    to: f64,
    start: Duration,
    duration: Duration,
}

impl Transition {
    fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).min(1.0)
    }

    fn value_at(&self, now: Duration) -> f64 {
        let k = ease_cubic_in_out(self.progress(now));
        self.from + (self.to - self.from) * k
    }
}

/// Tooltip content for a record: `"<year> - <month><br><temp>°C<br><variance>°C"`.
pub fn tooltip_html(record: &MonthRecord, base_temperature: f64) -> String {
    format!(
        "{} - {}{br}{}°C{br}{}°C",
        record.year,
        record.month,
        to_fixed(record.temperature(base_temperature), 2),
        to_fixed(record.variance, 2),
        br = LINE_BREAK,
    )
}

#[derive(Clone, Debug)]
pub struct Tooltip {
    config: TooltipConfig,
    state: TooltipState,
    /// Opacity before the first transition.
    resting: f64,
    transition: Option<Transition>,
    html: String,
    data_year: Option<i32>,
    position: Point,
}

impl Tooltip {
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            state: TooltipState::Hidden,
            resting: 0.0,
            transition: None,
            html: String::new(),
            data_year: None,
            position: Point::default(),
        }
    }

    /// Pointer entered a cell: fade in, replace content, move next to the pointer.
    pub fn show(&mut self, record: &MonthRecord, base_temperature: f64, pointer: Point, now: Duration) {
        self.start_transition(self.config.visible_opacity, self.config.show_duration(), now);
        self.state = TooltipState::Visible;
        self.html = tooltip_html(record, base_temperature);
        self.data_year = Some(record.year);
        self.position = Point::new(pointer.x, pointer.y + self.config.offset_y);
    }

    /// Pointer left a cell: fade out. Content and position stay as they were.
    pub fn hide(&mut self, now: Duration) {
        self.start_transition(0.0, self.config.hide_duration(), now);
        self.state = TooltipState::Hidden;
    }

    fn start_transition(&mut self, to: f64, duration: Duration, now: Duration) {
        let from = self.opacity_at(now);
        self.transition = Some(Transition { from, to, start: now, duration });
    }

    pub fn opacity_at(&self, now: Duration) -> f64 {
        self.transition.map_or(self.resting, |t| t.value_at(now))
    }

    /// True while an opacity ramp is still in flight.
    pub fn is_animating(&self, now: Duration) -> bool {
        self.transition.is_some_and(|t| t.progress(now) < 1.0)
    }

    /// Target state of the latest transition.
    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.html.split(LINE_BREAK).filter(|l| !l.is_empty())
    }

    /// Year of the record currently shown, if any was ever shown.
    pub fn data_year(&self) -> Option<i32> {
        self.data_year
    }

    /// Top-left corner in page coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Inspectable attributes at time `now`.
    pub fn attributes(&self, now: Duration) -> Vec<(&'static str, String)> {
        let mut out = vec![("id", TOOLTIP_ID.to_string())];
        if let Some(y) = self.data_year {
            out.push(("data-year", y.to_string()));
        }
        out.push((
            "style",
            format!(
                "opacity: {}; left: {}px; top: {}px;",
                format_number(self.opacity_at(now)),
                format_number(self.position.x),
                format_number(self.position.y)
            ),
        ));
        out
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}
