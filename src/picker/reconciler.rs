//! Input reconciliation for the value picker.
//!
//! Every input modality arrives as a [`PickerEvent`] and goes through one
//! "propose a value" path. Discrete inputs (wheel notch, arrow key, direct
//! selection) commit immediately; continuous scrolling only announces a
//! provisional value and defers the commit until the quiet period elapses.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use dialpick::picker::{
//!     FeedbackEmitter, PickerEvent, PickerOptions, PickerProps, SilentChime, Step, ValuePicker,
//! };
//!
//! let mut committed = Vec::new();
//! let mut picker = ValuePicker::mount(
//!     PickerProps::new(70, 40, 150),
//!     |value: i64| committed.push(value),
//!     FeedbackEmitter::new(SilentChime),
//!     PickerOptions::default(),
//!     800,
//! );
//!
//! let now = Instant::now();
//! picker.handle(PickerEvent::Wheel(Step::Increment), now);
//! picker.handle(PickerEvent::Scrolled(45.0 * 48.0), now);
//! picker.poll(now + Duration::from_millis(150));
//!
//! drop(picker);
//! assert_eq!(committed, vec![71, 85]);
//! ```

use std::time::{Duration, Instant};

use super::domain::ValueDomain;
use super::feedback::{Emphasis, FeedbackEmitter, style_for};
use super::layout::{LayoutConfig, LayoutPolicy, ViewportClass};
use super::mapper::PositionMapper;
use super::scheduler::{DEFAULT_QUIET_PERIOD, SnapScheduler};
use super::traits::{Chime, ValueSink};
use crate::log;

/// Direction of one discrete step through the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Toward `max` (wheel down, arrow down)
    Increment,
    /// Toward `min` (wheel up, arrow up)
    Decrement,
}

impl Step {
    pub fn delta(self) -> i64 {
        match self {
            Step::Increment => 1,
            Step::Decrement => -1,
        }
    }
}

/// Input notifications understood by the picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerEvent {
    /// The presentation layer's scroll offset moved (drag or free scroll)
    Scrolled(f64),
    /// One wheel notch
    Wheel(Step),
    /// Arrow key
    Key(Step),
    /// A specific candidate was chosen directly (click/tap)
    Select(i64),
    /// The host changed the current value itself
    ValueChanged(i64),
    /// The viewport was resized to this width
    Viewport(u32),
    /// The pointer is over this candidate, or over none
    Hover(Option<i64>),
}

/// What the caller supplies when mounting a picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerProps {
    pub current_value: i64,
    pub min: i64,
    pub max: i64,
    /// Display only
    pub label: Option<String>,
    /// Display only
    pub unit: Option<String>,
}

impl PickerProps {
    pub fn new(current_value: i64, min: i64, max: i64) -> Self {
        Self {
            current_value,
            min,
            max,
            label: None,
            unit: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Tunables that are not part of the caller's props.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerOptions {
    pub quiet_period: Duration,
    pub policy: LayoutPolicy,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            quiet_period: DEFAULT_QUIET_PERIOD,
            policy: LayoutPolicy::default(),
        }
    }
}

/// In-memory session state of one mounted picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    /// Last value handed to the sink (or seeded by the host)
    pub committed_value: i64,
    /// Position of the candidate column; `(committed - min) * extent` when settled
    pub scroll_offset: f64,
    /// A continuous gesture is in flight
    pub is_settling: bool,
    /// Centered value the last tick was emitted for
    pub last_announced_value: i64,
    pub hovered_value: Option<i64>,
}

/// Result of handling one event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Value handed to the sink, if any
    pub committed: Option<i64>,
    /// Whether a feedback tick was emitted
    pub ticked: bool,
}

/// A candidate row inside the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRow {
    pub value: i64,
    pub emphasis: Emphasis,
    pub hovered: bool,
}

#[derive(Debug, Clone, Copy)]
enum CommitMode {
    Immediate { tick: bool },
    Deferred,
}

/// The picker engine: reconciles input into committed values.
#[derive(Debug)]
pub struct ValuePicker<S: ValueSink, C: Chime> {
    domain: ValueDomain,
    policy: LayoutPolicy,
    viewport: ViewportClass,
    layout: LayoutConfig,
    mapper: PositionMapper,
    state: PickerState,
    scheduler: SnapScheduler,
    feedback: FeedbackEmitter<C>,
    sink: S,
    label: Option<String>,
    unit: Option<String>,
}

impl<S: ValueSink, C: Chime> ValuePicker<S, C> {
    /// Mount a picker centered on the caller's current value, without animation.
    pub fn mount(
        props: PickerProps,
        sink: S,
        feedback: FeedbackEmitter<C>,
        options: PickerOptions,
        viewport_width: u32,
    ) -> Self {
        let domain = ValueDomain::new(props.min, props.max);
        let policy = options.policy;
        let viewport = policy.classify(viewport_width);
        let layout = policy.layout_for_class(viewport);
        let mapper = PositionMapper::new(domain, &layout);
        let committed = domain.clamp(props.current_value);

        log::log(&format!(
            "Mounted picker {}..={} at {} ({} viewport)",
            domain.min(),
            domain.max(),
            committed,
            viewport.display_name()
        ));

        Self {
            domain,
            policy,
            viewport,
            layout,
            mapper,
            state: PickerState {
                committed_value: committed,
                scroll_offset: mapper.offset_for_value(committed),
                is_settling: false,
                last_announced_value: committed,
                hovered_value: None,
            },
            scheduler: SnapScheduler::new(options.quiet_period),
            feedback,
            sink,
            label: props.label,
            unit: props.unit,
        }
    }

    /// Reconcile one input notification.
    pub fn handle(&mut self, event: PickerEvent, now: Instant) -> Outcome {
        match event {
            PickerEvent::Scrolled(offset) => self.on_scrolled(offset, now),
            PickerEvent::Wheel(step) | PickerEvent::Key(step) => {
                let next = self.state.committed_value.saturating_add(step.delta());
                self.propose(next, CommitMode::Immediate { tick: true }, now)
            }
            PickerEvent::Select(value) => {
                self.propose(value, CommitMode::Immediate { tick: false }, now)
            }
            PickerEvent::ValueChanged(value) => {
                self.sync_value(value);
                Outcome::default()
            }
            PickerEvent::Viewport(width) => {
                self.on_viewport(width);
                Outcome::default()
            }
            PickerEvent::Hover(value) => {
                self.state.hovered_value = value.map(|v| self.domain.clamp(v));
                Outcome::default()
            }
        }
    }

    /// Settle the gesture if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Outcome {
        if !self.scheduler.fire_if_due(now) {
            return Outcome::default();
        }
        self.settle()
    }

    /// Tear the picker down, returning the sink.
    ///
    /// A gesture still in flight is abandoned: its value is never committed.
    pub fn dispose(mut self) -> S {
        if self.scheduler.is_armed() {
            log::log("Picker disposed mid-gesture, pending snap cancelled");
        }
        self.scheduler.cancel();
        self.sink
    }

    fn on_scrolled(&mut self, offset: f64, now: Instant) -> Outcome {
        if !offset.is_finite() {
            return Outcome::default();
        }
        if !self.state.is_settling {
            log::log_event(&format!("Gesture started at {}", self.state.committed_value));
        }
        self.state.is_settling = true;
        self.state.scroll_offset = offset.max(0.0);

        let provisional = self.mapper.value_at_offset(self.state.scroll_offset);
        self.propose(provisional, CommitMode::Deferred, now)
    }

    fn propose(&mut self, proposed: i64, mode: CommitMode, now: Instant) -> Outcome {
        let value = self.domain.clamp(proposed);

        match mode {
            CommitMode::Deferred => {
                let ticked = self.announce(value);
                self.scheduler.arm(now);
                Outcome {
                    committed: None,
                    ticked,
                }
            }
            CommitMode::Immediate { tick } => {
                if value == self.state.committed_value {
                    return Outcome::default();
                }
                if tick {
                    self.feedback.tick();
                }
                // Mid-gesture the offset and the announced value belong to the
                // gesture; the snap settles them.
                if !self.state.is_settling {
                    self.state.last_announced_value = value;
                    self.state.scroll_offset = self.mapper.offset_for_value(value);
                }
                self.commit(value, if tick { "step" } else { "select" });
                Outcome {
                    committed: Some(value),
                    ticked: tick,
                }
            }
        }
    }

    fn settle(&mut self) -> Outcome {
        self.state.is_settling = false;

        let settled = self.mapper.value_at_offset(self.state.scroll_offset);
        let ticked = self.announce(settled);
        self.state.scroll_offset = self.mapper.offset_for_value(settled);

        if settled == self.state.committed_value {
            return Outcome {
                committed: None,
                ticked,
            };
        }
        self.commit(settled, "snap");
        Outcome {
            committed: Some(settled),
            ticked,
        }
    }

    /// Tick if the centered value changed.
    fn announce(&mut self, value: i64) -> bool {
        if value == self.state.last_announced_value {
            return false;
        }
        self.feedback.tick();
        self.state.last_announced_value = value;
        true
    }

    fn commit(&mut self, value: i64, source: &str) {
        self.state.committed_value = value;
        log::log_commit(value, source);
        self.sink.on_change(value);
    }

    fn sync_value(&mut self, value: i64) {
        let value = self.domain.clamp(value);
        self.state.committed_value = value;
        if !self.state.is_settling {
            self.state.last_announced_value = value;
            self.state.scroll_offset = self.mapper.offset_for_value(value);
        }
    }

    fn on_viewport(&mut self, width: u32) {
        let class = self.policy.classify(width);
        let layout = self.policy.layout_for_class(class);
        if class != self.viewport {
            log::log(&format!(
                "Viewport {} -> {} ({} units)",
                self.viewport.display_name(),
                class.display_name(),
                width
            ));
        }
        self.viewport = class;

        let extent_changed = layout.item_extent != self.layout.item_extent;
        self.layout = layout;
        if extent_changed {
            self.mapper = PositionMapper::new(self.domain, &layout);
            self.state.scroll_offset = self.mapper.offset_for_value(self.state.committed_value);
        }
    }

    /// Rows of the visible window centered at `offset`, top to bottom.
    ///
    /// Slots past either end of the domain are `None`.
    pub fn window_at(&self, offset: f64) -> Vec<Option<WindowRow>> {
        let center = self.mapper.value_at_offset(offset);
        let half = self.layout.half_window as i64;

        (-half..=half)
            .map(|delta| {
                let value = center.checked_add(delta)?;
                if !self.domain.contains(value) {
                    return None;
                }
                Some(WindowRow {
                    value,
                    emphasis: style_for(value, self.state.committed_value),
                    hovered: self.state.hovered_value == Some(value),
                })
            })
            .collect()
    }

    pub fn visible_window(&self) -> Vec<Option<WindowRow>> {
        self.window_at(self.state.scroll_offset)
    }

    pub fn committed_value(&self) -> i64 {
        self.state.committed_value
    }

    /// Value implied by the current offset.
    pub fn provisional_value(&self) -> i64 {
        self.mapper.value_at_offset(self.state.scroll_offset)
    }

    pub fn scroll_offset(&self) -> f64 {
        self.state.scroll_offset
    }

    /// Offset the presentation layer should move toward.
    pub fn target_offset(&self) -> f64 {
        if self.state.is_settling {
            self.state.scroll_offset
        } else {
            self.mapper.offset_for_value(self.state.committed_value)
        }
    }

    pub fn is_settling(&self) -> bool {
        self.state.is_settling
    }

    pub fn hovered_value(&self) -> Option<i64> {
        self.state.hovered_value
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn domain(&self) -> &ValueDomain {
        &self.domain
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn mapper(&self) -> &PositionMapper {
        &self.mapper
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport
    }

    /// When the pending snap is due, if a gesture is in flight.
    pub fn deadline(&self) -> Option<Instant> {
        self.scheduler.deadline()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn feedback(&self) -> &FeedbackEmitter<C> {
        &self.feedback
    }
}
