use std::time::Instant;

use chrono::{DateTime, Local};
use serde::Serialize;

use dialpick::config::Config;
use dialpick::log;
use dialpick::picker::{
    FeedbackEmitter, Outcome, PickerEvent, TerminalBell, ValuePicker, ValueSink,
};

use crate::events::Action;
use crate::scroll::{DragTracker, OffsetAnimator, Release};
use crate::tui::interaction::InteractionRegistry;

/// Fraction of the remaining distance the drawn column covers per frame
const ANIMATION_SPEED: f64 = 0.35;

/// One value received from the picker
#[derive(Debug, Clone)]
pub struct CommitEntry {
    pub value: i64,
    pub at: DateTime<Local>,
}

/// The host's value sink: remembers every commit.
#[derive(Debug, Default)]
pub struct CommitLog {
    entries: Vec<CommitEntry>,
}

impl CommitLog {
    pub fn entries(&self) -> &[CommitEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&CommitEntry> {
        self.entries.last()
    }
}

impl ValueSink for CommitLog {
    fn on_change(&mut self, value: i64) {
        self.entries.push(CommitEntry {
            value,
            at: Local::now(),
        });
    }
}

pub type HostPicker = ValuePicker<CommitLog, TerminalBell>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Confirmed,
    Cancelled,
}

/// Printed to stdout when the host exits
#[derive(Debug, Serialize)]
pub struct Summary {
    pub label: Option<String>,
    pub unit: Option<String>,
    pub value: i64,
    pub confirmed: bool,
    pub commits: usize,
    /// Every committed value, oldest first
    pub history: Vec<i64>,
    pub last_commit_at: Option<String>,
}

pub struct App {
    pub picker: HostPicker,
    pub interactions: InteractionRegistry,
    pub drag: DragTracker,
    pub animator: OffsetAnimator,
    pub show_help: bool,
    pub cell_width: u32,
    pub exit: Option<ExitReason>,
}

impl App {
    pub fn new(config: &Config, columns: u16) -> Self {
        let feedback = if config.bell() {
            FeedbackEmitter::new(TerminalBell::new())
        } else {
            FeedbackEmitter::muted(TerminalBell::new())
        };
        let cell_width = config.cell_width();
        let picker = ValuePicker::mount(
            config.props(),
            CommitLog::default(),
            feedback,
            config.options(),
            (columns as u32).saturating_mul(cell_width),
        );
        let animator = OffsetAnimator::new(picker.scroll_offset(), ANIMATION_SPEED);

        Self {
            picker,
            interactions: InteractionRegistry::new(),
            drag: DragTracker::default(),
            animator,
            show_help: false,
            cell_width,
            exit: None,
        }
    }

    /// Viewport width in layout units for a terminal this many columns wide.
    pub fn viewport_width(&self, columns: u16) -> u32 {
        (columns as u32).saturating_mul(self.cell_width)
    }

    pub fn should_exit(&self) -> bool {
        self.exit.is_some()
    }

    /// Apply a decoded input action.
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        match action {
            Action::None => {}
            Action::Confirm => self.exit = Some(ExitReason::Confirmed),
            Action::Quit => self.exit = Some(ExitReason::Cancelled),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Picker(event) => {
                self.apply(event, now);
            }
            Action::Press { column, row } => {
                self.drag.press(column, row, self.picker.scroll_offset());
            }
            Action::DragTo { row } => {
                let extent = self.picker.layout().item_extent;
                if let Some(offset) = self.drag.drag_to(row, extent) {
                    self.apply(PickerEvent::Scrolled(offset), now);
                }
            }
            Action::Release => {
                if let Some(Release::Click { column, row }) = self.drag.release() {
                    if let Action::Picker(event) = self.interactions.handle_click(column, row) {
                        self.apply(event, now);
                    }
                }
            }
            Action::Hover { column, row } => {
                if let Action::Picker(event) = self.interactions.handle_hover(column, row) {
                    self.apply(event, now);
                }
            }
            Action::Resize { columns } => {
                let width = self.viewport_width(columns);
                self.apply(PickerEvent::Viewport(width), now);
                self.drag.rebase(self.picker.scroll_offset());
            }
        }
    }

    fn apply(&mut self, event: PickerEvent, now: Instant) -> Outcome {
        let outcome = self.picker.handle(event, now);

        match event {
            // Live drags and geometry changes are drawn where they are, not eased
            PickerEvent::Scrolled(_) | PickerEvent::Viewport(_) => {
                self.animator.jump_to(self.picker.scroll_offset());
            }
            PickerEvent::Hover(_) => {}
            _ => log::log_event(&format!("{:?} -> {:?}", event, outcome)),
        }

        outcome
    }

    /// Settle the picker if its quiet period is over.
    pub fn poll_snap(&mut self, now: Instant) -> Outcome {
        self.picker.poll(now)
    }

    /// Advance the column animation by one frame. Returns `true` while moving.
    pub fn step_animation(&mut self) -> bool {
        self.animator.step(self.picker.target_offset())
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating(self.picker.target_offset())
    }

    pub fn commit_count(&self) -> usize {
        self.picker.sink().entries().len()
    }

    /// Dispose the picker and describe the outcome.
    pub fn finish(self) -> Summary {
        let confirmed = self.exit == Some(ExitReason::Confirmed);
        let value = self.picker.committed_value();
        let label = self.picker.label().map(str::to_string);
        let unit = self.picker.unit().map(str::to_string);
        let commits = self.picker.dispose();

        Summary {
            label,
            unit,
            value,
            confirmed,
            commits: commits.entries().len(),
            history: commits.entries().iter().map(|entry| entry.value).collect(),
            last_commit_at: commits.last().map(|entry| entry.at.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use dialpick::picker::Step;

    use crate::tui::interaction::ClickRegion;

    fn app() -> App {
        let config = Config::parse("bell = false\nlabel = \"Weight\"\nunit = \"kg\"").unwrap();
        App::new(&config, 100)
    }

    #[test]
    fn test_new_app_mounts_picker() {
        let app = app();
        assert_eq!(app.picker.committed_value(), 70);
        assert_eq!(app.viewport_width(100), 800);
        assert_eq!(app.animator.displayed(), app.picker.scroll_offset());
        assert!(!app.is_animating());
    }

    #[test]
    fn test_click_on_row_selects() {
        let mut app = app();
        let now = Instant::now();
        app.interactions.register_row(75, ClickRegion::new(10, 5, 20, 1));

        app.dispatch(Action::Press { column: 12, row: 5 }, now);
        app.dispatch(Action::Release, now);

        assert_eq!(app.picker.committed_value(), 75);
        assert_eq!(app.commit_count(), 1);
        assert!(app.is_animating());
    }

    #[test]
    fn test_drag_commits_after_quiet_period() {
        let mut app = app();
        let now = Instant::now();

        app.dispatch(Action::Press { column: 12, row: 10 }, now);
        // Pulling three rows up scrolls three candidates forward
        app.dispatch(Action::DragTo { row: 7 }, now + Duration::from_millis(10));
        app.dispatch(Action::Release, now + Duration::from_millis(20));

        assert!(app.picker.is_settling());
        assert_eq!(app.picker.provisional_value(), 73);
        assert_eq!(app.commit_count(), 0);

        app.poll_snap(now + Duration::from_millis(200));
        assert_eq!(app.picker.committed_value(), 73);
        assert_eq!(app.commit_count(), 1);
    }

    #[test]
    fn test_wheel_and_resize() {
        let mut app = app();
        let now = Instant::now();

        app.dispatch(Action::Picker(PickerEvent::Wheel(Step::Increment)), now);
        assert_eq!(app.picker.committed_value(), 71);
        assert_eq!(app.picker.feedback().tick_count(), 1);

        app.dispatch(Action::Resize { columns: 40 }, now);
        assert_eq!(app.picker.layout().item_extent, 40.0);
        assert_eq!(app.animator.displayed(), 31.0 * 40.0);
    }

    #[test]
    fn test_resize_during_drag_keeps_one_row_per_candidate() {
        let mut app = app();
        let now = Instant::now();

        app.dispatch(Action::Press { column: 12, row: 10 }, now);
        app.dispatch(Action::Resize { columns: 40 }, now + Duration::from_millis(5));
        assert_eq!(app.picker.layout().item_extent, 40.0);

        app.dispatch(Action::DragTo { row: 9 }, now + Duration::from_millis(10));
        assert_eq!(app.picker.provisional_value(), 71);

        app.dispatch(Action::Release, now + Duration::from_millis(20));
        app.poll_snap(now + Duration::from_millis(200));
        assert_eq!(app.picker.committed_value(), 71);
        assert_eq!(app.picker.sink().entries().len(), 1);
    }

    #[test]
    fn test_resize_mid_drag_continues_from_pointer() {
        let mut app = app();
        let now = Instant::now();

        app.dispatch(Action::Press { column: 12, row: 10 }, now);
        app.dispatch(Action::DragTo { row: 8 }, now);
        assert_eq!(app.picker.provisional_value(), 72);

        // The resize re-centers on the committed 70 under the pointer
        app.dispatch(Action::Resize { columns: 40 }, now);
        app.dispatch(Action::DragTo { row: 7 }, now);
        assert_eq!(app.picker.provisional_value(), 71);
    }

    #[test]
    fn test_finish_summarizes() {
        let mut app = app();
        let now = Instant::now();

        app.dispatch(Action::Picker(PickerEvent::Select(90)), now);
        app.dispatch(Action::Confirm, now);
        assert!(app.should_exit());

        let summary = app.finish();
        assert!(summary.confirmed);
        assert_eq!(summary.value, 90);
        assert_eq!(summary.commits, 1);
        assert_eq!(summary.history, vec![90]);
        assert_eq!(summary.unit.as_deref(), Some("kg"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["value"], 90);
        assert_eq!(json["label"], "Weight");
    }
}
