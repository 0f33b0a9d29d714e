//! Value picker engine
//!
//! Turns scroll, drag, wheel, keyboard and pointer input into one debounced
//! integer selection over a bounded range.
//!
//! - `domain` - the candidate sequence
//! - `layout` - viewport width to row geometry
//! - `mapper` - value <-> scroll offset
//! - `scheduler` - quiet-period snap deadline
//! - `feedback` - audible tick and row emphasis
//! - `reconciler` - the `ValuePicker` engine itself

mod domain;
mod feedback;
mod layout;
mod mapper;
mod reconciler;
mod scheduler;
mod traits;

pub use domain::ValueDomain;
pub use feedback::{Emphasis, FeedbackEmitter, SilentChime, TerminalBell, style_for};
pub use layout::{Breakpoints, LayoutConfig, LayoutPolicy, LayoutTable, ViewportClass};
pub use mapper::PositionMapper;
pub use reconciler::{
    Outcome, PickerEvent, PickerOptions, PickerProps, PickerState, Step, ValuePicker, WindowRow,
};
pub use scheduler::{DEFAULT_QUIET_PERIOD, SnapScheduler};
pub use traits::{Chime, ValueSink};
