mod header;
mod lifecycle;
mod state;

use self::state::{SyncStamp, ViewState};
use crate::services::board::LaunchBoard;
use crate::services::clock::SystemClock;
use crate::services::countdown::CountdownTimers;
use crate::services::filter::{FilterOption, FilterSnapshot};
use crate::ui_egui::theme::LaunchTheme;
use crate::ui_egui::views::TimerSurface;
use chrono_tz::Tz;

pub use self::lifecycle::resolve_board;

pub struct LaunchApp {
    /// Zone used for every displayed time
    timezone: Tz,
    /// Launches for this session
    board: LaunchBoard,
    /// Filter selection and open detail view
    view: ViewState,
    /// Result of the last filter evaluation
    snapshot: FilterSnapshot,
    filter_options: Vec<FilterOption>,
    /// One ticking timer per countdown currently on screen
    timers: CountdownTimers<TimerSurface>,
    /// "Synced" stamp, ticking only while the list is showing
    sync: SyncStamp,
    clock: SystemClock,
    theme: LaunchTheme,
    /// Shown under the header when startup had to fall back
    startup_notice: Option<String>,
}

impl eframe::App for LaunchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.handle_exit();
    }
}
