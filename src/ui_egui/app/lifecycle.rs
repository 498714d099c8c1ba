use super::state::{Screen, SyncStamp, ViewState};
use super::LaunchApp;
use crate::models::settings::AppConfig;
use crate::services::board::LaunchBoard;
use crate::services::clock::Clock;
use crate::services::clock::SystemClock;
use crate::services::countdown::CountdownTimers;
use crate::services::filter::{filter_options, FilterSnapshot, LaunchFilter, ListLayout};
use crate::services::launch_source::{BundledLaunchSource, JsonFileLaunchSource};
use crate::ui_egui::theme::LaunchTheme;
use crate::ui_egui::views::detail_view::{render_detail, DetailAction, DetailFrame};
use crate::ui_egui::views::list_view::{render_list, ListAction, ListFrame};
use std::path::Path;
use std::time::Instant;

impl LaunchApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        board: LaunchBoard,
        startup_notice: Option<String>,
    ) -> Self {
        let clock = SystemClock;
        let timezone = config.timezone();
        let theme = LaunchTheme::night();
        theme.apply_to_context(&cc.egui_ctx);

        let view = ViewState::default();
        let snapshot = FilterSnapshot::evaluate(view.filter.clone(), board.records(), clock.now());
        let options = filter_options(&config.provider_filters);

        log::info!(
            "Dashboard ready: {} launches from {}, times shown in {}",
            board.len(),
            board.origin(),
            timezone
        );

        Self {
            timers: CountdownTimers::new(config.countdown_tick()),
            sync: SyncStamp::new(config.sync_interval(), clock.now()),
            timezone,
            board,
            view,
            snapshot,
            filter_options: options,
            clock,
            theme,
            startup_notice,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        let frame_start = Instant::now();
        self.timers.begin_frame();
        self.sync.drive(self.view.screen(), frame_start, &self.clock);

        if self.view.screen() == Screen::List {
            self.render_header(ctx);
        }

        let panel = egui::Frame::none()
            .fill(self.theme.app_background)
            .inner_margin(egui::Margin::symmetric(16.0, 12.0));
        egui::CentralPanel::default().frame(panel).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.view.screen() {
                    Screen::List => self.render_list_screen(ui, frame_start),
                    Screen::Detail => self.render_detail_screen(ui, frame_start),
                });
        });

        let stopped = self.timers.end_frame();
        if stopped > 0 {
            log::debug!("Stopped {} countdown timers no longer on screen", stopped);
        }
        self.schedule_repaint(ctx, frame_start);
    }

    pub(super) fn handle_exit(&mut self) {
        self.timers.clear();
        self.sync.stop();
        log::info!("Launch dashboard closed");
    }

    /// Re-run the filter against the current clock.
    pub(super) fn apply_filter(&mut self, filter: LaunchFilter) {
        self.view.set_filter(filter.clone());
        self.snapshot = FilterSnapshot::evaluate(filter, self.board.records(), self.clock.now());
        log::debug!(
            "{:?} matched {} of {} launches",
            self.snapshot.filter(),
            self.snapshot.len(),
            self.board.len()
        );
    }

    fn render_list_screen(&mut self, ui: &mut egui::Ui, frame_start: Instant) {
        let filtered = self.snapshot.records(self.board.records());
        let layout = ListLayout::arrange(self.snapshot.filter(), filtered);

        let mut frame = ListFrame {
            theme: &self.theme,
            timers: &mut self.timers,
            clock: &self.clock,
            now: frame_start,
        };

        if let ListAction::Open(id) = render_list(ui, &layout, &mut frame) {
            self.view.select(id);
        }
    }

    fn render_detail_screen(&mut self, ui: &mut egui::Ui, frame_start: Instant) {
        let Some(selection) = self.view.selection.as_ref() else {
            return;
        };
        let notifications = selection.notifications;

        let Some(launch) = self.board.find(&selection.launch_id) else {
            log::warn!("Selected launch {} is not on the board", selection.launch_id);
            self.view.clear_selection();
            return;
        };

        let mut frame = DetailFrame {
            theme: &self.theme,
            timezone: self.timezone,
            timers: &mut self.timers,
            clock: &self.clock,
            now: frame_start,
        };

        match render_detail(ui, launch, &notifications, &mut frame) {
            DetailAction::None => {}
            DetailAction::Back => {
                self.view.clear_selection();
                let filter = self.view.filter.clone();
                self.apply_filter(filter);
            }
            DetailAction::Toggle(offset) => {
                if let Some(enabled) = self.view.toggle_notification(offset) {
                    log::info!(
                        "{} reminder {}",
                        offset.label(),
                        if enabled { "enabled" } else { "disabled" }
                    );
                }
            }
        }
    }

    /// Wake up for the next countdown tick or sync refresh, whichever is first.
    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        let countdown = self.timers.next_deadline(now);
        let sync = self.sync.time_until_due(now);

        let wait = match (countdown, sync) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        if let Some(wait) = wait {
            ctx.request_repaint_after(wait);
        }
    }
}

/// Pick the launch data for this session.
///
/// An explicit path (command line, then config) wins over the bundled data.
/// When that file cannot be used the bundled data is shown instead.
pub fn resolve_board(
    data_override: Option<&Path>,
    config: &AppConfig,
) -> (LaunchBoard, Option<String>) {
    let bundled = BundledLaunchSource;
    let path = data_override.or(config.data_file.as_deref());

    match path {
        Some(path) => {
            log::info!("Reading launches from {}", path.display());
            LaunchBoard::load_or_fallback(&JsonFileLaunchSource::new(path), &bundled)
        }
        None => LaunchBoard::load_or_fallback(&bundled, &bundled),
    }
}
