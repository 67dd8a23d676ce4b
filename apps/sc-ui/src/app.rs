use crate::submit_worker::{SubmitWorker, WorkerMessage};
use crate::views;
use crate::views::SectionActions;
use sc_app::{DEFAULT_ENDPOINT, FormState, Notification, NotifyLevel, SubmitClient, SubmitError};
use sc_catalog::Category;
use sc_store::DraftStore;
use std::sync::mpsc::TryRecvError;

pub struct ScorecardApp {
    form: FormState,
    store: Option<DraftStore>,
    endpoint: String,
    active_tab: FormTab,
    submit_worker: Option<SubmitWorker>,
    feed: Vec<Notification>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FormTab {
    BasicInfo,
    Platform,
    Facilities,
    Review,
}

impl ScorecardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let store = Self::init_store();
        let mut form = FormState::new();
        form.restore_draft(store.as_ref());

        Self {
            form,
            store,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            active_tab: FormTab::BasicInfo,
            submit_worker: None,
            feed: Vec::new(),
        }
    }

    fn init_store() -> Option<DraftStore> {
        let root = eframe::storage_dir("StationCard")
            .map(|dir| dir.join("drafts"))
            .unwrap_or_else(|| std::env::temp_dir().join("stationcard-drafts"));
        match DraftStore::new(root) {
            Ok(store) => Some(store),
            Err(err) => {
                tracing::warn!(error = %err, "draft store unavailable, drafts disabled");
                None
            }
        }
    }

    /// Pick up the submission result whenever it lands; switching tabs does
    /// not cancel the request.
    fn poll_worker(&mut self) {
        let mut done = false;
        if let Some(worker) = &self.submit_worker {
            match worker.result_rx.try_recv() {
                Ok(WorkerMessage::Complete) => {
                    self.form.complete_submission(self.store.as_ref());
                    done = true;
                }
                Ok(WorkerMessage::Failed { error }) => {
                    self.form.fail_submission(&error);
                    done = true;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.form.fail_submission(&SubmitError::Transport(
                        "submission worker exited without a result".to_string(),
                    ));
                    done = true;
                }
            }
        }
        if done {
            self.submit_worker = None;
        }
    }

    fn start_submission(&mut self) {
        if self.submit_worker.is_some() {
            return;
        }
        if let Some(payload) = self.form.prepare_submission(chrono::Utc::now()) {
            let client = SubmitClient::new(self.endpoint.clone());
            self.submit_worker = Some(SubmitWorker::start(client, payload));
        }
    }

    fn apply_section_actions(&mut self, actions: SectionActions) {
        for (id, score) in actions.score_changes {
            self.form.set_score(&id, score);
        }
        for (id, text) in actions.remark_changes {
            self.form.set_remark(&id, text);
        }
    }

    fn show_section(&mut self, ui: &mut egui::Ui, category: Category) {
        let parameters: Vec<_> = sc_catalog::by_category(category).collect();
        let record = self.form.record();
        let actions = views::section_view::show(
            ui,
            &format!("{} Inspection", category.label()),
            &parameters,
            record.scores(),
            record.remarks(),
        );
        self.apply_section_actions(actions);
    }

    fn show_feed(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Notifications").strong());
            if !self.feed.is_empty() && ui.small_button("Clear").clicked() {
                self.feed.clear();
            }
        });
        if self.feed.is_empty() {
            ui.label(egui::RichText::new("Nothing yet").weak());
        }
        for notice in self.feed.iter().rev().take(4) {
            ui.colored_label(level_color(notice.level), &notice.message);
        }
        ui.add_space(4.0);
    }
}

fn level_color(level: NotifyLevel) -> egui::Color32 {
    match level {
        NotifyLevel::Info => egui::Color32::from_rgb(59, 130, 246),
        NotifyLevel::Success => egui::Color32::from_rgb(34, 197, 94),
        NotifyLevel::Error => egui::Color32::from_rgb(239, 68, 68),
    }
}

impl eframe::App for ScorecardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        self.feed.extend(self.form.take_notices());

        if self.submit_worker.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Station Cleanliness Inspection Score Card");

            let record = self.form.record();
            let catalog_len = sc_catalog::parameters().len();
            let max_possible = sc_catalog::max_possible_score();
            let completion = record.completion_percentage(catalog_len);

            ui.horizontal(|ui| {
                ui.label(format!("Progress: {completion}% Complete"));
                ui.separator();
                ui.label(format!(
                    "Score: {}/{} ({}%)",
                    record.total_score(),
                    max_possible,
                    record.score_percentage(max_possible)
                ));
                if self.form.is_submitting() {
                    ui.separator();
                    ui.spinner();
                    ui.label("Submitting...");
                }
            });
            ui.add(egui::ProgressBar::new(completion as f32 / 100.0).desired_height(6.0));
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("status_feed").show(ctx, |ui| {
            self.show_feed(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_tab, FormTab::BasicInfo, "Basic Info");
                ui.selectable_value(&mut self.active_tab, FormTab::Platform, "Platform Areas");
                ui.selectable_value(&mut self.active_tab, FormTab::Facilities, "Facilities");
                ui.selectable_value(&mut self.active_tab, FormTab::Review, "Review & Submit");
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match self.active_tab {
                FormTab::BasicInfo => {
                    let actions = views::basic_info_view::show(ui, self.form.record());
                    for (field, value) in actions.changes {
                        self.form.set_metadata(field, value);
                    }
                }
                FormTab::Platform => self.show_section(ui, Category::Platform),
                FormTab::Facilities => self.show_section(ui, Category::Facilities),
                FormTab::Review => {
                    let actions = views::summary_view::show(
                        ui,
                        self.form.record(),
                        self.form.is_submitting(),
                    );
                    if actions.save_clicked {
                        self.form.save_draft(self.store.as_ref());
                    }
                    if actions.submit_clicked {
                        self.start_submission();
                    }
                }
            });
        });
    }
}
