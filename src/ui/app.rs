/// Main application structure and lifecycle management
use super::{steps, widgets};
use crate::config::Config;
use crate::core::{RepaintHook, StyleAssistant};
use crate::onboarding::{
    AnalysisRun, BehavioralForm, PhotoUpload, PreferencesForm, UploadState, UserProfile, Wizard,
    WizardStep,
};
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// How often to repaint while a simulated progress bar is moving
const PROGRESS_REPAINT: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsTab {
    Features,
    Colors,
    Personality,
    Looks,
}

pub struct OnboardingApp {
    pub config: Config,
    pub wizard: Wizard,
    pub profile: UserProfile,
    pub photo: PhotoUpload,
    pub photo_texture: Option<egui::TextureHandle>,
    pub photo_path: String,
    pub notice: Option<String>,
    pub preferences: PreferencesForm,
    pub behavioral: BehavioralForm,
    pub analysis: Option<AnalysisRun>,
    pub results_tab: ResultsTab,
    pub assistant: StyleAssistant,
    pub chat_input: String,
}

impl OnboardingApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let ctx = cc.egui_ctx.clone();
        let repaint: RepaintHook = Arc::new(move || ctx.request_repaint());
        let assistant = StyleAssistant::new(&config).with_repaint(repaint);
        log::info!(
            "💬 Ассистент {} готов (сессия {})",
            assistant.assistant_name(),
            assistant.conversation().session_id()
        );

        Self {
            photo: PhotoUpload::new(&config),
            config,
            wizard: Wizard::default(),
            profile: UserProfile::default(),
            photo_texture: None,
            photo_path: String::new(),
            notice: None,
            preferences: PreferencesForm::default(),
            behavioral: BehavioralForm::default(),
            analysis: None,
            results_tab: ResultsTab::Features,
            assistant,
            chat_input: String::new(),
        }
    }

    pub fn go_next(&mut self) {
        if self.wizard.next() {
            self.notice = None;
        }
    }

    pub fn go_prev(&mut self) {
        if self.wizard.prev() {
            self.notice = None;
        }
    }

    pub fn open_assistant(&mut self) {
        self.wizard.go_to(WizardStep::Assistant);
    }

    /// Starts over: forms, photo and chat are cleared, pending replies cancelled.
    pub fn restart(&mut self) {
        self.assistant.reset();
        self.photo.remove();
        self.photo_texture = None;
        self.photo_path.clear();
        self.profile = UserProfile::default();
        self.preferences = PreferencesForm::default();
        self.behavioral = BehavioralForm::default();
        self.analysis = None;
        self.notice = None;
        self.wizard = Wizard::default();
        log::info!("🔄 Онбординг начат заново");
    }

    pub fn select_photo_path(&mut self, ctx: &egui::Context) {
        let path = PathBuf::from(self.photo_path.trim());
        let result = self.photo.select_path(&path).map(|_| ());
        self.finish_selection(ctx, result);
    }

    /// Handles files dropped onto the window while the photo step is open.
    pub fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };
        if matches!(self.photo.state(), UploadState::Uploading(_)) {
            return;
        }

        let result = if let Some(path) = &file.path {
            self.photo_path = path.display().to_string();
            self.photo.select_path(path).map(|_| ())
        } else if let Some(bytes) = &file.bytes {
            self.photo.select_bytes(&file.name, bytes).map(|_| ())
        } else {
            return;
        };
        self.finish_selection(ctx, result);
    }

    fn finish_selection(
        &mut self,
        ctx: &egui::Context,
        result: Result<(), crate::error::PhotoError>,
    ) {
        match result {
            Ok(()) => {
                self.notice = None;
                self.load_photo_texture(ctx);
            }
            Err(e) => {
                log::warn!("⚠️ Фото отклонено: {}", e);
                self.notice = Some(e.to_string());
            }
        }
    }

    fn load_photo_texture(&mut self, ctx: &egui::Context) {
        self.photo_texture = self.photo.photo().map(|photo| {
            let size = [photo.preview.width() as usize, photo.preview.height() as usize];
            let color_image =
                egui::ColorImage::from_rgba_unmultiplied(size, photo.preview.as_raw());
            ctx.load_texture("user_photo", color_image, egui::TextureOptions::LINEAR)
        });
    }

    pub fn remove_photo(&mut self) {
        if self.photo.remove() {
            self.photo_texture = None;
            self.profile.photo = None;
        }
    }

    /// Advances simulated progress bars and picks up assistant replies.
    fn tick(&mut self, ctx: &egui::Context) {
        self.assistant.poll();

        if let Some(info) = self.photo.poll() {
            self.profile.photo = Some(info.clone());
        }
        if matches!(self.photo.state(), UploadState::Uploading(_)) {
            ctx.request_repaint_after(PROGRESS_REPAINT);
        }

        if self.wizard.current() == WizardStep::Results {
            let tick = self.config.analysis_tick;
            let run = self.analysis.get_or_insert_with(|| AnalysisRun::start(tick));
            if !run.is_done() {
                ctx.request_repaint_after(PROGRESS_REPAINT);
            }
        }
    }

    pub fn send_chat(&mut self, text: &str) {
        if self.assistant.send(text) {
            log::debug!("📨 Сообщение отправлено");
        }
    }

    fn draw_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Onboarding");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format!(
                    "Passo {} de {}",
                    self.wizard.current().number(),
                    WizardStep::ALL.len()
                ));
            });
        });
        ui.add(egui::ProgressBar::new(self.wizard.progress() / 100.0).desired_height(6.0));
        ui.add_space(4.0);
        widgets::step_indicator(ui, &self.wizard);
    }

    fn draw_navigation(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!self.wizard.is_first(), egui::Button::new("◀ Anterior"))
                .clicked()
            {
                self.go_prev();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if self.wizard.is_last() { "Finalizar" } else { "Próximo ▶" };
                if ui
                    .add_enabled(!self.wizard.is_last(), egui::Button::new(label))
                    .clicked()
                {
                    self.go_next();
                }
            });
        });
    }

    fn draw_step(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let step = self.wizard.current();
        ui.label(egui::RichText::new(step.title()).size(20.0).strong());
        ui.weak(step.description());
        ui.add_space(12.0);

        match step {
            WizardStep::Welcome => {
                if steps::draw_welcome(ui) {
                    self.go_next();
                }
            }
            WizardStep::Photo => self.draw_photo_step(ui, ctx),
            WizardStep::Preferences => self.draw_preferences_step(ui),
            WizardStep::Behavioral => self.draw_behavioral_step(ui),
            WizardStep::Results => self.draw_results_step(ui),
            WizardStep::Assistant => self.draw_assistant_step(ui),
        }
    }
}

impl eframe::App for OnboardingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick(ctx);

        if self.wizard.current() == WizardStep::Photo {
            self.handle_dropped_files(ctx);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            self.draw_header(ui);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("navigation").show(ctx, |ui| {
            ui.add_space(6.0);
            self.draw_navigation(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.wizard.current() == WizardStep::Assistant {
                // У чата своя прокрутка
                self.draw_step(ui, ctx);
            } else {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.draw_step(ui, ctx));
            }
        });
    }
}
