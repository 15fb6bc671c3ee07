/// Step bodies of the onboarding wizard
use super::app::{OnboardingApp, ResultsTab};
use super::{chat, widgets};
use crate::onboarding::analysis::{
    COLOR_RECOMMENDATIONS, FACIAL_FEATURES, LOOKS, PERSONALITY_INSIGHTS,
};
use crate::onboarding::behavioral::{LIFESTYLE_QUESTIONS, PERSONALITY_TRAITS};
use crate::onboarding::preferences::{
    ADVENTURE_RANGE, ADVENTURE_STEP, BUDGET_RANGE, BUDGET_STEP, MAX_STYLES, OCCASIONS, PALETTES,
    STYLES,
};
use crate::onboarding::{AnalysisReport, Milestone, UploadState, WizardStep};
use eframe::egui;

const PREVIEW_MAX: f32 = 240.0;

/// Welcome screen. Returns true when "Começar" is clicked.
pub fn draw_welcome(ui: &mut egui::Ui) -> bool {
    ui.label("Vamos descobrir o seu estilo em poucos passos:");
    ui.add_space(8.0);
    for step in &WizardStep::ALL[1..] {
        ui.horizontal(|ui| {
            ui.label(step.icon());
            ui.strong(step.title());
            ui.weak(step.description());
        });
    }
    ui.add_space(16.0);
    ui.button("Começar ▶").clicked()
}

fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(10.0);
    ui.label(egui::RichText::new(title).strong().size(15.0));
    ui.add_space(4.0);
}

impl OnboardingApp {
    pub fn draw_photo_step(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let state = self.photo.state();
        let uploading = matches!(state, UploadState::Uploading(_));

        ui.horizontal(|ui| {
            ui.label("Arquivo:");
            ui.add_enabled(
                !uploading,
                egui::TextEdit::singleline(&mut self.photo_path)
                    .hint_text("/caminho/para/foto.jpg")
                    .desired_width(360.0),
            );
            let can_select = !uploading && !self.photo_path.trim().is_empty();
            if ui.add_enabled(can_select, egui::Button::new("Selecionar")).clicked() {
                self.select_photo_path(ctx);
            }
        });

        if self.photo.photo().is_none() {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(24))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new("📷").size(32.0));
                        ui.label("Arraste sua foto para esta janela");
                        ui.weak(format!(
                            "JPG, PNG ou WEBP até {} MB",
                            self.photo.limit_bytes() / (1024 * 1024)
                        ));
                    });
                });
        }

        if let Some(notice) = &self.notice {
            ui.colored_label(ui.visuals().error_fg_color, notice);
        }

        let Some(photo) = self.photo.photo() else {
            return;
        };
        let info = photo.info.clone();

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if let Some(texture) = &self.photo_texture {
                ui.add(egui::Image::new(texture).max_size(egui::vec2(PREVIEW_MAX, PREVIEW_MAX)));
            }
            ui.vertical(|ui| {
                ui.strong(&info.name);
                ui.weak(format!("{} × {} · {}", info.width, info.height, info.format));
                ui.weak(format!("{:.1} KB", info.size_bytes as f64 / 1024.0));
                ui.add_space(6.0);

                match state {
                    UploadState::Uploading(_) => {
                        ui.add(
                            egui::ProgressBar::new(self.photo.upload_percent() as f32 / 100.0)
                                .show_percentage(),
                        );
                        ui.weak("Enviando...");
                    }
                    UploadState::Uploaded => {
                        ui.colored_label(egui::Color32::from_rgb(60, 160, 90), "✔ Foto enviada");
                    }
                    UploadState::Empty => {}
                }

                if ui.add_enabled(!uploading, egui::Button::new("🗑 Remover")).clicked() {
                    self.remove_photo();
                }
            });
        });
    }

    pub fn draw_preferences_step(&mut self, ui: &mut egui::Ui) {
        section(ui, "Paleta de cores");
        egui::Grid::new("palettes").num_columns(3).spacing([12.0, 12.0]).show(ui, |ui| {
            for (i, palette) in PALETTES.iter().enumerate() {
                let selected = self.preferences.palette() == Some(palette.id);
                ui.vertical(|ui| {
                    widgets::swatches(ui, &palette.colors);
                    if ui.add(egui::Button::new(palette.name).selected(selected)).clicked() {
                        self.preferences.select_palette(palette.id);
                    }
                    ui.small(palette.description);
                });
                if i % 3 == 2 {
                    ui.end_row();
                }
            }
        });

        section(ui, &format!("Estilos (até {})", MAX_STYLES));
        ui.horizontal_wrapped(|ui| {
            for style in &STYLES {
                let selected = self.preferences.is_style_selected(style.id);
                let button =
                    egui::Button::new(format!("{} {}", style.icon, style.name)).selected(selected);
                if ui
                    .add_enabled(self.preferences.can_toggle_style(style.id), button)
                    .on_hover_text(style.description)
                    .clicked()
                {
                    self.preferences.toggle_style(style.id);
                }
            }
        });
        if self.preferences.style_limit_reached() {
            ui.weak("Limite de estilos atingido");
        }

        section(ui, "Ocasiões");
        ui.horizontal_wrapped(|ui| {
            for occasion in &OCCASIONS {
                let selected = self.preferences.is_occasion_selected(occasion.id);
                let button = egui::Button::new(format!("{} {}", occasion.icon, occasion.name))
                    .selected(selected);
                if ui.add(button).clicked() {
                    self.preferences.toggle_occasion(occasion.id);
                }
            }
        });

        section(ui, &format!("Orçamento mensal: R$ {}", self.preferences.budget));
        let mut budget = self.preferences.budget;
        if widgets::labeled_slider(
            ui,
            &mut budget,
            BUDGET_RANGE,
            BUDGET_STEP,
            "R$ 100",
            "R$ 2000",
        ) {
            self.preferences.set_budget(budget);
        }

        section(ui, &format!("Ousadia: {}%", self.preferences.adventurousness));
        let mut adventurousness = self.preferences.adventurousness;
        if widgets::labeled_slider(
            ui,
            &mut adventurousness,
            ADVENTURE_RANGE,
            ADVENTURE_STEP,
            "Conservador",
            "Ousado",
        ) {
            self.preferences.set_adventurousness(adventurousness);
        }

        ui.add_space(12.0);
        let complete = self.preferences.is_complete();
        if ui.add_enabled(complete, egui::Button::new("Continuar")).clicked() {
            if let Some(preferences) = self.preferences.submit() {
                log::info!("🎨 Предпочтения сохранены: палитра {}", preferences.color_palette);
                self.profile.preferences = Some(preferences);
                self.go_next();
            }
        }
        if !complete {
            ui.weak("Escolha uma paleta, ao menos um estilo e uma ocasião");
        }
    }

    pub fn draw_behavioral_step(&mut self, ui: &mut egui::Ui) {
        section(ui, "Personalidade");
        for (i, personality_trait) in PERSONALITY_TRAITS.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(personality_trait.icon);
                ui.strong(personality_trait.name);
            });
            ui.weak(personality_trait.description);
            if let Some(score) = self.behavioral.score_mut(i) {
                widgets::labeled_slider(
                    ui,
                    score,
                    0..=100,
                    1,
                    personality_trait.left_label,
                    personality_trait.right_label,
                );
            }
            ui.add_space(6.0);
        }

        section(ui, "Estilo de vida");
        for (i, question) in LIFESTYLE_QUESTIONS.iter().enumerate() {
            ui.strong(question.question);
            let current = self.behavioral.answer(i);
            ui.horizontal_wrapped(|ui| {
                for (value, label) in &question.options {
                    if ui.radio(current == Some(*value), *label).clicked() {
                        self.behavioral.set_answer(i, value);
                    }
                }
            });
            ui.add_space(6.0);
        }

        ui.add_space(12.0);
        ui.weak(format!(
            "{} de {} perguntas respondidas",
            self.behavioral.answered(),
            LIFESTYLE_QUESTIONS.len()
        ));
        if ui
            .add_enabled(self.behavioral.is_complete(), egui::Button::new("Continuar"))
            .clicked()
        {
            if let Some(behavioral) = self.behavioral.submit() {
                log::info!("🧭 Поведенческий профиль сохранён");
                self.profile.behavioral = Some(behavioral);
                self.go_next();
            }
        }
    }

    pub fn draw_results_step(&mut self, ui: &mut egui::Ui) {
        let Some(run) = self.analysis else {
            ui.spinner();
            return;
        };

        if !run.is_done() {
            let percent = run.percent();
            ui.label("Analisando seu perfil...");
            ui.add(egui::ProgressBar::new(percent as f32 / 100.0).show_percentage());
            ui.add_space(8.0);
            for milestone in Milestone::ALL {
                widgets::checklist_row(ui, milestone.label(), milestone.reached(percent));
            }
            return;
        }

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.results_tab, ResultsTab::Features, "Traços faciais");
            ui.selectable_value(&mut self.results_tab, ResultsTab::Colors, "Cores");
            ui.selectable_value(&mut self.results_tab, ResultsTab::Personality, "Personalidade");
            ui.selectable_value(&mut self.results_tab, ResultsTab::Looks, "Looks");
        });
        ui.separator();

        match self.results_tab {
            ResultsTab::Features => {
                egui::Grid::new("features").num_columns(3).striped(true).show(ui, |ui| {
                    for feature in &FACIAL_FEATURES {
                        ui.strong(feature.name);
                        ui.label(feature.value);
                        widgets::badge(ui, format!("{}% confiança", feature.confidence));
                        ui.end_row();
                    }
                });
            }
            ResultsTab::Colors => {
                for recommendation in &COLOR_RECOMMENDATIONS {
                    ui.strong(recommendation.category);
                    widgets::swatches(ui, &recommendation.colors);
                    ui.weak(recommendation.description);
                    ui.add_space(8.0);
                }
            }
            ResultsTab::Personality => {
                for insight in &PERSONALITY_INSIGHTS {
                    ui.horizontal(|ui| {
                        ui.strong(insight.trait_name);
                        ui.weak(format!("{}%", insight.score));
                    });
                    ui.add(
                        egui::ProgressBar::new(insight.score as f32 / 100.0).desired_height(8.0),
                    );
                    ui.weak(insight.description);
                    ui.add_space(8.0);
                }
            }
            ResultsTab::Looks => {
                for look in &LOOKS {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.strong(look.name);
                            widgets::badge(ui, format!("{}% match", look.confidence));
                        });
                        ui.weak(look.description);
                        for item in look.items {
                            ui.label(format!("• {}", item));
                        }
                    });
                    ui.add_space(6.0);
                }
            }
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("📋 Copiar relatório").clicked() {
                match AnalysisReport::new(&self.profile).to_json() {
                    Ok(json) => {
                        ui.ctx().copy_text(json);
                        log::info!("📋 Отчёт скопирован в буфер обмена");
                    }
                    Err(e) => log::error!("❌ Не удалось сериализовать отчёт: {}", e),
                }
            }
            if ui.button("💬 Conversar com Assistente IA").clicked() {
                self.open_assistant();
            }
        });
    }

    pub fn draw_assistant_step(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("🧹 Nova conversa").clicked() {
                self.assistant.reset();
                self.chat_input.clear();
            }
            if ui.button("🔄 Recomeçar onboarding").clicked() {
                self.restart();
            }
        });
        ui.add_space(6.0);

        if let Some(text) = chat::draw_chat(ui, &self.assistant, &mut self.chat_input) {
            self.send_chat(&text);
        }
    }
}
