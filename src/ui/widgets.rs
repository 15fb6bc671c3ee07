/// Small reusable pieces: swatches, step indicator, checklist rows
use crate::onboarding::{StepState, Wizard, WizardStep};
use eframe::egui;

pub const SWATCH_SIZE: f32 = 22.0;
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(190, 120, 150);

/// 0xRRGGBB → Color32
pub fn rgb(hex: u32) -> egui::Color32 {
    egui::Color32::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Row of round color swatches
pub fn swatches(ui: &mut egui::Ui, colors: &[u32]) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        for &hex in colors {
            let (rect, _) = ui
                .allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), SWATCH_SIZE / 2.0, rgb(hex));
            ui.painter().circle_stroke(
                rect.center(),
                SWATCH_SIZE / 2.0,
                egui::Stroke::new(2.0, egui::Color32::WHITE),
            );
        }
    });
}

/// Renders the six steps with completed/active/upcoming markers
pub fn step_indicator(ui: &mut egui::Ui, wizard: &Wizard) {
    ui.horizontal_wrapped(|ui| {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            let state = wizard.state_of(*step);
            let (marker, color) = match state {
                StepState::Completed => ("✔".to_string(), ACCENT),
                StepState::Active => (step.icon().to_string(), ACCENT),
                StepState::Upcoming => (step.icon().to_string(), ui.visuals().weak_text_color()),
            };

            let mut title =
                egui::RichText::new(format!("{} {}", marker, step.title())).color(color);
            if state == StepState::Active {
                title = title.strong();
            }
            ui.label(title);

            if i + 1 < WizardStep::ALL.len() {
                ui.weak("—");
            }
        }
    });
}

/// One line of the analysis checklist
pub fn checklist_row(ui: &mut egui::Ui, label: &str, done: bool) {
    ui.horizontal(|ui| {
        if done {
            ui.colored_label(egui::Color32::from_rgb(60, 160, 90), "✔");
            ui.label(label);
        } else {
            ui.spinner();
            ui.weak(label);
        }
    });
}

/// Percentage badge, e.g. "92% confiança"
pub fn badge(ui: &mut egui::Ui, text: impl Into<String>) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.small(text.into());
        });
}

/// Slider with the extreme labels printed under it
pub fn labeled_slider(
    ui: &mut egui::Ui,
    value: &mut u32,
    range: std::ops::RangeInclusive<u32>,
    step: u32,
    left: &str,
    right: &str,
) -> bool {
    let changed = ui
        .add(egui::Slider::new(value, range).step_by(step as f64))
        .changed();
    ui.horizontal(|ui| {
        ui.small(left);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.small(right);
        });
    });
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_splits_channels() {
        assert_eq!(rgb(0xFF6B9D), egui::Color32::from_rgb(0xFF, 0x6B, 0x9D));
        assert_eq!(rgb(0x000000), egui::Color32::from_rgb(0, 0, 0));
    }
}
