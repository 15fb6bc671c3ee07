/// Chat panel: bubbles, suggestion chips, typing indicator and input line
use crate::core::{Message, StyleAssistant};
use eframe::egui;

/// Constants for chat styling
pub const CHAT_HEIGHT: f32 = 460.0;
pub const INPUT_ROW_HEIGHT: f32 = 40.0;
pub const BUBBLE_WIDTH_RATIO: f32 = 0.8;

/// Draws the whole chat and returns text to send, if any.
///
/// Text comes either from the input line (Enter or the send button) or
/// from a clicked suggestion chip.
pub fn draw_chat(
    ui: &mut egui::Ui,
    assistant: &StyleAssistant,
    input_text: &mut String,
) -> Option<String> {
    let mut outgoing = None;
    let name = assistant.assistant_name();

    ui.label(egui::RichText::new(format!("💬 Chat com {}", name)).strong());
    ui.separator();

    egui::ScrollArea::vertical()
        .max_height(CHAT_HEIGHT - INPUT_ROW_HEIGHT)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in assistant.conversation().messages() {
                if let Some(suggestion) = draw_message(ui, message, name) {
                    outgoing = Some(suggestion);
                }
            }

            // Индикатор "печатает..."
            if assistant.is_typing() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.weak(format!("{} está digitando...", name));
                });
            }
        });

    ui.separator();

    ui.horizontal(|ui| {
        let input_width = ui.available_width() - 48.0;
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Digite sua pergunta sobre estilo...")
                .desired_width(input_width),
        );

        let can_send = !input_text.trim().is_empty() && !assistant.is_typing();
        let enter_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let send_clicked = ui.add_enabled(can_send, egui::Button::new("➤")).clicked();

        if (enter_pressed || send_clicked) && can_send {
            outgoing = Some(std::mem::take(input_text));
            response.request_focus();
        }
    });

    outgoing
}

/// One bubble; returns the suggestion the user clicked under it.
fn draw_message(ui: &mut egui::Ui, message: &Message, assistant_name: &str) -> Option<String> {
    let mut clicked = None;
    let max_width = ui.available_width() * BUBBLE_WIDTH_RATIO;

    let (layout, fill, text_color, author) = if message.is_user() {
        (
            egui::Layout::right_to_left(egui::Align::TOP),
            super::widgets::ACCENT,
            egui::Color32::WHITE,
            "Você",
        )
    } else {
        (
            egui::Layout::left_to_right(egui::Align::TOP),
            ui.visuals().faint_bg_color,
            ui.visuals().text_color(),
            assistant_name,
        )
    };

    ui.with_layout(layout, |ui| {
        ui.vertical(|ui| {
            ui.set_max_width(max_width);
            ui.horizontal(|ui| {
                ui.small(author);
                ui.weak(message.timestamp.format("%H:%M").to_string());
            });

            egui::Frame::new()
                .fill(fill)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 6))
                .show(ui, |ui| {
                    let text = egui::RichText::new(&message.content).color(text_color);
                    ui.add(egui::Label::new(text).wrap());
                });

            if !message.suggestions().is_empty() {
                ui.weak("Sugestões:");
                ui.horizontal_wrapped(|ui| {
                    for suggestion in message.suggestions() {
                        if ui.small_button(suggestion).clicked() {
                            log::debug!("🟢 Подсказка: {}", suggestion);
                            clicked = Some(suggestion.clone());
                        }
                    }
                });
            }
        });
    });

    ui.add_space(6.0);
    clicked
}
