// Модули приложения
mod ai;
mod config;
mod core;
mod error;
mod logger;
mod onboarding;
mod ui;

use anyhow::anyhow;
use config::Config;
use eframe::NativeOptions;
use ui::OnboardingApp;

fn main() -> anyhow::Result<()> {
    let config = Config::default();

    // Инициализируем логирование
    logger::init(&config.log_dir);
    log::info!("🚀 {} запущена", config.assistant_name);

    // Создаем tokio runtime для отложенных ответов ассистента
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let title = format!("{} · Onboarding de estilo", config.assistant_name);
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(OnboardingApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("Не удалось запустить окно: {}", e))?;

    log::info!("👋 Завершение работы");
    Ok(())
}
