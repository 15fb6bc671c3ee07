/// Модуль для инициализации логирования
/// Пишет в <log_dir>/luna.log; если файл не открыть, то в stderr

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use log::LevelFilter;

pub fn init(log_dir: &Path) {
    let mut builder = env_logger::Builder::new();

    // Читаем RUST_LOG переменную если она установлена
    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        // Зависимости UI слишком многословны
        builder.filter_module("eframe", LevelFilter::Warn);
        builder.filter_module("egui", LevelFilter::Warn);
        builder.filter_module("wgpu", LevelFilter::Warn);
        builder.filter_module("winit", LevelFilter::Warn);
    }

    // Формат логов: [HH:MM:SS LEVEL] модуль - сообщение
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    let log_path = log_dir.join("luna.log");
    let file = std::fs::create_dir_all(log_dir).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
    });

    match file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file))).init();
            log::info!("Логирование инициализировано ✓ ({})", log_path.display());
        }
        Err(e) => {
            builder.target(env_logger::Target::Stderr).init();
            log::warn!("⚠️ Не удалось открыть {}: {}, пишем в stderr", log_path.display(), e);
        }
    }
}
