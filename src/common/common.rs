use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match parse_log_level(&config.log_level) {
        Some(level) => level,
        None => {
            eprintln!("Unknown log level encountered: '{}', falling back to 'info'", config.log_level);
            log::LevelFilter::Info
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        eprintln!("Failed to initialize logging: {err}");
        return;
    }
    info!("logging initialized.");
}
