use std::str::FromStr;

use fern::colors::{Color, ColoredLevelConfig};

use crate::env::get_env;

pub fn setup_logger(
    levels: Option<Vec<(String, log::LevelFilter)>>,
) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig {
        trace: Color::Cyan,
        debug: Color::Magenta,
        info: Color::Green,
        warn: Color::Red,
        error: Color::BrightRed,
    };

    let log_level_str = get_env("LOG_LEVEL", Some("INFO".to_string()));
    let log_level = log::LevelFilter::from_str(&log_level_str).expect("LOG_LEVEL invalid");

    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}",
                chrono::Local::now().format("[%H:%M:%S.%f]"),
                colors.color(record.level()),
                message
            ))
        })
        .chain(std::io::stdout())
        .level(log::LevelFilter::Warn)
        .level_for("dgoods_migration_rs", log_level)
        .level_for("dgoods_toolkit", log_level)
        .level_for("dgoods_utils", log_level);
    if let Some(levels) = levels {
        for (module, level) in levels {
            dispatch = dispatch.level_for(module, level);
        }
    }

    dispatch.apply()?;
    Ok(())
}
