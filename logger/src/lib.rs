//! Default logging setup for the concord tools
#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::{sync::Mutex, time::Instant};

/// Environment variable holding the `env_logger` filter.
pub const FILTER_ENV: &str = "CONCORD_LOG";
/// Environment variable controlling whether log output is coloured.
pub const STYLE_ENV: &str = "CONCORD_LOG_STYLE";

const TIMESTAMP_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::BrightBlack)));

const TARGET_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Magenta)));

/// Returns an `env_logger` builder configured with the default concord format.
///
/// Every record is prefixed with the time elapsed since the builder was created and its level.
/// Whenever the target of a record differs from the previous one, the target is written on a line
/// of its own first.
pub fn builder() -> env_logger::Builder {
    let start_time = Instant::now();
    let last_target = Mutex::new(String::new());

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or(FILTER_ENV, "info")
            .write_style(STYLE_ENV),
    );
    builder.format(move |buf, record| {
        use std::io::Write;

        let timestamp = start_time.elapsed();
        let level = record.level();
        let target = record.target();

        let mut last_target = last_target.lock().unwrap_or_else(|err| err.into_inner());

        if target != *last_target {
            last_target.clear();
            last_target.push_str(target);

            writeln!(
                buf,
                "{} {}",
                format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
                format_args!("{style}{target}{style:#}", style = TARGET_STYLE)
            )?;
        }
        writeln!(
            buf,
            "{} {} {}",
            format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
            format_args!(
                "{style}{level:<5}{style:#}",
                style = buf.default_level_style(level),
            ),
            record.args(),
        )
    });
    builder
}

/// Perform the default logging setup used by the concord binary.
///
/// Panics if a global logger was already installed.
pub fn setup() {
    builder().init();
}

/// Like [`setup`], but leaves an already installed logger in place.
///
/// Returns `true` if the logger was installed by this call.
pub fn try_setup() -> bool {
    builder().try_init().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_is_idempotent_with_try() {
        let _ = try_setup();
        assert!(!try_setup());
        log::info!("logger installed");
    }
}
