use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;

static LOGGER_CONFIG: Lazy<RwLock<LoggingConfig>> =
    Lazy::new(|| RwLock::new(LoggingConfig::default()));

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub enum LogLevel {
    INFO,
    VERBOSE,
}

// Every macro has a `target: CC` form for free functions; the short form
// expects an associated `Self::CC` component code.
#[macro_export]
macro_rules! logln {
    (target: $cc:expr, $($arg:tt)+) => {
        if $crate::util::logging::is_enabled($cc) {
            println!(
                "{} [{}] [{}:{}] {}",
                $crate::util::logging::timestamp(),
                $cc,
                file!(),
                line!(),
                format_args!($($arg)+)
            );
        }
    };
    ($($arg:tt)+) => {
        $crate::logln!(target: Self::CC, $($arg)+)
    };
}

#[macro_export]
macro_rules! logvbln {
    (target: $cc:expr, $($arg:tt)+) => {
        if $crate::util::logging::is_enabled($cc)
            && $crate::util::logging::is_at_level($cc, $crate::util::logging::LogLevel::VERBOSE)
        {
            println!(
                "{} [{}] [{}:{}] {}",
                $crate::util::logging::timestamp(),
                $cc,
                file!(),
                line!(),
                format_args!($($arg)+)
            );
        }
    };
    ($($arg:tt)+) => {
        $crate::logvbln!(target: Self::CC, $($arg)+)
    };
}

#[macro_export]
macro_rules! logerr {
    (target: $cc:expr, $($arg:tt)+) => {
        if $crate::util::logging::is_enabled($cc) {
            eprintln!(
                "{} [{}] [{}:{}] ERROR {}",
                $crate::util::logging::timestamp(),
                $cc,
                file!(),
                line!(),
                format_args!($($arg)+)
            );
        }
    };
    ($($arg:tt)+) => {
        $crate::logerr!(target: Self::CC, $($arg)+)
    };
}

pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn is_enabled(cc: &str) -> bool {
    LOGGER_CONFIG
        .read()
        .map(|config| config.cc_enabled(cc))
        .unwrap_or(true)
}

pub fn is_at_level(cc: &str, level: LogLevel) -> bool {
    LOGGER_CONFIG
        .read()
        .map(|config| config.cc_at_level(cc, level))
        .unwrap_or(false)
}

pub fn disable_cc(cc: &'static str) {
    if let Ok(mut config) = LOGGER_CONFIG.write() {
        config.disable_cc(cc);
    }
}

pub fn enable_cc(cc: &'static str, level: LogLevel) {
    if let Ok(mut config) = LOGGER_CONFIG.write() {
        config.enable_cc(cc, level);
    }
}

pub fn set_global_logging(enabled: bool) {
    if let Ok(mut config) = LOGGER_CONFIG.write() {
        config.global_tracing_enabled = enabled;
    }
}

pub fn set_global_level(level: LogLevel) {
    if let Ok(mut config) = LOGGER_CONFIG.write() {
        config.global_level = level;
    }
}

pub struct LoggingConfig {
    global_tracing_enabled: bool,
    global_level: LogLevel,
    flags: HashMap<&'static str, (bool, LogLevel)>, // <component code, (enabled, level)>
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            global_tracing_enabled: true,
            global_level: LogLevel::INFO,
            flags: Default::default(),
        }
    }
}

impl LoggingConfig {
    pub fn cc_enabled(&self, cc: &str) -> bool {
        if !self.global_tracing_enabled {
            return false;
        }

        self.flags.get(cc).map_or(true, |flag| flag.0)
    }

    pub fn cc_at_level(&self, cc: &str, level: LogLevel) -> bool {
        if self.global_level >= level {
            return true;
        }

        self.flags.get(cc).map_or(false, |flag| flag.1 >= level)
    }

    pub fn enable_cc(&mut self, cc: &'static str, level: LogLevel) {
        self.flags.insert(cc, (true, level));
    }

    pub fn disable_cc(&mut self, cc: &'static str) {
        self.flags.insert(cc, (false, LogLevel::INFO));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_default_to_enabled_at_info() {
        let config = LoggingConfig::default();

        assert!(config.cc_enabled("ReviewsDB"));
        assert!(config.cc_at_level("ReviewsDB", LogLevel::INFO));
        assert!(!config.cc_at_level("ReviewsDB", LogLevel::VERBOSE));
    }

    #[test]
    fn per_component_flags_override_defaults() {
        let mut config = LoggingConfig::default();
        config.disable_cc("GalleryDB");
        config.enable_cc("App", LogLevel::VERBOSE);

        assert!(!config.cc_enabled("GalleryDB"));
        assert!(config.cc_at_level("App", LogLevel::VERBOSE));
    }

    #[test]
    fn global_switch_silences_everything() {
        let mut config = LoggingConfig::default();
        config.enable_cc("App", LogLevel::VERBOSE);
        config.global_tracing_enabled = false;

        assert!(!config.cc_enabled("App"));
    }
}
