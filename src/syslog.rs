// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Facilities for sending log messages to the platform log.
//!
//! The plugin runs inside the host compositor, so the logger is process-wide. It is installed at
//! most once, and only if the host has not installed a `log` logger of its own. On Android
//! messages go to liblog; elsewhere they go to stderr.

use std::sync::Once;

use cfg_if::cfg_if;

use crate::config::Config;

static INIT: Once = Once::new();

/// Installs the logger described by `config`.
///
/// Every call after the first has no effect.
pub fn init(config: &Config) {
    INIT.call_once(|| {
        // Fails only if the host already owns the `log` facade. Its logger then receives our
        // records instead.
        let _ = platform::install(config);
    });
}

cfg_if! {
    if #[cfg(target_os = "android")] {
        mod platform {
            use std::ffi::CString;
            use std::os::raw::c_int;

            use android_log_sys::__android_log_is_loggable;
            use android_log_sys::__android_log_write;
            use android_log_sys::LogPriority;
            use log::Level;
            use log::Log;
            use log::Metadata;
            use log::Record;
            use log::SetLoggerError;

            use crate::config::Config;

            /// Priority liblog assumes for the tag when no `log.tag.*` property is set.
            const DEFAULT_PRIORITY: LogPriority = LogPriority::VERBOSE;

            fn priority(level: Level) -> LogPriority {
                match level {
                    Level::Error => LogPriority::ERROR,
                    Level::Warn => LogPriority::WARN,
                    Level::Info => LogPriority::INFO,
                    Level::Debug => LogPriority::DEBUG,
                    Level::Trace => LogPriority::VERBOSE,
                }
            }

            struct AndroidLogger {
                tag: CString,
            }

            impl AndroidLogger {
                fn is_loggable(&self, priority: LogPriority) -> bool {
                    // SAFETY: the tag is NUL terminated and outlives the call.
                    unsafe {
                        __android_log_is_loggable(
                            priority as c_int,
                            self.tag.as_ptr(),
                            DEFAULT_PRIORITY as c_int,
                        ) != 0
                    }
                }
            }

            impl Log for AndroidLogger {
                fn enabled(&self, metadata: &Metadata) -> bool {
                    metadata.level() <= log::max_level()
                        && self.is_loggable(priority(metadata.level()))
                }

                fn log(&self, record: &Record) {
                    if !self.enabled(record.metadata()) {
                        return;
                    }
                    let priority = priority(record.level());
                    let message = match (record.file(), record.line()) {
                        (Some(file), Some(line)) => format!("[{}:{}] {}", file, line, record.args()),
                        _ => record.args().to_string(),
                    };
                    let Ok(message) = CString::new(message) else {
                        return;
                    };
                    // SAFETY: both strings are NUL terminated and outlive the call.
                    unsafe {
                        __android_log_write(priority as c_int, self.tag.as_ptr(), message.as_ptr())
                    };
                }

                fn flush(&self) {}
            }

            pub fn install(config: &Config) -> Result<(), SetLoggerError> {
                let tag = CString::new(config.log_tag).unwrap_or_default();
                log::set_boxed_logger(Box::new(AndroidLogger { tag }))?;
                log::set_max_level(config.log_level);
                Ok(())
            }

            #[cfg(test)]
            mod tests {
                use super::*;

                #[test]
                fn priorities() {
                    assert_eq!(priority(Level::Error) as c_int, LogPriority::ERROR as c_int);
                    assert_eq!(priority(Level::Warn) as c_int, LogPriority::WARN as c_int);
                    assert_eq!(priority(Level::Info) as c_int, LogPriority::INFO as c_int);
                    assert_eq!(priority(Level::Debug) as c_int, LogPriority::DEBUG as c_int);
                    assert_eq!(priority(Level::Trace) as c_int, LogPriority::VERBOSE as c_int);
                }

                #[test]
                fn liblog_gates_records() {
                    let logger = AndroidLogger {
                        tag: CString::new("gbm_gralloc_yagi_test").unwrap(),
                    };
                    // Nothing sets log.tag.gbm_gralloc_yagi_test, so liblog falls back to the
                    // default priority and lets errors through.
                    assert!(logger.is_loggable(LogPriority::ERROR));
                    // SILENT is never loggable, whatever the properties say.
                    assert!(!logger.is_loggable(LogPriority::SILENT));
                }
            }
        }
    } else {
        mod platform {
            use std::io::Write;

            use log::SetLoggerError;

            use crate::config::Config;

            pub fn install(config: &Config) -> Result<(), SetLoggerError> {
                let tag = config.log_tag;
                env_logger::Builder::new()
                    .filter_level(config.log_level)
                    .target(env_logger::Target::Stderr)
                    .format(move |buf, record| {
                        writeln!(
                            buf,
                            "{} [{}:{}:{}] {}",
                            tag,
                            record.level(),
                            record.file().unwrap_or("?"),
                            record.line().unwrap_or(0),
                            record.args()
                        )
                    })
                    .try_init()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_syslog() {
        init(&Config::default());
    }

    #[test]
    fn init_twice() {
        init(&Config::with_log_level(Some("debug")));
        init(&Config::with_log_level(Some("off")));
    }

    #[test]
    fn macros() {
        init(&Config::default());
        log::error!("this is an error {}", 3);
        log::warn!("this is a warning {}", "uh oh");
        log::info!("this is info {}", true);
        log::debug!("this is debug info {:?}", Some("helpful stuff"));
    }
}
