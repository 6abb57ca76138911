// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Runtime configuration, read from the host process environment.

use std::env;
use std::str::FromStr;

use log::LevelFilter;

/// Environment variable holding the log level, e.g. `GBM_YAGI_LOG=debug`.
pub const LOG_LEVEL_ENV: &str = "GBM_YAGI_LOG";

/// Tag attached to every log message.
pub const LOG_TAG: &str = "gbm_gralloc_yagi";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub log_tag: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL,
            log_tag: LOG_TAG,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::with_log_level(env::var(LOG_LEVEL_ENV).ok().as_deref())
    }

    /// Builds a config from an optional level string. Unparseable levels keep the default.
    pub fn with_log_level(level: Option<&str>) -> Config {
        let log_level = level
            .map(str::trim)
            .and_then(|l| LevelFilter::from_str(l).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Config {
            log_level,
            ..Default::default()
        }
    }
}
