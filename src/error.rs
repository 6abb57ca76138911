// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::os::raw::c_int;

use libc::EINVAL;
use remain::sorted;
use thiserror::Error as ThisError;

/// Reasons a buffer-info request is rejected.
///
/// The plugin ABI only distinguishes success from `-EINVAL`; the variants exist for diagnostics.
#[sorted]
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum YagiError {
    /// Plane geometry does not fit the 32-bit fields of the record.
    #[error("arithmetic failed: {}({}) {op} {}({})", .field1.0, .field1.1, .field2.0, .field2.1)]
    CheckedArithmetic {
        field1: (&'static str, usize),
        field2: (&'static str, usize),
        op: &'static str,
    },
    #[error("record size {actual} does not match the v1 record size {expected}")]
    InvalidRecordSize { actual: c_int, expected: c_int },
    #[error("unsupported buffer-info version {0}")]
    InvalidVersion(c_int),
    #[error("buffer handle is null")]
    NullHandle,
    #[error("buffer-info record is null")]
    NullOutput,
    #[error("yagi token is null, plugin not initialized")]
    NullToken,
    #[error("HAL pixel format {0:#x} not supported")]
    UnsupportedFormat(u32),
}

impl YagiError {
    /// Status code reported to the host for this error.
    pub fn errno(&self) -> c_int {
        -EINVAL
    }
}

pub type YagiResult<T> = std::result::Result<T, YagiError>;
