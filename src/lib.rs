// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! YAGI buffer-info supplier for gbm_gralloc.
//!
//! drm_hwcomposer loads this library at runtime and calls `yagi_bi_get` to learn the geometry of
//! a gralloc buffer: its DRM fourcc format, per-plane pitches and offsets, dma-buf descriptors
//! and format modifiers. The exported C entry points live in [`ffi`]; everything else is the
//! safe Rust core they are built on.

#[macro_use]
mod macros;

pub mod bufferinfo;
pub mod config;
pub mod error;
pub mod ffi;
pub mod formats;
pub mod handle;
pub mod layout;
pub mod syslog;

pub use crate::bufferinfo::BufferInfo;
pub use crate::bufferinfo::BufferInfoRequest;
pub use crate::config::Config;
pub use crate::error::YagiError;
pub use crate::error::YagiResult;
pub use crate::formats::DrmFormat;
pub use crate::handle::GrallocBuffer;
pub use crate::layout::PlaneLayout;
