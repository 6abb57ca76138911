// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Bindings for YAGI ("Yet Another Gralloc Interface"), the DRM-compatible buffer-info supplier
//! interface that drm_hwcomposer loads from a plugin library.
//!
//! A plugin exports `yagi_init`, `yagi_destroy` and `yagi_bi_get`. `yagi_get_data` is optional
//! for v1.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::os::raw::c_int;

pub use gralloc_handle_sys::buffer_handle_t;
use zerocopy::FromBytes;
use zerocopy::Immutable;
use zerocopy::KnownLayout;

/// Implementation specific state, opaque to the client.
#[repr(C)]
pub struct yagi {
    _unused: [u8; 0],
}

pub const YAGI_API_VERSION_V1: c_int = 1;

/// Mesa front buffer rendering.
pub const YAGI_DATA_MUTABLE_BUFFER_USAGE_MASK: u32 = 1 << 1;

pub const YAGI_PROTECTED_BUFFER_FLAG: u32 = 1 << 1;
pub const YAGI_MUTABLE_BUFFER_FLAG: u32 = 1 << 2;

/// Do not modify, add a v2 record instead.
pub const YAGI_MAX_PLANES_V1: usize = 4;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, FromBytes, Immutable, KnownLayout)]
pub struct yagi_bi_v1 {
    pub width: u32,
    pub height: u32,
    /// `DRM_FORMAT_*` from drm_fourcc.h.
    pub drm_format: u32,
    pub pitches: [u32; YAGI_MAX_PLANES_V1],
    pub offsets: [u32; YAGI_MAX_PLANES_V1],
    /// Set for every plane, even when all planes share one buffer.
    pub prime_fds: [c_int; YAGI_MAX_PLANES_V1],
    pub modifiers: [u64; YAGI_MAX_PLANES_V1],
    pub num_planes: c_int,
    pub yagi_flags: u32,
}

pub const YAGI_BI_V1_SIZE: c_int = std::mem::size_of::<yagi_bi_v1>() as c_int;

pub type yagi_bi_get_t = unsafe extern "C" fn(
    yagi: *mut yagi,
    handle: buffer_handle_t,
    out_buf_info: *mut yagi_bi_v1,
    version: c_int,
    size: c_int,
) -> c_int;

pub type yagi_get_data_t =
    unsafe extern "C" fn(yagi: *mut yagi, yagi_data: u32, result: *mut c_int) -> c_int;

pub type yagi_init_t = unsafe extern "C" fn() -> *mut yagi;

pub type yagi_destroy_t = unsafe extern "C" fn(yagi: *mut yagi);
