// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Bindings for the gbm_gralloc buffer handle (`android/gralloc_handle.h` in libdrm) and the
//! Android HAL pixel formats it carries.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::os::raw::c_int;

use zerocopy::FromBytes;
use zerocopy::Immutable;
use zerocopy::IntoBytes;
use zerocopy::KnownLayout;

pub const HAL_PIXEL_FORMAT_RGBA_8888: u32 = 1;
pub const HAL_PIXEL_FORMAT_RGBX_8888: u32 = 2;
pub const HAL_PIXEL_FORMAT_RGB_888: u32 = 3;
pub const HAL_PIXEL_FORMAT_RGB_565: u32 = 4;
pub const HAL_PIXEL_FORMAT_BGRA_8888: u32 = 5;
pub const HAL_PIXEL_FORMAT_RGBA_FP16: u32 = 0x16;
pub const HAL_PIXEL_FORMAT_RGBA_1010102: u32 = 0x2b;
pub const HAL_PIXEL_FORMAT_YV12: u32 = 0x32315659;

pub const GRALLOC_HANDLE_VERSION: u32 = 4;
pub const GRALLOC_HANDLE_MAGIC: u32 = 0x60585350;
pub const GRALLOC_HANDLE_NUM_FDS: c_int = 1;
pub const GRALLOC_HANDLE_NUM_INTS: c_int = ((std::mem::size_of::<gralloc_handle_t>()
    - std::mem::size_of::<native_handle_t>())
    / std::mem::size_of::<c_int>()) as c_int
    - GRALLOC_HANDLE_NUM_FDS;

/// Header of every Android native handle. The `data` flexible array member that follows it in C
/// is described by the embedding struct.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct native_handle_t {
    pub version: c_int,
    pub numFds: c_int,
    pub numInts: c_int,
}

pub type buffer_handle_t = *const native_handle_t;

#[repr(C, align(8))]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct gralloc_handle_t {
    pub base: native_handle_t,
    pub prime_fd: c_int,
    pub magic: u32,
    pub version: u32,
    pub width: u32,
    pub height: u32,
    pub format: u32,
    pub usage: u32,
    pub stride: u32,
    pub data_owner: c_int,
    pub modifier: u64,
    /// Union of the allocator's private `void *data` and a `uint64_t` reservation.
    pub reserved: u64,
}

/// Reinterprets a generic buffer handle as a gbm_gralloc handle.
pub fn gralloc_handle(handle: buffer_handle_t) -> *const gralloc_handle_t {
    handle as *const gralloc_handle_t
}

/// Returns the dma-buf descriptor of `handle`, or -1 for a null handle.
///
/// # Safety
///
/// `handle` must be null or point to a live, possibly unaligned, `gralloc_handle_t`.
pub unsafe fn gralloc_drm_get_prime_fd(handle: buffer_handle_t) -> c_int {
    let handle = gralloc_handle(handle);
    if handle.is_null() {
        -1
    } else {
        std::ptr::addr_of!((*handle).prime_fd).read_unaligned()
    }
}
