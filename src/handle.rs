// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Read-only access to gbm_gralloc buffer handles.

use std::os::raw::c_int;
use std::os::unix::io::RawFd;

use gralloc_handle_sys::buffer_handle_t;
use gralloc_handle_sys::gralloc_handle;
use gralloc_handle_sys::gralloc_handle_t;
use gralloc_handle_sys::GRALLOC_HANDLE_MAGIC;
use gralloc_handle_sys::GRALLOC_HANDLE_NUM_FDS;
use log::warn;

/// A snapshot of the fields of a gbm_gralloc handle.
///
/// The handle is copied out of allocator memory once, so the snapshot never aliases the
/// allocator's struct and owns nothing: the dma-buf descriptor it reports stays owned by the
/// allocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GrallocBuffer {
    handle: gralloc_handle_t,
}

impl GrallocBuffer {
    /// Reads the gbm_gralloc handle behind `handle`. Returns `None` for a null handle.
    ///
    /// # Safety
    ///
    /// `handle` must be null or point to a `gralloc_handle_t` that stays valid for the duration
    /// of the call.
    pub unsafe fn from_raw(handle: buffer_handle_t) -> Option<GrallocBuffer> {
        let ptr = gralloc_handle(handle);
        if ptr.is_null() {
            return None;
        }
        // SAFETY: non-null and valid per this function's contract. The handle is not required to
        // be 8-byte aligned by every allocator, so read it unaligned.
        let handle = unsafe { ptr.read_unaligned() };
        Some(GrallocBuffer { handle })
    }

    pub fn width(&self) -> u32 {
        self.handle.width
    }

    pub fn height(&self) -> u32 {
        self.handle.height
    }

    /// Row pitch of the first plane, in bytes.
    pub fn stride(&self) -> u32 {
        self.handle.stride
    }

    /// The `HAL_PIXEL_FORMAT_*` the buffer was allocated with.
    pub fn hal_format(&self) -> u32 {
        self.handle.format
    }

    pub fn usage(&self) -> u32 {
        self.handle.usage
    }

    pub fn prime_fd(&self) -> RawFd {
        self.handle.prime_fd
    }

    pub fn modifier(&self) -> u64 {
        self.handle.modifier
    }

    /// Logs a warning if the handle does not look like one produced by gbm_gralloc. Foreign
    /// handles are still translated.
    pub fn check(&self) {
        if self.handle.magic != GRALLOC_HANDLE_MAGIC {
            warn!(
                "unexpected gralloc handle magic {:#x}, expected {:#x}",
                self.handle.magic, GRALLOC_HANDLE_MAGIC
            );
        }
        let num_fds: c_int = self.handle.base.numFds;
        if num_fds < GRALLOC_HANDLE_NUM_FDS {
            warn!("gralloc handle carries {} fds, expected {}", num_fds, GRALLOC_HANDLE_NUM_FDS);
        }
    }
}

impl From<gralloc_handle_t> for GrallocBuffer {
    fn from(handle: gralloc_handle_t) -> GrallocBuffer {
        GrallocBuffer { handle }
    }
}
