// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Translation of gbm_gralloc handles into YAGI v1 buffer-info records.

use std::os::raw::c_int;
use std::os::unix::io::RawFd;
use std::ptr::NonNull;

use gralloc_handle_sys::buffer_handle_t;
use gralloc_handle_sys::native_handle_t;
use log::debug;
use yagi_sys::yagi;
use yagi_sys::yagi_bi_v1;
use yagi_sys::YAGI_API_VERSION_V1;
use yagi_sys::YAGI_BI_V1_SIZE;
use zerocopy::FromZeros;

use crate::error::YagiError;
use crate::error::YagiResult;
use crate::formats::DrmFormat;
use crate::handle::GrallocBuffer;
use crate::layout::PlaneLayout;

/// Geometry of one buffer, as reported to the compositor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BufferInfo {
    pub width: u32,
    pub height: u32,
    pub drm_format: DrmFormat,
    pub layout: PlaneLayout,
    /// Backs every plane. Owned by the allocation, never by this struct.
    pub prime_fd: RawFd,
    pub modifier: u64,
    /// `YAGI_*_BUFFER_FLAG` bits. gbm_gralloc buffers are never protected or mutable.
    pub flags: u32,
}

impl BufferInfo {
    pub fn new(buffer: &GrallocBuffer) -> YagiResult<BufferInfo> {
        let drm_format = DrmFormat::from_hal_format(buffer.hal_format())?;
        let layout = PlaneLayout::new(drm_format, buffer.stride(), buffer.height())?;
        Ok(BufferInfo {
            width: buffer.width(),
            height: buffer.height(),
            drm_format,
            layout,
            prime_fd: buffer.prime_fd(),
            modifier: buffer.modifier(),
            flags: 0,
        })
    }

    /// Builds the v1 record. Every plane below `num_planes` repeats the buffer's descriptor and
    /// modifier; the remaining entries are zero.
    pub fn to_v1(&self) -> yagi_bi_v1 {
        let mut bi = yagi_bi_v1::new_zeroed();
        bi.width = self.width;
        bi.height = self.height;
        bi.drm_format = self.drm_format.into();
        for plane in 0..self.layout.num_planes {
            bi.pitches[plane] = self.layout.pitches[plane];
            bi.offsets[plane] = self.layout.offsets[plane];
            bi.prime_fds[plane] = self.prime_fd;
            bi.modifiers[plane] = self.modifier;
        }
        bi.num_planes = self.layout.num_planes as c_int;
        bi.yagi_flags = self.flags;
        bi
    }
}

/// A `yagi_bi_get` call whose arguments passed validation.
#[derive(Debug)]
pub struct BufferInfoRequest {
    handle: NonNull<native_handle_t>,
    out: NonNull<yagi_bi_v1>,
}

impl BufferInfoRequest {
    /// Checks the arguments of a `yagi_bi_get` call without dereferencing any of them.
    pub fn new(
        token: *const yagi,
        handle: buffer_handle_t,
        out: *mut yagi_bi_v1,
        version: c_int,
        size: c_int,
    ) -> YagiResult<BufferInfoRequest> {
        if token.is_null() {
            return Err(YagiError::NullToken);
        }
        let handle = NonNull::new(handle as *mut native_handle_t).ok_or(YagiError::NullHandle)?;
        let out = NonNull::new(out).ok_or(YagiError::NullOutput)?;
        if version != YAGI_API_VERSION_V1 {
            return Err(YagiError::InvalidVersion(version));
        }
        if size != YAGI_BI_V1_SIZE {
            return Err(YagiError::InvalidRecordSize {
                actual: size,
                expected: YAGI_BI_V1_SIZE,
            });
        }
        Ok(BufferInfoRequest { handle, out })
    }

    /// Reads the handle and writes the complete record. Nothing is written on error.
    ///
    /// # Safety
    ///
    /// The handle must point to a valid `gralloc_handle_t` and the output pointer must be valid
    /// for a write of one `yagi_bi_v1`, both for the duration of the call.
    pub unsafe fn fulfill(self) -> YagiResult<BufferInfo> {
        // SAFETY: non-null by construction, valid per this function's contract.
        let buffer = match unsafe { GrallocBuffer::from_raw(self.handle.as_ptr()) } {
            Some(b) => b,
            None => return Err(YagiError::NullHandle),
        };
        buffer.check();

        let info = BufferInfo::new(&buffer)?;
        // SAFETY: non-null by construction, valid per this function's contract.
        unsafe { self.out.as_ptr().write_unaligned(info.to_v1()) };

        debug!(
            "buffer {}x{} {:?}: {} plane(s), pitches {:?}, offsets {:?}, modifier {:#x}",
            info.width,
            info.height,
            info.drm_format,
            info.layout.num_planes,
            &info.layout.pitches[..info.layout.num_planes],
            &info.layout.offsets[..info.layout.num_planes],
            info.modifier
        );
        Ok(info)
    }
}
