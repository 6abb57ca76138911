// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! formats: DRM fourcc codes and their mapping from Android HAL pixel formats.

use std::fmt;

use gralloc_handle_sys::*;

use crate::error::YagiError;
use crate::error::YagiResult;

/*
 * Only the formats gbm_gralloc can allocate are listed. Byte order follows drm_fourcc.h, so
 * HAL RGBA_8888 (R at the lowest address) is DRM ABGR8888.
 */

pub const DRM_FORMAT_RGB565: [u8; 4] = [b'R', b'G', b'1', b'6'];
pub const DRM_FORMAT_RGB888: [u8; 4] = [b'R', b'G', b'2', b'4'];

pub const DRM_FORMAT_XBGR8888: [u8; 4] = [b'X', b'B', b'2', b'4'];
pub const DRM_FORMAT_ARGB8888: [u8; 4] = [b'A', b'R', b'2', b'4'];
pub const DRM_FORMAT_ABGR8888: [u8; 4] = [b'A', b'B', b'2', b'4'];

pub const DRM_FORMAT_ABGR2101010: [u8; 4] = [b'A', b'B', b'3', b'0'];
pub const DRM_FORMAT_ABGR16161616F: [u8; 4] = [b'A', b'B', b'4', b'H'];

pub const DRM_FORMAT_YVU420: [u8; 4] = [b'Y', b'V', b'1', b'2'];

pub const DRM_FORMAT_MOD_LINEAR: u64 = 0;
pub const DRM_FORMAT_MOD_INVALID: u64 = 0x00ff_ffff_ffff_ffff;

/// A [fourcc](https://en.wikipedia.org/wiki/FourCC) format identifier.
#[derive(Copy, Clone, Eq, PartialEq, Default)]
pub struct DrmFormat(pub u32);

impl DrmFormat {
    /// Constructs a format identifer using a fourcc byte sequence.
    #[inline(always)]
    pub fn new(a: u8, b: u8, c: u8, d: u8) -> DrmFormat {
        DrmFormat(a as u32 | (b as u32) << 8 | (c as u32) << 16 | (d as u32) << 24)
    }

    /// Constructs a format identifier from one of the `DRM_FORMAT_*` byte arrays.
    #[inline(always)]
    pub fn from_bytes(b: [u8; 4]) -> DrmFormat {
        DrmFormat::new(b[0], b[1], b[2], b[3])
    }

    /// Returns the fourcc code as a sequence of bytes.
    #[inline(always)]
    pub fn to_bytes(&self) -> [u8; 4] {
        let f = self.0;
        [f as u8, (f >> 8) as u8, (f >> 16) as u8, (f >> 24) as u8]
    }

    /// Translates an Android HAL pixel format into the DRM format with the same memory layout.
    pub fn from_hal_format(hal_format: u32) -> YagiResult<DrmFormat> {
        let bytes = match hal_format {
            HAL_PIXEL_FORMAT_RGBA_8888 => DRM_FORMAT_ABGR8888,
            HAL_PIXEL_FORMAT_RGBX_8888 => DRM_FORMAT_XBGR8888,
            HAL_PIXEL_FORMAT_RGB_888 => DRM_FORMAT_RGB888,
            HAL_PIXEL_FORMAT_RGB_565 => DRM_FORMAT_RGB565,
            HAL_PIXEL_FORMAT_BGRA_8888 => DRM_FORMAT_ARGB8888,
            HAL_PIXEL_FORMAT_YV12 => DRM_FORMAT_YVU420,
            HAL_PIXEL_FORMAT_RGBA_FP16 => DRM_FORMAT_ABGR16161616F,
            HAL_PIXEL_FORMAT_RGBA_1010102 => DRM_FORMAT_ABGR2101010,
            _ => return Err(YagiError::UnsupportedFormat(hal_format)),
        };
        Ok(DrmFormat::from_bytes(bytes))
    }
}

impl From<u32> for DrmFormat {
    fn from(u: u32) -> DrmFormat {
        DrmFormat(u)
    }
}

impl From<DrmFormat> for u32 {
    fn from(f: DrmFormat) -> u32 {
        f.0
    }
}

impl fmt::Debug for DrmFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let b = self.to_bytes();
        if b.iter().all(u8::is_ascii_graphic) {
            write!(
                f,
                "fourcc({}{}{}{})",
                b[0] as char, b[1] as char, b[2] as char, b[3] as char
            )
        } else {
            write!(
                f,
                "fourcc(0x{:02x}{:02x}{:02x}{:02x})",
                b[0], b[1], b[2], b[3]
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use super::*;

    #[test]
    fn format_debug() {
        let f = DrmFormat::new(b'A', b'B', b'2', b'4');
        let mut buf = String::new();
        write!(&mut buf, "{:?}", f).unwrap();
        assert_eq!(buf, "fourcc(AB24)");

        let f = DrmFormat::new(0, 1, 2, 16);
        let mut buf = String::new();
        write!(&mut buf, "{:?}", f).unwrap();
        assert_eq!(buf, "fourcc(0x00010210)");
    }

    #[test]
    fn fourcc_values() {
        // Values from drm_fourcc.h.
        assert_eq!(DrmFormat::from_bytes(DRM_FORMAT_ABGR8888).0, 0x34324241);
        assert_eq!(DrmFormat::from_bytes(DRM_FORMAT_XBGR8888).0, 0x34324258);
        assert_eq!(DrmFormat::from_bytes(DRM_FORMAT_ARGB8888).0, 0x34325241);
        assert_eq!(DrmFormat::from_bytes(DRM_FORMAT_RGB888).0, 0x34324752);
        assert_eq!(DrmFormat::from_bytes(DRM_FORMAT_RGB565).0, 0x36314752);
        assert_eq!(DrmFormat::from_bytes(DRM_FORMAT_YVU420).0, 0x32315659);
        assert_eq!(DrmFormat::from_bytes(DRM_FORMAT_ABGR16161616F).0, 0x48344241);
        assert_eq!(DrmFormat::from_bytes(DRM_FORMAT_ABGR2101010).0, 0x30334241);
    }

    #[test]
    fn hal_formats() {
        let table = [
            (HAL_PIXEL_FORMAT_RGBA_8888, DRM_FORMAT_ABGR8888),
            (HAL_PIXEL_FORMAT_RGBX_8888, DRM_FORMAT_XBGR8888),
            (HAL_PIXEL_FORMAT_RGB_888, DRM_FORMAT_RGB888),
            (HAL_PIXEL_FORMAT_RGB_565, DRM_FORMAT_RGB565),
            (HAL_PIXEL_FORMAT_BGRA_8888, DRM_FORMAT_ARGB8888),
            (HAL_PIXEL_FORMAT_YV12, DRM_FORMAT_YVU420),
            (HAL_PIXEL_FORMAT_RGBA_FP16, DRM_FORMAT_ABGR16161616F),
            (HAL_PIXEL_FORMAT_RGBA_1010102, DRM_FORMAT_ABGR2101010),
        ];
        for (hal, drm) in table {
            assert_eq!(
                DrmFormat::from_hal_format(hal).unwrap(),
                DrmFormat::from_bytes(drm)
            );
        }
    }

    #[test]
    fn unsupported_hal_formats() {
        // Zero, BLOB, YCBCR_420_888, RAW16 and a value that was never assigned.
        for hal in [0, 0x21, 0x23, 0x20, 0xdead_beef] {
            assert_eq!(
                DrmFormat::from_hal_format(hal),
                Err(YagiError::UnsupportedFormat(hal))
            );
        }
    }
}
