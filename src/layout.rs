// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Per-plane pitch and offset derivation for gbm_gralloc buffers.
//!
//! gbm_gralloc allocates every buffer as a single bo whose stride is the luma (or only) plane
//! pitch. Multi-planar formats pack their chroma planes after the luma plane inside that bo.

use yagi_sys::YAGI_MAX_PLANES_V1;

use crate::error::YagiResult;
use crate::formats::DrmFormat;
use crate::formats::DRM_FORMAT_YVU420;

/// Alignment of the YV12 chroma pitch, as mandated by the Android YV12 definition.
pub const YV12_CHROMA_PITCH_ALIGNMENT: u32 = 16;

/// Pitches and byte offsets of the planes of one buffer. Entries at or beyond `num_planes` are
/// zero.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PlaneLayout {
    pub num_planes: usize,
    pub pitches: [u32; YAGI_MAX_PLANES_V1],
    pub offsets: [u32; YAGI_MAX_PLANES_V1],
}

impl PlaneLayout {
    /// Computes the layout of a `format` buffer whose first plane has the given `stride` in bytes
    /// and which is `height` rows tall.
    pub fn new(format: DrmFormat, stride: u32, height: u32) -> YagiResult<PlaneLayout> {
        match format.to_bytes() {
            DRM_FORMAT_YVU420 => PlaneLayout::yvu420(stride, height),
            _ => Ok(PlaneLayout::single_plane(stride)),
        }
    }

    fn single_plane(stride: u32) -> PlaneLayout {
        let mut layout = PlaneLayout {
            num_planes: 1,
            ..Default::default()
        };
        layout.pitches[0] = stride;
        layout
    }

    // Y plane, then V, then U. Both chroma planes share one pitch and are half the luma height.
    fn yvu420(stride: u32, height: u32) -> YagiResult<PlaneLayout> {
        let half_stride = stride.div_ceil(2);
        let alignment = YV12_CHROMA_PITCH_ALIGNMENT;
        let chroma_pitch = checked_arithmetic!(half_stride checked_next_multiple_of alignment "align")?;

        let luma_size = checked_arithmetic!(stride * height)?;
        let chroma_rows = checked_arithmetic!(chroma_pitch * height)?;
        let chroma_size = chroma_rows.div_ceil(2);
        let v_offset = luma_size;
        let u_offset = checked_arithmetic!(v_offset + chroma_size)?;

        let mut layout = PlaneLayout::single_plane(stride);
        layout.num_planes = 3;
        layout.pitches[1] = chroma_pitch;
        layout.offsets[1] = v_offset;
        layout.pitches[2] = chroma_pitch;
        layout.offsets[2] = u_offset;
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YagiError;
    use crate::formats::*;

    #[test]
    fn single_plane_formats() {
        for format in [
            DRM_FORMAT_ABGR8888,
            DRM_FORMAT_XBGR8888,
            DRM_FORMAT_ARGB8888,
            DRM_FORMAT_RGB888,
            DRM_FORMAT_RGB565,
            DRM_FORMAT_ABGR16161616F,
            DRM_FORMAT_ABGR2101010,
        ] {
            let layout = PlaneLayout::new(DrmFormat::from_bytes(format), 2560, 480).unwrap();
            assert_eq!(layout.num_planes, 1);
            assert_eq!(layout.pitches, [2560, 0, 0, 0]);
            assert_eq!(layout.offsets, [0, 0, 0, 0]);
        }
    }

    #[test]
    fn yv12_vga() {
        let layout = PlaneLayout::new(DrmFormat::from_bytes(DRM_FORMAT_YVU420), 640, 480).unwrap();
        assert_eq!(layout.num_planes, 3);
        assert_eq!(layout.pitches, [640, 320, 320, 0]);
        assert_eq!(layout.offsets, [0, 307200, 384000, 0]);
    }

    #[test]
    fn yv12_chroma_pitch_is_aligned() {
        // ceil(100 / 2) = 50, aligned up to 64.
        let layout = PlaneLayout::new(DrmFormat::from_bytes(DRM_FORMAT_YVU420), 100, 3).unwrap();
        assert_eq!(layout.pitches, [100, 64, 64, 0]);
        assert_eq!(layout.offsets, [0, 300, 396, 0]);

        // Odd luma stride rounds the half stride up before aligning.
        let layout = PlaneLayout::new(DrmFormat::from_bytes(DRM_FORMAT_YVU420), 33, 2).unwrap();
        assert_eq!(layout.pitches[1], 32);
        assert_eq!(layout.offsets[2], 66 + 32);
    }

    #[test]
    fn yv12_odd_height() {
        // The U plane starts after ceil(pitch * height / 2) bytes of V.
        let layout = PlaneLayout::new(DrmFormat::from_bytes(DRM_FORMAT_YVU420), 16, 1).unwrap();
        assert_eq!(layout.pitches, [16, 16, 16, 0]);
        assert_eq!(layout.offsets, [0, 16, 24, 0]);
    }

    #[test]
    fn yv12_overflow() {
        let result = PlaneLayout::new(DrmFormat::from_bytes(DRM_FORMAT_YVU420), 0x10000, 0x10000);
        assert!(matches!(
            result,
            Err(YagiError::CheckedArithmetic { op: "*", .. })
        ));
    }

    #[test]
    fn single_plane_never_overflows() {
        let layout = PlaneLayout::new(
            DrmFormat::from_bytes(DRM_FORMAT_ABGR8888),
            u32::MAX,
            u32::MAX,
        )
        .unwrap();
        assert_eq!(layout.pitches[0], u32::MAX);
    }
}
