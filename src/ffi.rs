// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! C entry points loaded by the compositor.
//!
//! The host resolves these symbols with `dlsym`, so their names and signatures are fixed by the
//! YAGI v1 interface. Do not change them without a new interface version.

use std::os::raw::c_int;
use std::panic::catch_unwind;
use std::panic::AssertUnwindSafe;

use gralloc_handle_sys::buffer_handle_t;
use libc::EINVAL;
use log::error;
use static_assertions::const_assert;
use static_assertions::const_assert_eq;
use yagi_sys::yagi;
use yagi_sys::yagi_bi_v1;
use yagi_sys::YAGI_BI_V1_SIZE;
use yagi_sys::YAGI_MAX_PLANES_V1;

use crate::bufferinfo::BufferInfoRequest;
use crate::config::Config;
use crate::error::YagiResult;
use crate::syslog;

const NO_ERROR: c_int = 0;

const_assert_eq!(YAGI_MAX_PLANES_V1, 4);
const_assert!(YAGI_BI_V1_SIZE as usize == std::mem::size_of::<yagi_bi_v1>());
#[cfg(target_pointer_width = "64")]
const_assert_eq!(std::mem::size_of::<yagi_bi_v1>(), 104);

/// Backing storage for the token handed out by `yagi_init`. It has no state, so every caller
/// shares it and `yagi_destroy` has nothing to release.
struct Yagi(());

static YAGI: Yagi = Yagi(());

fn return_result<T>(result: YagiResult<T>) -> c_int {
    match result {
        Ok(_) => NO_ERROR,
        Err(e) => {
            error!("Invalid arguments: {}", e);
            e.errno()
        }
    }
}

/// Runs `f`, turning a panic into `-EINVAL` so it never unwinds into the host.
fn catch_panic<F: FnOnce() -> c_int>(f: F) -> c_int {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        error!("yagi_bi_get panicked");
        -EINVAL
    })
}

/// Returns the plugin token. Never fails and never returns null.
#[no_mangle]
pub extern "C" fn yagi_init() -> *mut yagi {
    // Logging is best effort, the token is valid either way.
    let _ = catch_unwind(|| syslog::init(&Config::from_env()));
    &YAGI as *const Yagi as *mut yagi
}

/// Releases a token returned by `yagi_init`. There is nothing to release.
#[no_mangle]
pub extern "C" fn yagi_destroy(_yagi: *mut yagi) {}

/// Fills `out_buf_info` with the geometry of the gbm_gralloc buffer `handle`.
///
/// Returns 0 on success and `-EINVAL` on failure. On failure `out_buf_info` is left untouched.
///
/// # Safety
///
/// - `yagi` must be null or a token returned by `yagi_init`.
/// - `handle` must be null or point to a valid gbm_gralloc handle.
/// - `out_buf_info` must be null or valid for writes of `size` bytes.
#[no_mangle]
pub unsafe extern "C" fn yagi_bi_get(
    yagi: *mut yagi,
    handle: buffer_handle_t,
    out_buf_info: *mut yagi_bi_v1,
    version: c_int,
    size: c_int,
) -> c_int {
    catch_panic(|| {
        let result = BufferInfoRequest::new(yagi, handle, out_buf_info, version, size)
            // SAFETY: the request only exists once every pointer was checked, and the caller
            // guarantees the pointees per this function's contract.
            .and_then(|request| unsafe { request.fulfill() });
        return_result(result)
    })
}
