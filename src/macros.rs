// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Macros for gbm_yagi.

/// Performs checked integer arithmetic on two identifiers, naming both operands in the
/// `YagiError::CheckedArithmetic` produced on overflow.
#[macro_export]
macro_rules! checked_arithmetic {
    ($x:ident $op:ident $y:ident $op_name:expr) => {
        $x.$op($y).ok_or_else(|| $crate::YagiError::CheckedArithmetic {
            field1: (stringify!($x), $x as usize),
            field2: (stringify!($y), $y as usize),
            op: $op_name,
        })
    };
    ($x:ident + $y:ident) => {
        $crate::checked_arithmetic!($x checked_add $y "+")
    };
    ($x:ident * $y:ident) => {
        $crate::checked_arithmetic!($x checked_mul $y "*")
    };
}
