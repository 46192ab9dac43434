// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `bytemuck` trait impls for pixel types.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use crate::Rgb8;
use bytemuck::{Pod, Zeroable};

// Safety: `Rgb8` is `repr(C)` with three `u8` fields, so all-zero bytes are a valid value.
unsafe impl Zeroable for Rgb8 {}

// Safety: `Rgb8` is `repr(C)`, `Copy`, has no padding (size 3, align 1) and every
// bit pattern is a valid value.
unsafe impl Pod for Rgb8 {}
