// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral register maps for the STM32L4+ MCU family
//! (STM32L4Rx/L4Sx/L4Px/L4Qx).
//!
//! Reference manual: RM0432

#![crate_name = "stm32l4plus"]
#![crate_type = "rlib"]
#![no_std]

pub mod errorcode;
pub mod exti;
pub mod static_ref;

pub use crate::errorcode::ErrorCode;
pub use crate::static_ref::StaticRef;
