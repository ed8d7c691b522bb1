// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Extended interrupt and event controller (EXTI).
//!
//! Register map of the EXTI block found on STM32L4+ parts (RM0432, section
//! 15.5). The controller routes 41 lines to the NVIC and to the event
//! output. Lines 0..=31 are handled by the first register bank and lines
//! 32..=40 by the second one.
//!
//! Not every line is configurable. Direct lines (17, 23..=34, 39 and 40) are
//! driven by their peripheral and only have interrupt and event mask bits;
//! they have no trigger selection, software interrupt or pending bit. The
//! gaps below are hardware mandated and must stay as they are:
//!
//! | Register          | Bank 1 bits      | Bank 2 bits |
//! |-------------------|------------------|-------------|
//! | IMR, EMR          | 0..=31           | 0..=8       |
//! | RTSR, FTSR        | 0..=16, 18..=22  | 3..=6       |
//! | SWIER, PR         | 0..=16, 18..=22  | 3..=6       |
//!
//! Every register can be accessed as a raw word through
//! [`Readable::get`]/[`Writeable::set`], or field by field through the
//! bitfields declared below:
//!
//! ```rust,ignore
//! use tock_registers::interfaces::{Readable, ReadWriteable, Writeable};
//!
//! EXTI_BASE.imr1.modify(IMR1::IM5::SET);
//! EXTI_BASE.rtsr1.set(rtsr1::RT0 | rtsr1::RT13);
//! if EXTI_BASE.pr1.is_set(PR1::PIF13) {
//!     EXTI_BASE.pr1.write(PR1::PIF13::SET);
//! }
//! ```
//!
//! [`Exti`] wraps a [`StaticRef`] to the block and offers the same accesses
//! addressed by [`LineId`].

use core::fmt;

use tock_registers::fields::Field;
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs, RegisterLongName};

use crate::errorcode::ErrorCode;
use crate::static_ref::StaticRef;

register_structs! {
    /// External interrupt/event controller
    pub ExtiRegisters {
        /// Interrupt mask register 1 (EXTI_IMR1)
        (0x00 => pub imr1: ReadWrite<u32, IMR1::Register>),
        /// Event mask register 1 (EXTI_EMR1)
        (0x04 => pub emr1: ReadWrite<u32, EMR1::Register>),
        /// Rising trigger selection register 1 (EXTI_RTSR1)
        (0x08 => pub rtsr1: ReadWrite<u32, RTSR1::Register>),
        /// Falling trigger selection register 1 (EXTI_FTSR1)
        (0x0C => pub ftsr1: ReadWrite<u32, FTSR1::Register>),
        /// Software interrupt event register 1 (EXTI_SWIER1)
        (0x10 => pub swier1: ReadWrite<u32, SWIER1::Register>),
        /// Pending register 1 (EXTI_PR1), write 1 to clear
        (0x14 => pub pr1: ReadWrite<u32, PR1::Register>),
        (0x18 => _reserved0),
        /// Interrupt mask register 2 (EXTI_IMR2)
        (0x20 => pub imr2: ReadWrite<u32, IMR2::Register>),
        /// Event mask register 2 (EXTI_EMR2)
        (0x24 => pub emr2: ReadWrite<u32, EMR2::Register>),
        /// Rising trigger selection register 2 (EXTI_RTSR2)
        (0x28 => pub rtsr2: ReadWrite<u32, RTSR2::Register>),
        /// Falling trigger selection register 2 (EXTI_FTSR2)
        (0x2C => pub ftsr2: ReadWrite<u32, FTSR2::Register>),
        /// Software interrupt event register 2 (EXTI_SWIER2)
        (0x30 => pub swier2: ReadWrite<u32, SWIER2::Register>),
        /// Pending register 2 (EXTI_PR2), write 1 to clear
        (0x34 => pub pr2: ReadWrite<u32, PR2::Register>),
        (0x38 => @END),
    }
}

register_bitfields![u32,
    pub IMR1 [
        /// Interrupt mask on line 0
        IM0 OFFSET(0) NUMBITS(1) [],
        /// Interrupt mask on line 1
        IM1 OFFSET(1) NUMBITS(1) [],
        /// Interrupt mask on line 2
        IM2 OFFSET(2) NUMBITS(1) [],
        /// Interrupt mask on line 3
        IM3 OFFSET(3) NUMBITS(1) [],
        /// Interrupt mask on line 4
        IM4 OFFSET(4) NUMBITS(1) [],
        /// Interrupt mask on line 5
        IM5 OFFSET(5) NUMBITS(1) [],
        /// Interrupt mask on line 6
        IM6 OFFSET(6) NUMBITS(1) [],
        /// Interrupt mask on line 7
        IM7 OFFSET(7) NUMBITS(1) [],
        /// Interrupt mask on line 8
        IM8 OFFSET(8) NUMBITS(1) [],
        /// Interrupt mask on line 9
        IM9 OFFSET(9) NUMBITS(1) [],
        /// Interrupt mask on line 10
        IM10 OFFSET(10) NUMBITS(1) [],
        /// Interrupt mask on line 11
        IM11 OFFSET(11) NUMBITS(1) [],
        /// Interrupt mask on line 12
        IM12 OFFSET(12) NUMBITS(1) [],
        /// Interrupt mask on line 13
        IM13 OFFSET(13) NUMBITS(1) [],
        /// Interrupt mask on line 14
        IM14 OFFSET(14) NUMBITS(1) [],
        /// Interrupt mask on line 15
        IM15 OFFSET(15) NUMBITS(1) [],
        /// Interrupt mask on line 16
        IM16 OFFSET(16) NUMBITS(1) [],
        /// Interrupt mask on line 17
        IM17 OFFSET(17) NUMBITS(1) [],
        /// Interrupt mask on line 18
        IM18 OFFSET(18) NUMBITS(1) [],
        /// Interrupt mask on line 19
        IM19 OFFSET(19) NUMBITS(1) [],
        /// Interrupt mask on line 20
        IM20 OFFSET(20) NUMBITS(1) [],
        /// Interrupt mask on line 21
        IM21 OFFSET(21) NUMBITS(1) [],
        /// Interrupt mask on line 22
        IM22 OFFSET(22) NUMBITS(1) [],
        /// Interrupt mask on line 23
        IM23 OFFSET(23) NUMBITS(1) [],
        /// Interrupt mask on line 24
        IM24 OFFSET(24) NUMBITS(1) [],
        /// Interrupt mask on line 25
        IM25 OFFSET(25) NUMBITS(1) [],
        /// Interrupt mask on line 26
        IM26 OFFSET(26) NUMBITS(1) [],
        /// Interrupt mask on line 27
        IM27 OFFSET(27) NUMBITS(1) [],
        /// Interrupt mask on line 28
        IM28 OFFSET(28) NUMBITS(1) [],
        /// Interrupt mask on line 29
        IM29 OFFSET(29) NUMBITS(1) [],
        /// Interrupt mask on line 30
        IM30 OFFSET(30) NUMBITS(1) [],
        /// Interrupt mask on line 31
        IM31 OFFSET(31) NUMBITS(1) []
    ],
    pub EMR1 [
        /// Event mask on line 0
        EM0 OFFSET(0) NUMBITS(1) [],
        /// Event mask on line 1
        EM1 OFFSET(1) NUMBITS(1) [],
        /// Event mask on line 2
        EM2 OFFSET(2) NUMBITS(1) [],
        /// Event mask on line 3
        EM3 OFFSET(3) NUMBITS(1) [],
        /// Event mask on line 4
        EM4 OFFSET(4) NUMBITS(1) [],
        /// Event mask on line 5
        EM5 OFFSET(5) NUMBITS(1) [],
        /// Event mask on line 6
        EM6 OFFSET(6) NUMBITS(1) [],
        /// Event mask on line 7
        EM7 OFFSET(7) NUMBITS(1) [],
        /// Event mask on line 8
        EM8 OFFSET(8) NUMBITS(1) [],
        /// Event mask on line 9
        EM9 OFFSET(9) NUMBITS(1) [],
        /// Event mask on line 10
        EM10 OFFSET(10) NUMBITS(1) [],
        /// Event mask on line 11
        EM11 OFFSET(11) NUMBITS(1) [],
        /// Event mask on line 12
        EM12 OFFSET(12) NUMBITS(1) [],
        /// Event mask on line 13
        EM13 OFFSET(13) NUMBITS(1) [],
        /// Event mask on line 14
        EM14 OFFSET(14) NUMBITS(1) [],
        /// Event mask on line 15
        EM15 OFFSET(15) NUMBITS(1) [],
        /// Event mask on line 16
        EM16 OFFSET(16) NUMBITS(1) [],
        /// Event mask on line 17
        EM17 OFFSET(17) NUMBITS(1) [],
        /// Event mask on line 18
        EM18 OFFSET(18) NUMBITS(1) [],
        /// Event mask on line 19
        EM19 OFFSET(19) NUMBITS(1) [],
        /// Event mask on line 20
        EM20 OFFSET(20) NUMBITS(1) [],
        /// Event mask on line 21
        EM21 OFFSET(21) NUMBITS(1) [],
        /// Event mask on line 22
        EM22 OFFSET(22) NUMBITS(1) [],
        /// Event mask on line 23
        EM23 OFFSET(23) NUMBITS(1) [],
        /// Event mask on line 24
        EM24 OFFSET(24) NUMBITS(1) [],
        /// Event mask on line 25
        EM25 OFFSET(25) NUMBITS(1) [],
        /// Event mask on line 26
        EM26 OFFSET(26) NUMBITS(1) [],
        /// Event mask on line 27
        EM27 OFFSET(27) NUMBITS(1) [],
        /// Event mask on line 28
        EM28 OFFSET(28) NUMBITS(1) [],
        /// Event mask on line 29
        EM29 OFFSET(29) NUMBITS(1) [],
        /// Event mask on line 30
        EM30 OFFSET(30) NUMBITS(1) [],
        /// Event mask on line 31
        EM31 OFFSET(31) NUMBITS(1) []
    ],
    pub RTSR1 [
        /// Rising trigger event configuration of line 0
        RT0 OFFSET(0) NUMBITS(1) [],
        /// Rising trigger event configuration of line 1
        RT1 OFFSET(1) NUMBITS(1) [],
        /// Rising trigger event configuration of line 2
        RT2 OFFSET(2) NUMBITS(1) [],
        /// Rising trigger event configuration of line 3
        RT3 OFFSET(3) NUMBITS(1) [],
        /// Rising trigger event configuration of line 4
        RT4 OFFSET(4) NUMBITS(1) [],
        /// Rising trigger event configuration of line 5
        RT5 OFFSET(5) NUMBITS(1) [],
        /// Rising trigger event configuration of line 6
        RT6 OFFSET(6) NUMBITS(1) [],
        /// Rising trigger event configuration of line 7
        RT7 OFFSET(7) NUMBITS(1) [],
        /// Rising trigger event configuration of line 8
        RT8 OFFSET(8) NUMBITS(1) [],
        /// Rising trigger event configuration of line 9
        RT9 OFFSET(9) NUMBITS(1) [],
        /// Rising trigger event configuration of line 10
        RT10 OFFSET(10) NUMBITS(1) [],
        /// Rising trigger event configuration of line 11
        RT11 OFFSET(11) NUMBITS(1) [],
        /// Rising trigger event configuration of line 12
        RT12 OFFSET(12) NUMBITS(1) [],
        /// Rising trigger event configuration of line 13
        RT13 OFFSET(13) NUMBITS(1) [],
        /// Rising trigger event configuration of line 14
        RT14 OFFSET(14) NUMBITS(1) [],
        /// Rising trigger event configuration of line 15
        RT15 OFFSET(15) NUMBITS(1) [],
        /// Rising trigger event configuration of line 16
        RT16 OFFSET(16) NUMBITS(1) [],
        /// Rising trigger event configuration of line 18
        RT18 OFFSET(18) NUMBITS(1) [],
        /// Rising trigger event configuration of line 19
        RT19 OFFSET(19) NUMBITS(1) [],
        /// Rising trigger event configuration of line 20
        RT20 OFFSET(20) NUMBITS(1) [],
        /// Rising trigger event configuration of line 21
        RT21 OFFSET(21) NUMBITS(1) [],
        /// Rising trigger event configuration of line 22
        RT22 OFFSET(22) NUMBITS(1) []
    ],
    pub FTSR1 [
        /// Falling trigger event configuration of line 0
        FT0 OFFSET(0) NUMBITS(1) [],
        /// Falling trigger event configuration of line 1
        FT1 OFFSET(1) NUMBITS(1) [],
        /// Falling trigger event configuration of line 2
        FT2 OFFSET(2) NUMBITS(1) [],
        /// Falling trigger event configuration of line 3
        FT3 OFFSET(3) NUMBITS(1) [],
        /// Falling trigger event configuration of line 4
        FT4 OFFSET(4) NUMBITS(1) [],
        /// Falling trigger event configuration of line 5
        FT5 OFFSET(5) NUMBITS(1) [],
        /// Falling trigger event configuration of line 6
        FT6 OFFSET(6) NUMBITS(1) [],
        /// Falling trigger event configuration of line 7
        FT7 OFFSET(7) NUMBITS(1) [],
        /// Falling trigger event configuration of line 8
        FT8 OFFSET(8) NUMBITS(1) [],
        /// Falling trigger event configuration of line 9
        FT9 OFFSET(9) NUMBITS(1) [],
        /// Falling trigger event configuration of line 10
        FT10 OFFSET(10) NUMBITS(1) [],
        /// Falling trigger event configuration of line 11
        FT11 OFFSET(11) NUMBITS(1) [],
        /// Falling trigger event configuration of line 12
        FT12 OFFSET(12) NUMBITS(1) [],
        /// Falling trigger event configuration of line 13
        FT13 OFFSET(13) NUMBITS(1) [],
        /// Falling trigger event configuration of line 14
        FT14 OFFSET(14) NUMBITS(1) [],
        /// Falling trigger event configuration of line 15
        FT15 OFFSET(15) NUMBITS(1) [],
        /// Falling trigger event configuration of line 16
        FT16 OFFSET(16) NUMBITS(1) [],
        /// Falling trigger event configuration of line 18
        FT18 OFFSET(18) NUMBITS(1) [],
        /// Falling trigger event configuration of line 19
        FT19 OFFSET(19) NUMBITS(1) [],
        /// Falling trigger event configuration of line 20
        FT20 OFFSET(20) NUMBITS(1) [],
        /// Falling trigger event configuration of line 21
        FT21 OFFSET(21) NUMBITS(1) [],
        /// Falling trigger event configuration of line 22
        FT22 OFFSET(22) NUMBITS(1) []
    ],
    pub SWIER1 [
        /// Software interrupt on line 0
        SWI0 OFFSET(0) NUMBITS(1) [],
        /// Software interrupt on line 1
        SWI1 OFFSET(1) NUMBITS(1) [],
        /// Software interrupt on line 2
        SWI2 OFFSET(2) NUMBITS(1) [],
        /// Software interrupt on line 3
        SWI3 OFFSET(3) NUMBITS(1) [],
        /// Software interrupt on line 4
        SWI4 OFFSET(4) NUMBITS(1) [],
        /// Software interrupt on line 5
        SWI5 OFFSET(5) NUMBITS(1) [],
        /// Software interrupt on line 6
        SWI6 OFFSET(6) NUMBITS(1) [],
        /// Software interrupt on line 7
        SWI7 OFFSET(7) NUMBITS(1) [],
        /// Software interrupt on line 8
        SWI8 OFFSET(8) NUMBITS(1) [],
        /// Software interrupt on line 9
        SWI9 OFFSET(9) NUMBITS(1) [],
        /// Software interrupt on line 10
        SWI10 OFFSET(10) NUMBITS(1) [],
        /// Software interrupt on line 11
        SWI11 OFFSET(11) NUMBITS(1) [],
        /// Software interrupt on line 12
        SWI12 OFFSET(12) NUMBITS(1) [],
        /// Software interrupt on line 13
        SWI13 OFFSET(13) NUMBITS(1) [],
        /// Software interrupt on line 14
        SWI14 OFFSET(14) NUMBITS(1) [],
        /// Software interrupt on line 15
        SWI15 OFFSET(15) NUMBITS(1) [],
        /// Software interrupt on line 16
        SWI16 OFFSET(16) NUMBITS(1) [],
        /// Software interrupt on line 18
        SWI18 OFFSET(18) NUMBITS(1) [],
        /// Software interrupt on line 19
        SWI19 OFFSET(19) NUMBITS(1) [],
        /// Software interrupt on line 20
        SWI20 OFFSET(20) NUMBITS(1) [],
        /// Software interrupt on line 21
        SWI21 OFFSET(21) NUMBITS(1) [],
        /// Software interrupt on line 22
        SWI22 OFFSET(22) NUMBITS(1) []
    ],
    pub PR1 [
        /// Pending interrupt flag on line 0
        PIF0 OFFSET(0) NUMBITS(1) [],
        /// Pending interrupt flag on line 1
        PIF1 OFFSET(1) NUMBITS(1) [],
        /// Pending interrupt flag on line 2
        PIF2 OFFSET(2) NUMBITS(1) [],
        /// Pending interrupt flag on line 3
        PIF3 OFFSET(3) NUMBITS(1) [],
        /// Pending interrupt flag on line 4
        PIF4 OFFSET(4) NUMBITS(1) [],
        /// Pending interrupt flag on line 5
        PIF5 OFFSET(5) NUMBITS(1) [],
        /// Pending interrupt flag on line 6
        PIF6 OFFSET(6) NUMBITS(1) [],
        /// Pending interrupt flag on line 7
        PIF7 OFFSET(7) NUMBITS(1) [],
        /// Pending interrupt flag on line 8
        PIF8 OFFSET(8) NUMBITS(1) [],
        /// Pending interrupt flag on line 9
        PIF9 OFFSET(9) NUMBITS(1) [],
        /// Pending interrupt flag on line 10
        PIF10 OFFSET(10) NUMBITS(1) [],
        /// Pending interrupt flag on line 11
        PIF11 OFFSET(11) NUMBITS(1) [],
        /// Pending interrupt flag on line 12
        PIF12 OFFSET(12) NUMBITS(1) [],
        /// Pending interrupt flag on line 13
        PIF13 OFFSET(13) NUMBITS(1) [],
        /// Pending interrupt flag on line 14
        PIF14 OFFSET(14) NUMBITS(1) [],
        /// Pending interrupt flag on line 15
        PIF15 OFFSET(15) NUMBITS(1) [],
        /// Pending interrupt flag on line 16
        PIF16 OFFSET(16) NUMBITS(1) [],
        /// Pending interrupt flag on line 18
        PIF18 OFFSET(18) NUMBITS(1) [],
        /// Pending interrupt flag on line 19
        PIF19 OFFSET(19) NUMBITS(1) [],
        /// Pending interrupt flag on line 20
        PIF20 OFFSET(20) NUMBITS(1) [],
        /// Pending interrupt flag on line 21
        PIF21 OFFSET(21) NUMBITS(1) [],
        /// Pending interrupt flag on line 22
        PIF22 OFFSET(22) NUMBITS(1) []
    ],
    pub IMR2 [
        /// Interrupt mask on line 32
        IM32 OFFSET(0) NUMBITS(1) [],
        /// Interrupt mask on line 33
        IM33 OFFSET(1) NUMBITS(1) [],
        /// Interrupt mask on line 34
        IM34 OFFSET(2) NUMBITS(1) [],
        /// Interrupt mask on line 35
        IM35 OFFSET(3) NUMBITS(1) [],
        /// Interrupt mask on line 36
        IM36 OFFSET(4) NUMBITS(1) [],
        /// Interrupt mask on line 37
        IM37 OFFSET(5) NUMBITS(1) [],
        /// Interrupt mask on line 38
        IM38 OFFSET(6) NUMBITS(1) [],
        /// Interrupt mask on line 39
        IM39 OFFSET(7) NUMBITS(1) [],
        /// Interrupt mask on line 40
        IM40 OFFSET(8) NUMBITS(1) []
    ],
    pub EMR2 [
        /// Event mask on line 32
        EM32 OFFSET(0) NUMBITS(1) [],
        /// Event mask on line 33
        EM33 OFFSET(1) NUMBITS(1) [],
        /// Event mask on line 34
        EM34 OFFSET(2) NUMBITS(1) [],
        /// Event mask on line 35
        EM35 OFFSET(3) NUMBITS(1) [],
        /// Event mask on line 36
        EM36 OFFSET(4) NUMBITS(1) [],
        /// Event mask on line 37
        EM37 OFFSET(5) NUMBITS(1) [],
        /// Event mask on line 38
        EM38 OFFSET(6) NUMBITS(1) [],
        /// Event mask on line 39
        EM39 OFFSET(7) NUMBITS(1) [],
        /// Event mask on line 40
        EM40 OFFSET(8) NUMBITS(1) []
    ],
    pub RTSR2 [
        /// Rising trigger event configuration of line 35
        RT35 OFFSET(3) NUMBITS(1) [],
        /// Rising trigger event configuration of line 36
        RT36 OFFSET(4) NUMBITS(1) [],
        /// Rising trigger event configuration of line 37
        RT37 OFFSET(5) NUMBITS(1) [],
        /// Rising trigger event configuration of line 38
        RT38 OFFSET(6) NUMBITS(1) []
    ],
    pub FTSR2 [
        /// Falling trigger event configuration of line 35
        FT35 OFFSET(3) NUMBITS(1) [],
        /// Falling trigger event configuration of line 36
        FT36 OFFSET(4) NUMBITS(1) [],
        /// Falling trigger event configuration of line 37
        FT37 OFFSET(5) NUMBITS(1) [],
        /// Falling trigger event configuration of line 38
        FT38 OFFSET(6) NUMBITS(1) []
    ],
    pub SWIER2 [
        /// Software interrupt on line 35
        SWI35 OFFSET(3) NUMBITS(1) [],
        /// Software interrupt on line 36
        SWI36 OFFSET(4) NUMBITS(1) [],
        /// Software interrupt on line 37
        SWI37 OFFSET(5) NUMBITS(1) [],
        /// Software interrupt on line 38
        SWI38 OFFSET(6) NUMBITS(1) []
    ],
    pub PR2 [
        /// Pending interrupt flag on line 35
        PIF35 OFFSET(3) NUMBITS(1) [],
        /// Pending interrupt flag on line 36
        PIF36 OFFSET(4) NUMBITS(1) [],
        /// Pending interrupt flag on line 37
        PIF37 OFFSET(5) NUMBITS(1) [],
        /// Pending interrupt flag on line 38
        PIF38 OFFSET(6) NUMBITS(1) []
    ]
];

/// Declares, for one register, a `u32` mask per field plus the `VALID` and
/// `RESERVED` masks. Masks come from the bitfield definitions so the two
/// cannot drift apart.
macro_rules! field_masks {
    ($name:ident => $reg:ident [$($field:ident),* $(,)?]) => {
        #[doc = concat!("Bit masks for the fields of `EXTI_", stringify!($reg), "`.")]
        pub mod $name {
            $(
                #[doc = concat!("Mask of `", stringify!($reg), "::", stringify!($field), "`")]
                pub const $field: u32 = super::$reg::$field.mask << super::$reg::$field.shift;
            )*

            /// Bits that carry a field.
            pub const VALID: u32 = 0 $(| $field)*;
            /// Bits without a field. Their value must never be relied upon.
            pub const RESERVED: u32 = !VALID;
        }
    };
}

field_masks!(imr1 => IMR1 [
    IM0, IM1, IM2, IM3, IM4, IM5, IM6, IM7, IM8, IM9, IM10, IM11, IM12, IM13, IM14,
    IM15, IM16, IM17, IM18, IM19, IM20, IM21, IM22, IM23, IM24, IM25, IM26, IM27,
    IM28, IM29, IM30, IM31,
]);
field_masks!(emr1 => EMR1 [
    EM0, EM1, EM2, EM3, EM4, EM5, EM6, EM7, EM8, EM9, EM10, EM11, EM12, EM13, EM14,
    EM15, EM16, EM17, EM18, EM19, EM20, EM21, EM22, EM23, EM24, EM25, EM26, EM27,
    EM28, EM29, EM30, EM31,
]);
field_masks!(rtsr1 => RTSR1 [
    RT0, RT1, RT2, RT3, RT4, RT5, RT6, RT7, RT8, RT9, RT10, RT11, RT12, RT13, RT14,
    RT15, RT16, RT18, RT19, RT20, RT21, RT22,
]);
field_masks!(ftsr1 => FTSR1 [
    FT0, FT1, FT2, FT3, FT4, FT5, FT6, FT7, FT8, FT9, FT10, FT11, FT12, FT13, FT14,
    FT15, FT16, FT18, FT19, FT20, FT21, FT22,
]);
field_masks!(swier1 => SWIER1 [
    SWI0, SWI1, SWI2, SWI3, SWI4, SWI5, SWI6, SWI7, SWI8, SWI9, SWI10, SWI11, SWI12,
    SWI13, SWI14, SWI15, SWI16, SWI18, SWI19, SWI20, SWI21, SWI22,
]);
field_masks!(pr1 => PR1 [
    PIF0, PIF1, PIF2, PIF3, PIF4, PIF5, PIF6, PIF7, PIF8, PIF9, PIF10, PIF11, PIF12,
    PIF13, PIF14, PIF15, PIF16, PIF18, PIF19, PIF20, PIF21, PIF22,
]);
field_masks!(imr2 => IMR2 [
    IM32, IM33, IM34, IM35, IM36, IM37, IM38, IM39, IM40,
]);
field_masks!(emr2 => EMR2 [
    EM32, EM33, EM34, EM35, EM36, EM37, EM38, EM39, EM40,
]);
field_masks!(rtsr2 => RTSR2 [
    RT35, RT36, RT37, RT38,
]);
field_masks!(ftsr2 => FTSR2 [
    FT35, FT36, FT37, FT38,
]);
field_masks!(swier2 => SWIER2 [
    SWI35, SWI36, SWI37, SWI38,
]);
field_masks!(pr2 => PR2 [
    PIF35, PIF36, PIF37, PIF38,
]);

/// Address of the EXTI block on the APB2 bus.
pub const EXTI_BASE_ADDRESS: usize = 0x4001_0400;

pub const EXTI_BASE: StaticRef<ExtiRegisters> =
    unsafe { StaticRef::new(EXTI_BASE_ADDRESS as *const ExtiRegisters) };

/// Number of lines handled by the controller.
pub const NUM_LINES: usize = 41;

/// An EXTI line.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LineId {
    Exti0 = 0,
    Exti1 = 1,
    Exti2 = 2,
    Exti3 = 3,
    Exti4 = 4,
    Exti5 = 5,
    Exti6 = 6,
    Exti7 = 7,
    Exti8 = 8,
    Exti9 = 9,
    Exti10 = 10,
    Exti11 = 11,
    Exti12 = 12,
    Exti13 = 13,
    Exti14 = 14,
    Exti15 = 15,
    Exti16 = 16,
    Exti17 = 17,
    Exti18 = 18,
    Exti19 = 19,
    Exti20 = 20,
    Exti21 = 21,
    Exti22 = 22,
    Exti23 = 23,
    Exti24 = 24,
    Exti25 = 25,
    Exti26 = 26,
    Exti27 = 27,
    Exti28 = 28,
    Exti29 = 29,
    Exti30 = 30,
    Exti31 = 31,
    Exti32 = 32,
    Exti33 = 33,
    Exti34 = 34,
    Exti35 = 35,
    Exti36 = 36,
    Exti37 = 37,
    Exti38 = 38,
    Exti39 = 39,
    Exti40 = 40,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Bank {
    First,
    Second,
}

impl LineId {
    /// All lines, indexed by line number.
    pub const ALL: [LineId; NUM_LINES] = [
        LineId::Exti0,
        LineId::Exti1,
        LineId::Exti2,
        LineId::Exti3,
        LineId::Exti4,
        LineId::Exti5,
        LineId::Exti6,
        LineId::Exti7,
        LineId::Exti8,
        LineId::Exti9,
        LineId::Exti10,
        LineId::Exti11,
        LineId::Exti12,
        LineId::Exti13,
        LineId::Exti14,
        LineId::Exti15,
        LineId::Exti16,
        LineId::Exti17,
        LineId::Exti18,
        LineId::Exti19,
        LineId::Exti20,
        LineId::Exti21,
        LineId::Exti22,
        LineId::Exti23,
        LineId::Exti24,
        LineId::Exti25,
        LineId::Exti26,
        LineId::Exti27,
        LineId::Exti28,
        LineId::Exti29,
        LineId::Exti30,
        LineId::Exti31,
        LineId::Exti32,
        LineId::Exti33,
        LineId::Exti34,
        LineId::Exti35,
        LineId::Exti36,
        LineId::Exti37,
        LineId::Exti38,
        LineId::Exti39,
        LineId::Exti40,
    ];

    pub const fn number(self) -> u8 {
        self as u8
    }

    fn bank(self) -> Bank {
        if self.number() < 32 {
            Bank::First
        } else {
            Bank::Second
        }
    }

    /// Bit position of the line inside the registers of its bank.
    fn shift(self) -> usize {
        usize::from(self.number() % 32)
    }

    /// Whether the line has a bit in the trigger selection, software
    /// interrupt and pending registers. Direct lines only have mask bits.
    pub fn has_trigger_config(self) -> bool {
        let bit = 1u32 << self.shift();
        match self.bank() {
            Bank::First => bit & rtsr1::VALID != 0,
            Bank::Second => bit & rtsr2::VALID != 0,
        }
    }

    fn configurable_bank(self) -> Result<Bank, ErrorCode> {
        if self.has_trigger_config() {
            Ok(self.bank())
        } else {
            Err(ErrorCode::NOSUPPORT)
        }
    }
}

impl TryFrom<u8> for LineId {
    type Error = ErrorCode;

    fn try_from(number: u8) -> Result<LineId, ErrorCode> {
        LineId::ALL
            .get(usize::from(number))
            .copied()
            .ok_or(ErrorCode::INVAL)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EXTI{}", self.number())
    }
}

/// A set of EXTI lines, bit `n` standing for line `n`.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct LineSet(u64);

impl LineSet {
    pub const fn empty() -> LineSet {
        LineSet(0)
    }

    fn from_banks(first: u32, second: u32) -> LineSet {
        LineSet(u64::from(first) | (u64::from(second & imr2::VALID) << 32))
    }

    fn banks(self) -> (u32, u32) {
        (self.0 as u32, (self.0 >> 32) as u32)
    }

    pub fn insert(&mut self, line: LineId) {
        self.0 |= 1 << line.number();
    }

    pub fn remove(&mut self, line: LineId) {
        self.0 &= !(1 << line.number());
    }

    pub fn contains(&self, line: LineId) -> bool {
        self.0 & (1 << line.number()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates over the lines of the set in ascending order.
    pub fn iter(&self) -> Lines {
        Lines(self.0)
    }
}

impl FromIterator<LineId> for LineSet {
    fn from_iter<I: IntoIterator<Item = LineId>>(iter: I) -> LineSet {
        let mut set = LineSet::empty();
        iter.into_iter().for_each(|line| set.insert(line));
        set
    }
}

impl IntoIterator for LineSet {
    type Item = LineId;
    type IntoIter = Lines;

    fn into_iter(self) -> Lines {
        self.iter()
    }
}

impl fmt::Debug for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, line) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", line)?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the lines of a [`LineSet`], lowest line first.
pub struct Lines(u64);

impl Iterator for Lines {
    type Item = LineId;

    fn next(&mut self) -> Option<LineId> {
        if self.0 != 0 {
            let offset = self.0.trailing_zeros() as usize;
            self.0 &= self.0 - 1;
            LineId::ALL.get(offset).copied()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let popcnt = self.0.count_ones() as usize;
        (popcnt, Some(popcnt))
    }
}

impl ExactSizeIterator for Lines {}

fn modify_line<R: RegisterLongName>(register: &ReadWrite<u32, R>, shift: usize, set: bool) {
    register.modify(Field::<u32, R>::new(1, shift).val(u32::from(set)));
}

fn line_is_set<R: RegisterLongName>(register: &ReadWrite<u32, R>, shift: usize) -> bool {
    register.is_set(Field::<u32, R>::new(1, shift))
}

// Only the addressed bit is written as 1. Writing 0 to SWIER and PR bits has
// no effect, so other lines are left alone.
fn write_line<R: RegisterLongName>(register: &ReadWrite<u32, R>, shift: usize) {
    register.write(Field::<u32, R>::new(1, shift).val(1));
}

// Reserved bits keep whatever value they hold.
fn clear_valid<R: RegisterLongName>(register: &ReadWrite<u32, R>, reserved: u32) {
    register.set(register.get() & reserved);
}

/// Line-level access to an EXTI register block.
///
/// Every setter is a read-modify-write of a single register. Callers sharing
/// the block with interrupt handlers must serialize those accesses
/// themselves.
pub struct Exti {
    registers: StaticRef<ExtiRegisters>,
}

impl Exti {
    pub const fn new(registers: StaticRef<ExtiRegisters>) -> Exti {
        Exti { registers }
    }

    /// The register block, for raw and field accesses.
    pub fn registers(&self) -> &ExtiRegisters {
        &self.registers
    }

    /// Masks the interrupt and event requests of every line. Reserved bits
    /// of the mask registers are written back unchanged.
    pub fn disable_all(&self) {
        clear_valid(&self.registers.imr1, imr1::RESERVED);
        clear_valid(&self.registers.emr1, emr1::RESERVED);
        clear_valid(&self.registers.imr2, imr2::RESERVED);
        clear_valid(&self.registers.emr2, emr2::RESERVED);
    }

    pub fn unmask_interrupt(&self, line: LineId) {
        match line.bank() {
            Bank::First => modify_line(&self.registers.imr1, line.shift(), true),
            Bank::Second => modify_line(&self.registers.imr2, line.shift(), true),
        }
    }

    pub fn mask_interrupt(&self, line: LineId) {
        match line.bank() {
            Bank::First => modify_line(&self.registers.imr1, line.shift(), false),
            Bank::Second => modify_line(&self.registers.imr2, line.shift(), false),
        }
    }

    pub fn is_interrupt_unmasked(&self, line: LineId) -> bool {
        match line.bank() {
            Bank::First => line_is_set(&self.registers.imr1, line.shift()),
            Bank::Second => line_is_set(&self.registers.imr2, line.shift()),
        }
    }

    pub fn unmask_event(&self, line: LineId) {
        match line.bank() {
            Bank::First => modify_line(&self.registers.emr1, line.shift(), true),
            Bank::Second => modify_line(&self.registers.emr2, line.shift(), true),
        }
    }

    pub fn mask_event(&self, line: LineId) {
        match line.bank() {
            Bank::First => modify_line(&self.registers.emr1, line.shift(), false),
            Bank::Second => modify_line(&self.registers.emr2, line.shift(), false),
        }
    }

    pub fn is_event_unmasked(&self, line: LineId) -> bool {
        match line.bank() {
            Bank::First => line_is_set(&self.registers.emr1, line.shift()),
            Bank::Second => line_is_set(&self.registers.emr2, line.shift()),
        }
    }

    pub fn select_rising_trigger(&self, line: LineId) -> Result<(), ErrorCode> {
        match line.configurable_bank()? {
            Bank::First => modify_line(&self.registers.rtsr1, line.shift(), true),
            Bank::Second => modify_line(&self.registers.rtsr2, line.shift(), true),
        }
        Ok(())
    }

    pub fn deselect_rising_trigger(&self, line: LineId) -> Result<(), ErrorCode> {
        match line.configurable_bank()? {
            Bank::First => modify_line(&self.registers.rtsr1, line.shift(), false),
            Bank::Second => modify_line(&self.registers.rtsr2, line.shift(), false),
        }
        Ok(())
    }

    pub fn select_falling_trigger(&self, line: LineId) -> Result<(), ErrorCode> {
        match line.configurable_bank()? {
            Bank::First => modify_line(&self.registers.ftsr1, line.shift(), true),
            Bank::Second => modify_line(&self.registers.ftsr2, line.shift(), true),
        }
        Ok(())
    }

    pub fn deselect_falling_trigger(&self, line: LineId) -> Result<(), ErrorCode> {
        match line.configurable_bank()? {
            Bank::First => modify_line(&self.registers.ftsr1, line.shift(), false),
            Bank::Second => modify_line(&self.registers.ftsr2, line.shift(), false),
        }
        Ok(())
    }

    /// Raises the line's pending flag from software. The request only
    /// reaches the NVIC if the line's interrupt is unmasked.
    pub fn generate_software_interrupt(&self, line: LineId) -> Result<(), ErrorCode> {
        match line.configurable_bank()? {
            Bank::First => write_line(&self.registers.swier1, line.shift()),
            Bank::Second => write_line(&self.registers.swier2, line.shift()),
        }
        Ok(())
    }

    pub fn is_pending(&self, line: LineId) -> Result<bool, ErrorCode> {
        Ok(match line.configurable_bank()? {
            Bank::First => line_is_set(&self.registers.pr1, line.shift()),
            Bank::Second => line_is_set(&self.registers.pr2, line.shift()),
        })
    }

    /// Clears the line's pending flag by writing 1 to its bit only.
    pub fn clear_pending(&self, line: LineId) -> Result<(), ErrorCode> {
        match line.configurable_bank()? {
            Bank::First => write_line(&self.registers.pr1, line.shift()),
            Bank::Second => write_line(&self.registers.pr2, line.shift()),
        }
        Ok(())
    }

    /// Snapshot of the pending flags. Reserved bits of the pending registers
    /// are dropped.
    pub fn pending_lines(&self) -> LineSet {
        LineSet::from_banks(
            self.registers.pr1.get() & pr1::VALID,
            self.registers.pr2.get() & pr2::VALID,
        )
    }

    /// Clears the pending flags of exactly the lines in `lines`, typically a
    /// set returned by [`Exti::pending_lines`]. Flags raised after that
    /// snapshot was taken survive.
    ///
    /// Fails with `NOSUPPORT`, writing nothing, if `lines` holds a direct
    /// line.
    pub fn clear_pending_lines(&self, lines: LineSet) -> Result<(), ErrorCode> {
        let (first, second) = lines.banks();
        if first & pr1::RESERVED != 0 || second & pr2::RESERVED != 0 {
            return Err(ErrorCode::NOSUPPORT);
        }

        if first != 0 {
            self.registers.pr1.set(first);
        }
        if second != 0 {
            self.registers.pr2.set(second);
        }
        Ok(())
    }
}
