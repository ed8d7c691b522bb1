// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Standard error enum for line-level operations.

use core::fmt;

/// Errors returned when an operation cannot be applied to an EXTI line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// An invalid parameter was passed, e.g. a line number above 40
    INVAL = 5,
    /// The line has no bit in the addressed register (direct lines have no
    /// trigger, software interrupt or pending bit)
    NOSUPPORT = 9,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorCode::INVAL => write!(f, "invalid parameter"),
            ErrorCode::NOSUPPORT => write!(f, "operation not supported"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn numeric_values_match_kernel_codes() {
        assert_eq!(usize::from(ErrorCode::INVAL), 5);
        assert_eq!(usize::from(ErrorCode::NOSUPPORT), 9);
    }
}
