// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Why a hex color string could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Digit count (after an optional `#`) was not 3, 4, 6 or 8.
    #[error("expected 3, 4, 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),

    /// A character that is not a hex digit, at byte `index` after the `#`.
    #[error("invalid hex digit {found:?} at position {index}")]
    InvalidDigit { index: usize, found: char },
}
