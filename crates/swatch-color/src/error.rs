// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors produced while reading a color from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not `#RGB` or `#RRGGBB` (leading `#` optional).
    #[error("invalid hex color {0:?}: expected #RGB or #RRGGBB")]
    InvalidFormat(String),
}
