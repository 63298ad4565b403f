//! Presentation lookup values shared by the classification engines.
//!
//! Classifications are tagged enums; the label/color pair for each variant
//! comes from a static, exhaustively-matched lookup so a new variant cannot
//! fall through to undefined styling.

use serde::{Deserialize, Serialize};

/// Abstract color token the rendering layer maps onto its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Green,
    Blue,
    Yellow,
    Red,
}

/// Label and color band for one classification variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub label: &'static str,
    pub color: ColorToken,
}
