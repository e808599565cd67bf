//! Spacing and corner radius tokens.

use serde::Serialize;

/// Semantic spacing for margins, padding and gaps.
///
/// | Token | Base |
/// |-------|------|
/// | `xs`  | 4    |
/// | `sm`  | 8    |
/// | `md`  | 16   |
/// | `lg`  | 24   |
/// | `xl`  | 40   |
/// | `xxl` | 64   |
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpacingTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
}

impl SpacingTokens {
    pub const BASE: Self = Self {
        xs: 4.0,
        sm: 8.0,
        md: 16.0,
        lg: 24.0,
        xl: 40.0,
        xxl: 64.0,
    };

    pub fn scaled(scale: f32) -> Self {
        Self {
            xs: Self::BASE.xs * scale,
            sm: Self::BASE.sm * scale,
            md: Self::BASE.md * scale,
            lg: Self::BASE.lg * scale,
            xl: Self::BASE.xl * scale,
            xxl: Self::BASE.xxl * scale,
        }
    }

    pub fn get(&self, size: SpacingSize) -> f32 {
        match size {
            SpacingSize::Xs => self.xs,
            SpacingSize::Sm => self.sm,
            SpacingSize::Md => self.md,
            SpacingSize::Lg => self.lg,
            SpacingSize::Xl => self.xl,
            SpacingSize::Xxl => self.xxl,
        }
    }

    pub fn get_u16(&self, size: SpacingSize) -> u16 {
        self.get(size).round() as u16
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self::BASE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

/// Corner radii. Radii do not scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Radius {
    R4,
    R6,
    R8,
    R12,
    R16,
    /// Pill shape.
    Rounded,
    Circle,
}

impl Radius {
    pub const ALL: [Radius; 7] = [
        Radius::R4,
        Radius::R6,
        Radius::R8,
        Radius::R12,
        Radius::R16,
        Radius::Rounded,
        Radius::Circle,
    ];

    pub fn css(self) -> &'static str {
        match self {
            Radius::R4 => "4px",
            Radius::R6 => "6px",
            Radius::R8 => "8px",
            Radius::R12 => "12px",
            Radius::R16 => "16px",
            Radius::Rounded => "9999px",
            Radius::Circle => "50%",
        }
    }
}
