//! Density-driven conversion between dp and px space.

use crate::{Dp, DpPoint2F, Px, PxPoint2, PxVector2};

/// Density at which one dp equals one px.
pub const BASE_DPI: u16 = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitError {
    ZeroDensity,
}

impl std::fmt::Display for UnitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitError::ZeroDensity => write!(f, "screen density must be greater than zero dpi"),
        }
    }
}

impl std::error::Error for UnitError {}

/// Screen density in dots per inch. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DensityDpi(u16);

impl DensityDpi {
    pub const BASE: DensityDpi = DensityDpi(BASE_DPI);

    pub fn new(dpi: u16) -> Result<Self, UnitError> {
        if dpi == 0 {
            return Err(UnitError::ZeroDensity);
        }
        Ok(Self(dpi))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl Default for DensityDpi {
    fn default() -> Self {
        Self::BASE
    }
}

impl TryFrom<u16> for DensityDpi {
    type Error = UnitError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Converts values between dp and px for a given screen density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    density_dpi: DensityDpi,
    scale_px_to_dp: f32,
    scale_dp_to_px: f32,
}

impl UnitConverter {
    pub fn new(density_dpi: DensityDpi) -> Self {
        let dpi = density_dpi.get() as f32;
        Self {
            density_dpi,
            scale_px_to_dp: BASE_DPI as f32 / dpi,
            scale_dp_to_px: dpi / BASE_DPI as f32,
        }
    }

    pub fn density_dpi(&self) -> DensityDpi {
        self.density_dpi
    }

    pub fn set_density_dpi(&mut self, density_dpi: DensityDpi) {
        *self = Self::new(density_dpi);
    }

    pub fn px_to_dpf(&self, value_pxf: f32) -> f32 {
        value_pxf * self.scale_px_to_dp
    }

    pub fn dp_to_pxf(&self, value_dpf: f32) -> f32 {
        value_dpf * self.scale_dp_to_px
    }

    pub fn to_dp_value(&self, value: Px) -> Dp {
        Dp(self.px_to_dpf(value.0 as f32))
    }

    /// Rounds to the nearest whole pixel.
    pub fn to_px_value(&self, value: Dp) -> Px {
        Px(self.dp_to_pxf(value.0).round() as i32)
    }

    pub fn to_px_vector2(&self, value: DpPoint2F) -> PxVector2 {
        PxVector2::new(self.dp_to_pxf(value.x), self.dp_to_pxf(value.y))
    }

    pub fn to_dp_point2f(&self, value: PxPoint2) -> DpPoint2F {
        DpPoint2F::new(self.px_to_dpf(value.x as f32), self.px_to_dpf(value.y as f32))
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new(DensityDpi::BASE)
    }
}

#[cfg(test)]
#[path = "tests/converter_tests.rs"]
mod tests;
