//! Axis selection for scrolling.

use std::ops::BitOr;

use glide_ui_graphics::{DpPoint2F, PxPoint2, PxSize2D};

const BIT_X: u8 = 0x01;
const BIT_Y: u8 = 0x02;

/// Which axes take part in scrolling. Values on a disabled axis are always
/// forced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollModeFlags {
    NotDefined,
    TranslateX,
    TranslateY,
    #[default]
    Translate,
}

impl ScrollModeFlags {
    pub const fn bits(self) -> u8 {
        match self {
            ScrollModeFlags::NotDefined => 0,
            ScrollModeFlags::TranslateX => BIT_X,
            ScrollModeFlags::TranslateY => BIT_Y,
            ScrollModeFlags::Translate => BIT_X | BIT_Y,
        }
    }

    /// Unknown bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match (bits & BIT_X != 0, bits & BIT_Y != 0) {
            (false, false) => ScrollModeFlags::NotDefined,
            (true, false) => ScrollModeFlags::TranslateX,
            (false, true) => ScrollModeFlags::TranslateY,
            (true, true) => ScrollModeFlags::Translate,
        }
    }

    /// True if every axis in `flag` is enabled in `self`.
    pub const fn is_enabled(self, flag: ScrollModeFlags) -> bool {
        flag.bits() != 0 && (self.bits() & flag.bits()) == flag.bits()
    }

    pub const fn allows_x(self) -> bool {
        self.is_enabled(ScrollModeFlags::TranslateX)
    }

    pub const fn allows_y(self) -> bool {
        self.is_enabled(ScrollModeFlags::TranslateY)
    }

    pub fn apply_px(self, value: PxPoint2) -> PxPoint2 {
        PxPoint2::new(
            if self.allows_x() { value.x } else { 0 },
            if self.allows_y() { value.y } else { 0 },
        )
    }

    pub fn apply_dp(self, value: DpPoint2F) -> DpPoint2F {
        DpPoint2F::new(
            if self.allows_x() { value.x } else { 0.0 },
            if self.allows_y() { value.y } else { 0.0 },
        )
    }

    /// Content only needs to scroll when it overflows the area along an
    /// enabled axis.
    pub fn is_scrolling_required(self, area_px: PxSize2D, content_px: PxSize2D) -> bool {
        let overflows_x = content_px.width() > area_px.width();
        let overflows_y = content_px.height() > area_px.height();
        match self {
            ScrollModeFlags::TranslateX => overflows_x,
            ScrollModeFlags::TranslateY => overflows_y,
            ScrollModeFlags::Translate => overflows_x || overflows_y,
            ScrollModeFlags::NotDefined => false,
        }
    }
}

impl BitOr for ScrollModeFlags {
    type Output = ScrollModeFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        ScrollModeFlags::from_bits(self.bits() | rhs.bits())
    }
}
