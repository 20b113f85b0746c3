// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use crate::core::Axis;

/// A widget's reported size bounds along one axis.
///
/// This is the answer to a [`measure`](crate::core::Widget::measure) query:
/// the smallest length the widget can be given without clipping or
/// misbehaving, and the length it would prefer when more space is available.
///
/// `natural` is a hint, not a promise. A widget which defers entirely to
/// whatever size the host assigns reports a natural length of zero, even
/// when its minimum is larger; hosts treat the minimum as the effective
/// preference in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// The smallest acceptable length along the measured axis.
    pub minimum: f64,
    /// The preferred length along the measured axis.
    pub natural: f64,
}

impl Measurement {
    /// A measurement reporting zero for both bounds.
    pub const ZERO: Self = Self {
        minimum: 0.0,
        natural: 0.0,
    };

    /// Create a new measurement.
    pub fn new(minimum: f64, natural: f64) -> Self {
        Self { minimum, natural }
    }

    /// A measurement with no flexibility: minimum and natural are the same.
    pub fn fixed(length: f64) -> Self {
        Self {
            minimum: length,
            natural: length,
        }
    }

    /// The preferred length, never below the minimum.
    pub fn preference(&self) -> f64 {
        self.natural.max(self.minimum)
    }
}

/// How a widget resolves its two axes against each other.
///
/// Hosts measure one axis first, then measure the other at the length the
/// first one resolved to. This enum tells the host which axis to start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMode {
    /// Width is decided first; height is measured as a function of that width.
    #[default]
    HeightForWidth,
    /// Height is decided first; width is measured as a function of that height.
    WidthForHeight,
}

impl RequestMode {
    /// The axis the host must measure first under this mode.
    pub fn leading_axis(self) -> Axis {
        match self {
            Self::HeightForWidth => Axis::Horizontal,
            Self::WidthForHeight => Axis::Vertical,
        }
    }
}
