// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::Size;

/// An axis in visual space.
///
/// Sizing queries are answered one axis at a time, so most of the
/// measurement code is written against this type rather than against
/// width/height pairs. Has some methods for manipulating geometry with
/// respect to the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis
    Horizontal,
    /// The y axis
    Vertical,
}

impl Axis {
    /// Get the axis perpendicular to this one.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extract from the argument the magnitude along this axis
    pub fn major(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extract from the argument the magnitude along the perpendicular axis
    pub fn minor(self, size: Size) -> f64 {
        self.cross().major(size)
    }

    /// Arrange the major and minor measurements with respect to this axis
    /// such that it forms an (x, y) pair.
    pub fn pack(self, major: f64, minor: f64) -> (f64, f64) {
        match self {
            Self::Horizontal => (major, minor),
            Self::Vertical => (minor, major),
        }
    }

    /// Build a [`Size`] from the major and minor measurements on this axis.
    pub fn pack_size(self, major: f64, minor: f64) -> Size {
        let (width, height) = self.pack(major, minor);
        Size::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_minor() {
        let size = Size::new(300.0, 200.0);
        assert_eq!(Axis::Horizontal.major(size), 300.0);
        assert_eq!(Axis::Horizontal.minor(size), 200.0);
        assert_eq!(Axis::Vertical.major(size), 200.0);
        assert_eq!(Axis::Vertical.minor(size), 300.0);
    }

    #[test]
    fn pack_round_trips() {
        let size = Size::new(300.0, 200.0);
        for axis in [Axis::Horizontal, Axis::Vertical] {
            assert_eq!(axis.pack_size(axis.major(size), axis.minor(size)), size);
        }
    }
}
