// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! A blank widget taking up space.

use kurbo::Size;

use crate::core::{AllocateCtx, Axis, MeasureCtx, Measurement, Widget, WidgetMut};

/// A childless widget with a configurable preferred and minimum size.
///
/// A `Spacer` accepts whatever the host allocates to it. It stands in for
/// the surface an embedding framework would mount inside a
/// [`SizingProxy`](crate::widgets::SizingProxy), and is useful in tests for
/// the same reason.
pub struct Spacer {
    preferred: Size,
    minimum: Size,
}

// --- MARK: BUILDERS
impl Spacer {
    /// Create a spacer with zero preferred and minimum size.
    pub fn new() -> Self {
        Self {
            preferred: Size::ZERO,
            minimum: Size::ZERO,
        }
    }

    /// Builder-style method for setting the spacer's preferred size.
    pub fn with_preferred(mut self, size: Size) -> Self {
        self.preferred = size;
        self
    }

    /// Builder-style method for setting the spacer's minimum size.
    pub fn with_minimum(mut self, size: Size) -> Self {
        self.minimum = size;
        self
    }
}

impl Default for Spacer {
    fn default() -> Self {
        Self::new()
    }
}

// --- MARK: WIDGETMUT
impl Spacer {
    /// Set the spacer's preferred size.
    pub fn set_preferred(this: &mut WidgetMut<'_, Self>, size: Size) {
        this.widget.preferred = size;
        this.ctx.request_layout();
    }

    /// Set the spacer's minimum size.
    pub fn set_minimum(this: &mut WidgetMut<'_, Self>, size: Size) {
        this.widget.minimum = size;
        this.ctx.request_layout();
    }
}

// --- MARK: IMPL WIDGET
impl Widget for Spacer {
    fn measure(
        &mut self,
        _ctx: &mut MeasureCtx<'_>,
        axis: Axis,
        _for_size: Option<f64>,
    ) -> Measurement {
        let minimum = axis.major(self.minimum);
        Measurement {
            minimum,
            natural: axis.major(self.preferred).max(minimum),
        }
    }

    fn allocate(&mut self, _ctx: &mut AllocateCtx<'_>, _size: Size) {}
}
