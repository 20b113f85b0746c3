// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Point, Rect, Size};

use crate::core::WidgetId;

/// Generic state for a single widget.
///
/// This struct owns the layout results and bookkeeping flags the passes
/// need; the widget's own fields hold everything else.
///
/// Flags are named as follows:
///
/// - `request_xxx`: this widget has asked for xxx to happen before the next
///   pass concludes; cleared by the pass that services the request.
/// - `is_xxx`: describes the widget's current condition.
pub(crate) struct WidgetState {
    pub(crate) id: WidgetId,

    /// The position of the widget's top-left corner, relative to its parent.
    pub(crate) origin: Point,
    /// The size the host allocated to this widget in the last allocation pass.
    pub(crate) size: Size,

    /// This widget has been created but has not yet received
    /// [`Update::WidgetAdded`](crate::core::Update::WidgetAdded).
    pub(crate) is_new: bool,
    /// This widget asked to be re-measured and re-allocated.
    pub(crate) request_layout: bool,
    /// The parent allocated this widget but has not placed it yet.
    ///
    /// Set by `allocate_child`, cleared by `place_child`; a parent which
    /// leaves it set has broken the allocation contract.
    pub(crate) is_expecting_place_child_call: bool,
}

impl WidgetState {
    pub(crate) fn new(id: WidgetId) -> Self {
        Self {
            id,
            origin: Point::ORIGIN,
            size: Size::ZERO,
            is_new: true,
            request_layout: true,
            is_expecting_place_child_call: false,
        }
    }

    /// The widget's region in its parent's coordinate space.
    pub(crate) fn layout_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}
