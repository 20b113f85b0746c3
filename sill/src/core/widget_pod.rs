// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use crate::core::{Widget, WidgetId, WidgetState};

/// A container for one widget in the hierarchy.
///
/// Generally, container widgets don't contain other widgets directly,
/// but rather contain a `WidgetPod`, which has additional state needed
/// for layout and for the widget to participate in the pass system.
pub struct WidgetPod<W: Widget + ?Sized> {
    pub(crate) state: WidgetState,
    pub(crate) inner: Box<W>,
}

impl<W: Widget> WidgetPod<W> {
    /// Create a new widget pod.
    ///
    /// In a widget hierarchy, each widget is wrapped in a `WidgetPod`
    /// so it can participate in layout and the lifecycle passes. The process
    /// of adding a child widget to a container should call this method.
    pub fn new(inner: W) -> Self {
        Self::new_with_id(inner, WidgetId::next())
    }

    /// Create a new widget pod with fixed id.
    pub fn new_with_id(inner: W, id: WidgetId) -> Self {
        Self {
            state: WidgetState::new(id),
            inner: Box::new(inner),
        }
    }
}

impl<W: Widget + ?Sized> WidgetPod<W> {
    /// Type-erase the contained widget.
    ///
    /// Convert a `WidgetPod` pointing to a widget of a specific concrete type
    /// into a `WidgetPod` pointing to a `dyn Widget`.
    pub fn erased(self) -> WidgetPod<dyn Widget> {
        WidgetPod {
            state: self.state,
            inner: self.inner.as_box_dyn(),
        }
    }

    /// The unique id of the widget in this pod.
    pub fn id(&self) -> WidgetId {
        self.state.id
    }

    /// Return a reference to the inner widget.
    pub fn widget(&self) -> &W {
        &self.inner
    }
}
