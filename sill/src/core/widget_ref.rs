// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::core::{FromDynWidget, Widget, WidgetId, WidgetState};

/// A rich reference to a [`Widget`].
///
/// Widgets in the tree are bundled with their [`WidgetState`] in a
/// [`WidgetPod`](crate::core::WidgetPod); this type bundles a shared
/// reference to both halves, so inspection code (and tests) can see a
/// widget's layout results next to the widget itself.
///
/// This is only for shared access; to mutate widgets, see
/// [`WidgetMut`](crate::core::WidgetMut).
pub struct WidgetRef<'w, W: Widget + ?Sized> {
    pub(crate) state: &'w WidgetState,
    pub(crate) widget: &'w W,
}

// Manual impls: the derives would add spurious `W: Clone` bounds.
impl<W: Widget + ?Sized> Clone for WidgetRef<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: Widget + ?Sized> Copy for WidgetRef<'_, W> {}

impl<'w, W: Widget + ?Sized> WidgetRef<'w, W> {
    /// The widget this reference points to.
    pub fn widget(self) -> &'w W {
        self.widget
    }

    /// The widget's id.
    pub fn id(self) -> WidgetId {
        self.state.id
    }

    /// The size the host allocated to this widget in the last allocation pass.
    pub fn size(self) -> Size {
        self.state.size
    }

    /// The widget's origin, relative to its parent.
    pub fn origin(self) -> Point {
        self.state.origin
    }

    /// The widget's region in its parent's coordinate space.
    pub fn layout_rect(self) -> Rect {
        self.state.layout_rect()
    }

    /// Attempt to view the widget as an instance of `W2`.
    pub fn downcast<W2: Widget + FromDynWidget + ?Sized>(self) -> Option<WidgetRef<'w, W2>> {
        Some(WidgetRef {
            state: self.state,
            widget: W2::from_dyn(self.widget.as_dyn())?,
        })
    }

    /// References to this widget's children.
    pub fn children(self) -> SmallVec<[WidgetRef<'w, dyn Widget>; 16]> {
        self.widget
            .as_dyn()
            .children()
            .into_iter()
            .map(|child| WidgetRef {
                state: &child.state,
                widget: &*child.inner,
            })
            .collect()
    }

    /// Recursively find the descendant widget with the given id, if any.
    ///
    /// The search includes `self`.
    pub fn find_widget_by_id(self, id: WidgetId) -> Option<WidgetRef<'w, dyn Widget>> {
        let as_dyn = WidgetRef {
            state: self.state,
            widget: self.widget.as_dyn(),
        };
        if self.state.id == id {
            return Some(as_dyn);
        }
        as_dyn
            .children()
            .into_iter()
            .find_map(|child| child.find_widget_by_id(id))
    }
}
