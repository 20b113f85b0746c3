// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use dpi::PhysicalSize;

/// A global event.
///
/// The embedder owns the native window and forwards these to
/// [`HostRoot::handle_window_event`](crate::app::HostRoot::handle_window_event)
/// as they arrive from the platform.
#[derive(Debug, Clone)]
pub enum WindowEvent {
    /// The window's DPI factor changed.
    Rescale(f64),
    /// The window was resized.
    Resize(PhysicalSize<u32>),
}

/// Lifecycle events.
///
/// Unlike [`measure`](crate::core::Widget::measure) and
/// [`allocate`](crate::core::Widget::allocate), these events are not
/// driven by the layout pass; they notify a widget of changes to its
/// place in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// Sent to a widget when it is added to the widget tree. This should be
    /// the first message that each widget receives.
    ///
    /// Widgets should handle this event in order to do any initial setup.
    ///
    /// The tree-update pass delivers this recursively; container widgets
    /// never need to forward it to their children by hand.
    WidgetAdded,
}

/// An enum for specifying whether an event was handled.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Handled {
    /// An event was already handled, and shouldn't be propagated to other event handlers.
    Yes,
    /// An event has not yet been handled.
    No,
}

impl Handled {
    /// Has the event been handled yet?
    pub fn is_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    /// Returns `Handled::Yes` if `handled` is true, and `Handled::No` otherwise.
    fn from(handled: bool) -> Self {
        if handled { Self::Yes } else { Self::No }
    }
}
