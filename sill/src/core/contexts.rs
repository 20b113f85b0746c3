// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! The context types that are passed into various widget methods.

use kurbo::{Point, Size};
use tracing::trace;

use crate::app::HostRootState;
use crate::core::{
    Axis, Measurement, RequestMode, Update, Widget, WidgetId, WidgetMut, WidgetPod, WidgetState,
};
use crate::passes::{run_allocate_on, run_measure_on};

// Note - Most methods defined in this file revolve around `WidgetState` fields.
// Consider reading `WidgetState` documentation (especially the documented naming scheme)
// before editing context method code.

/// A macro for implementing methods on multiple contexts.
///
/// There are a lot of methods defined on multiple contexts; this lets us only
/// have to write them out once.
macro_rules! impl_context_method {
    ($ty:ty,  { $($method:item)+ } ) => {
        impl $ty { $($method)+ }
    };
    ( $ty:ty, $($more:ty),+, { $($method:item)+ } ) => {
        impl_context_method!($ty, { $($method)+ });
        impl_context_method!($($more),+, { $($method)+ });
    };
}

/// A context provided inside of [`WidgetMut`].
///
/// When you declare a mutable reference type for your widget, methods of this type
/// will have access to a `MutateCtx`. If that method changes the widget in a way
/// that affects its size, it must signal that with
/// [`request_layout`](MutateCtx::request_layout).
pub struct MutateCtx<'a> {
    pub(crate) global_state: &'a mut HostRootState,
    pub(crate) widget_state: &'a mut WidgetState,
}

/// A context provided to the [`Widget::register_children`] method.
pub struct RegisterCtx<'a> {
    pub(crate) global_state: &'a mut HostRootState,
    #[cfg(debug_assertions)]
    pub(crate) registered_ids: Vec<WidgetId>,
}

/// A context provided to the [`Widget::update`] method.
pub struct UpdateCtx<'a> {
    pub(crate) global_state: &'a mut HostRootState,
    pub(crate) widget_state: &'a mut WidgetState,
}

/// A context provided to [`Widget::measure`] methods.
pub struct MeasureCtx<'a> {
    pub(crate) global_state: &'a mut HostRootState,
    pub(crate) widget_state: &'a mut WidgetState,
}

/// A context provided to [`Widget::allocate`] methods.
pub struct AllocateCtx<'a> {
    pub(crate) global_state: &'a mut HostRootState,
    pub(crate) widget_state: &'a mut WidgetState,
}

// --- MARK: GETTERS
// Methods for all context types that have a widget state
impl_context_method!(
    MutateCtx<'_>,
    UpdateCtx<'_>,
    MeasureCtx<'_>,
    AllocateCtx<'_>,
    {
        /// The `WidgetId` of the current widget.
        pub fn widget_id(&self) -> WidgetId {
            self.widget_state.id
        }
    }
);

// --- MARK: WIDGET_MUT
// Methods to get a child WidgetMut from a parent.
impl MutateCtx<'_> {
    /// Returns a [`WidgetMut`] to a child widget.
    pub fn get_mut<'c, Child: Widget + ?Sized>(
        &'c mut self,
        child: &'c mut WidgetPod<Child>,
    ) -> WidgetMut<'c, Child> {
        let child_ctx = MutateCtx {
            global_state: self.global_state,
            widget_state: &mut child.state,
        };
        WidgetMut {
            ctx: child_ctx,
            widget: &mut child.inner,
        }
    }

    pub(crate) fn reborrow_mut(&mut self) -> MutateCtx<'_> {
        MutateCtx {
            global_state: self.global_state,
            widget_state: self.widget_state,
        }
    }
}

// --- MARK: UPDATE FLAGS
// Methods on all context types that can invalidate the tree
impl_context_method!(MutateCtx<'_>, UpdateCtx<'_>, {
    /// Requests a layout pass.
    ///
    /// Call this method if the widget has changed in a way that requires
    /// re-measuring and re-allocating it.
    pub fn request_layout(&mut self) {
        trace!("request_layout");
        self.widget_state.request_layout = true;
        self.global_state.needs_layout = true;
    }

    /// Signals that this widget's children have changed.
    ///
    /// Container widgets must call this after adding or removing a child. The
    /// tree-update pass will then visit the new children before the next
    /// allocation pass and deliver [`Update::WidgetAdded`] to them.
    pub fn children_changed(&mut self) {
        trace!("children_changed");
        self.global_state.needs_update_tree = true;
        self.request_layout();
    }

    /// Removes a child widget from the tree and drops it.
    ///
    /// Container widgets should take the pod out of their own storage and
    /// pass it to this method.
    pub fn remove_child(&mut self, child: WidgetPod<impl Widget + ?Sized>) {
        trace!(
            "Removing '{}' {}",
            child.widget().short_type_name(),
            child.id()
        );
        drop(child);
        self.children_changed();
    }
});

// --- MARK: MEASURE
impl MeasureCtx<'_> {
    /// Measures a child widget along `axis`.
    ///
    /// `for_size` is the already-decided length along the other axis, if any.
    /// Passing it through is how a height-for-width container lets a child's
    /// height depend on the width the container settled on.
    ///
    /// If present, `for_size` must be finite and non-negative. An invalid
    /// `for_size` will fall back to `None`.
    ///
    /// # Panics
    ///
    /// Panics if `for_size` is non-finite or negative and debug assertions are enabled.
    pub fn measure_child(
        &mut self,
        child: &mut WidgetPod<impl Widget + ?Sized>,
        axis: Axis,
        for_size: Option<f64>,
    ) -> Measurement {
        let for_size = match for_size {
            Some(length) if !length.is_finite() || length < 0.0 => {
                debug_panic!(
                    "Error in {}: trying to call 'measure_child' with child '{}' {} with invalid for_size {}",
                    self.widget_id(),
                    child.widget().short_type_name(),
                    child.id(),
                    length,
                );
                None
            }
            other => other,
        };
        run_measure_on(self.global_state, child, axis, for_size)
    }
}

// --- MARK: ALLOCATE
impl AllocateCtx<'_> {
    /// Allocates `size` to a child widget.
    ///
    /// Container widgets must call this method with each child in their
    /// implementation of [`Widget::allocate`], followed by
    /// [`place_child`](Self::place_child).
    ///
    /// # Panics
    ///
    /// Panics if the provided `size` is non-finite or negative and debug assertions are enabled.
    pub fn allocate_child(&mut self, child: &mut WidgetPod<impl Widget + ?Sized>, size: Size) {
        run_allocate_on(self.global_state, child, size);
    }

    /// Sets the position of the `child` widget, in this widget's coordinate space.
    ///
    /// Container widgets must call this method with each child in their
    /// [`allocate`] method, after calling `ctx.allocate_child(child, size)`.
    ///
    /// # Panics
    ///
    /// This method will panic if [`AllocateCtx::allocate_child`] has not been called
    /// yet for the child and debug assertions are enabled.
    ///
    /// [`allocate`]: Widget::allocate
    #[track_caller]
    pub fn place_child(&mut self, child: &mut WidgetPod<impl Widget + ?Sized>, origin: Point) {
        if !child.state.is_expecting_place_child_call {
            debug_panic!(
                "Error in {}: trying to call 'place_child' with child '{}' {} before allocating it",
                self.widget_id(),
                child.widget().short_type_name(),
                child.id(),
            );
        }
        if origin.x.is_nan()
            || origin.x.is_infinite()
            || origin.y.is_nan()
            || origin.y.is_infinite()
        {
            debug_panic!(
                "Error in {}: trying to call 'place_child' with child '{}' {} with invalid origin {:?}",
                self.widget_id(),
                child.widget().short_type_name(),
                child.id(),
                origin,
            );
        }
        child.state.is_expecting_place_child_call = false;
        child.state.origin = origin;
    }

    /// The [`RequestMode`] of a child widget.
    ///
    /// Containers that carry the host's measure order down to a single child
    /// use this to decide which of the child's axes to measure first.
    pub fn child_request_mode(&self, child: &WidgetPod<impl Widget + ?Sized>) -> RequestMode {
        child.widget().request_mode()
    }
}

// --- MARK: REGISTER
impl RegisterCtx<'_> {
    /// Registers a child widget.
    ///
    /// Container widgets should call this on all their children in
    /// their implementation of [`Widget::register_children`].
    ///
    /// A child registered for the first time receives [`Update::WidgetAdded`]
    /// before its own children are visited, so attach notifications arrive
    /// strictly top-down.
    pub fn register_child(&mut self, child: &mut WidgetPod<impl Widget + ?Sized>) {
        #[cfg(debug_assertions)]
        {
            self.registered_ids.push(child.id());
        }

        if child.state.is_new {
            child.state.is_new = false;
            let mut ctx = UpdateCtx {
                global_state: self.global_state,
                widget_state: &mut child.state,
            };
            child.inner.update(&mut ctx, &Update::WidgetAdded);
            trace!(
                "{} received Update::WidgetAdded",
                child.inner.short_type_name()
            );
        }

        let mut ctx = RegisterCtx {
            global_state: self.global_state,
            #[cfg(debug_assertions)]
            registered_ids: Vec::new(),
        };
        child.inner.register_children(&mut ctx);

        #[cfg(debug_assertions)]
        {
            let children_ids = child.inner.children_ids();
            for child_id in &ctx.registered_ids {
                if !children_ids.contains(child_id) {
                    panic!(
                        "Error in '{}' {}: method register_children() called \
                        RegisterCtx::register_child() on child {}, which isn't \
                        in the list returned by children_ids()",
                        child.inner.short_type_name(),
                        child.id(),
                        child_id
                    );
                }
            }
            for child_id in children_ids {
                if !ctx.registered_ids.contains(&child_id) {
                    panic!(
                        "Error in '{}' {}: method register_children() did not call \
                        RegisterCtx::register_child() on child {} returned by children_ids()",
                        child.inner.short_type_name(),
                        child.id(),
                        child_id
                    );
                }
            }
        }
    }
}
