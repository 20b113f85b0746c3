// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use std::any::Any;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use kurbo::Size;
use smallvec::SmallVec;
use tracing::field::DisplayValue;
use tracing::{Span, trace_span};

use crate::core::{
    AllocateCtx, Axis, MeasureCtx, Measurement, RegisterCtx, RequestMode, Update, UpdateCtx,
    WidgetPod,
};

/// A unique identifier for a widget.
///
/// Widget ids are assigned when the widget's [`WidgetPod`] is created and
/// stay stable for the widget's lifetime. They are not respawned if the
/// widget is dropped and a similar one is created.
///
/// A widget can retrieve its id via methods on the various contexts, such as
/// [`UpdateCtx::widget_id`](crate::core::UpdateCtx::widget_id).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct WidgetId(pub(crate) NonZeroU64);

impl WidgetId {
    /// Allocates a new, unique `WidgetId`.
    ///
    /// All widgets are assigned ids automatically; you should only create
    /// an explicit id if you need to know it ahead of time, for instance
    /// if you want two sibling widgets to know each others' ids.
    ///
    /// You must ensure that a given `WidgetId` is only ever used for one
    /// widget at a time.
    pub fn next() -> Self {
        static WIDGET_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
        let id = WIDGET_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        // The counter starts at 1 and only increments, so this cannot be zero.
        Self(id.try_into().unwrap())
    }

    /// Returns the integer value of the `WidgetId`.
    pub fn to_raw(self) -> u64 {
        self.0.into()
    }

    /// A serialized representation of the `WidgetId` for debugging purposes.
    pub fn trace(self) -> DisplayValue<Self> {
        tracing::field::display(self)
    }
}

impl From<WidgetId> for u64 {
    fn from(id: WidgetId) -> Self {
        id.0.into()
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[doc(hidden)]
/// A trait to access a [`Widget`] value as a trait object. It is implemented for all types that implement `Widget`.
pub trait AsDynWidget {
    fn as_box_dyn(self: Box<Self>) -> Box<dyn Widget>;
    fn as_dyn(&self) -> &dyn Widget;
    fn as_mut_dyn(&mut self) -> &mut dyn Widget;
}

impl<T: Widget> AsDynWidget for T {
    fn as_box_dyn(self: Box<Self>) -> Box<dyn Widget> {
        self
    }

    fn as_dyn(&self) -> &dyn Widget {
        self as &dyn Widget
    }

    fn as_mut_dyn(&mut self) -> &mut dyn Widget {
        self as &mut dyn Widget
    }
}

/// A trait that lets functions either downcast to a `Sized` widget or keep a `dyn Widget`.
pub trait FromDynWidget {
    /// Downcasts `widget` if `Self: Sized`, else returns it as-is.
    fn from_dyn(widget: &dyn Widget) -> Option<&Self>;
    /// Downcasts `widget` if `Self: Sized`, else returns it as-is.
    fn from_dyn_mut(widget: &mut dyn Widget) -> Option<&mut Self>;
}

impl<T: Widget> FromDynWidget for T {
    fn from_dyn(widget: &dyn Widget) -> Option<&Self> {
        (widget as &dyn Any).downcast_ref()
    }

    fn from_dyn_mut(widget: &mut dyn Widget) -> Option<&mut Self> {
        (widget as &mut dyn Any).downcast_mut()
    }
}

impl FromDynWidget for dyn Widget {
    fn from_dyn(widget: &dyn Widget) -> Option<&Self> {
        Some(widget)
    }

    fn from_dyn_mut(widget: &mut dyn Widget) -> Option<&mut Self> {
        Some(widget)
    }
}

/// A collection of widget ids, as returned from [`Widget::children_ids`].
///
/// Internally, this uses a small vector optimisation, but you should treat it as an append-only `Vec<WidgetId>`.
pub type ChildrenIds = SmallVec<[WidgetId; 16]>;

/// A collection of references to child pods, as returned from [`Widget::children`].
pub type ChildrenRefs<'w> = SmallVec<[&'w WidgetPod<dyn Widget>; 16]>;

/// The trait implemented by all widgets.
///
/// Widgets participate in the host's two-phase layout: [`measure`](Self::measure)
/// reports size bounds along one axis, then [`allocate`](Self::allocate) hands the
/// widget its final size. Between tree mutations, [`update`](Self::update) delivers
/// lifecycle notifications.
///
/// These trait methods are provided with a corresponding context. The widget can
/// request things and cause actions by calling methods on that context.
///
/// Container widgets own their children through [`WidgetPod`]s, expose them
/// through [`children`](Self::children) and [`register_children`](Self::register_children),
/// and must allocate and place every child exactly once per allocation pass.
///
/// Generally speaking, widgets aren't used directly. They are stored in the tree
/// behind [`WidgetPod`]s, their methods are called by the passes, and they are
/// only mutated either during a method call or through a
/// [`WidgetMut`](crate::core::WidgetMut).
#[allow(unused_variables, reason = "Default impls don't use method arguments")]
pub trait Widget: AsDynWidget + Any {
    /// Report this widget's size bounds along `axis`.
    ///
    /// When the cross axis has already been resolved (the second query of a
    /// [`RequestMode`] pair), `for_size` carries that decided length;
    /// otherwise it is `None`. Widgets whose two axes are independent are
    /// free to ignore it.
    fn measure(
        &mut self,
        ctx: &mut MeasureCtx<'_>,
        axis: Axis,
        for_size: Option<f64>,
    ) -> Measurement;

    /// Accept this widget's final size.
    ///
    /// The host has already recorded `size` as the widget's allocation when
    /// this is called. Container widgets must allocate each child with
    /// [`AllocateCtx::allocate_child`] and position it with
    /// [`AllocateCtx::place_child`], both exactly once per child.
    fn allocate(&mut self, ctx: &mut AllocateCtx<'_>, size: Size);

    /// Which axis the host must measure first for this widget.
    ///
    /// The default is [`RequestMode::HeightForWidth`], the common mode for
    /// text-bearing western-script UIs.
    fn request_mode(&self) -> RequestMode {
        RequestMode::default()
    }

    /// Handle a lifecycle notification.
    fn update(&mut self, ctx: &mut UpdateCtx<'_>, event: &Update) {}

    /// Register child widgets with the tree.
    ///
    /// Container widgets must call [`RegisterCtx::register_child`] for every
    /// child pod they own. Leaf widgets keep the default empty implementation.
    ///
    /// This is called by the tree-update pass after the set of children may
    /// have changed; newly registered children receive
    /// [`Update::WidgetAdded`] before this widget's next layout.
    fn register_children(&mut self, ctx: &mut RegisterCtx<'_>) {}

    /// Return references to this widget's child pods.
    ///
    /// Leaf widgets return an empty collection. The set returned here must
    /// stay stable for the duration of a layout pass and match the children
    /// visited by [`register_children`](Self::register_children).
    fn children(&self) -> ChildrenRefs<'_> {
        SmallVec::new()
    }

    /// The ids of this widget's children, in the same order as
    /// [`children`](Self::children).
    fn children_ids(&self) -> ChildrenIds {
        self.children().iter().map(|child| child.id()).collect()
    }

    /// Returns a span for tracing.
    ///
    /// As methods recurse through the widget tree, trace spans are added for each child
    /// widget visited, and popped when control flow goes back to the parent. This method
    /// returns a static span (that you can use to filter traces and logs).
    fn make_trace_span(&self, id: WidgetId) -> Span {
        trace_span!("Widget", r#type = self.short_type_name(), id = id.trace())
    }

    /// Gets the (verbose) type name of the widget for debugging purposes.
    /// You should not override this method.
    #[doc(hidden)]
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Gets the (abridged) type name of the widget for debugging purposes.
    /// You should not override this method.
    #[doc(hidden)]
    fn short_type_name(&self) -> &'static str {
        let name = self.type_name();
        name.split('<')
            .next()
            .unwrap_or(name)
            .split("::")
            .last()
            .unwrap_or(name)
    }
}
