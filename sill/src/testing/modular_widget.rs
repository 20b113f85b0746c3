// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Point, Size};

use crate::core::{
    AllocateCtx, Axis, ChildrenRefs, MeasureCtx, Measurement, RegisterCtx, RequestMode, Update,
    UpdateCtx, Widget, WidgetPod,
};

pub(crate) type RegisterChildrenFn<S> = dyn FnMut(&mut S, &mut RegisterCtx<'_>);
pub(crate) type UpdateFn<S> = dyn FnMut(&mut S, &mut UpdateCtx<'_>, &Update);
pub(crate) type MeasureFn<S> =
    dyn FnMut(&mut S, &mut MeasureCtx<'_>, Axis, Option<f64>) -> Measurement;
pub(crate) type AllocateFn<S> = dyn FnMut(&mut S, &mut AllocateCtx<'_>, Size);
pub(crate) type ChildrenFn<S> = dyn for<'w> Fn(&'w S) -> ChildrenRefs<'w>;

/// A widget that can be constructed from individual functions, builder-style.
///
/// This widget is generic over its state, which is passed in at construction time.
pub struct ModularWidget<S> {
    /// The state passed to all the callbacks of this widget
    pub state: S,
    request_mode: RequestMode,
    register_children: Option<Box<RegisterChildrenFn<S>>>,
    update: Option<Box<UpdateFn<S>>>,
    measure: Option<Box<MeasureFn<S>>>,
    allocate: Option<Box<AllocateFn<S>>>,
    children: Option<Box<ChildrenFn<S>>>,
}

impl<S> ModularWidget<S> {
    /// Creates a new `ModularWidget`.
    ///
    /// By default none of its methods do anything, and its measure method
    /// reports a fixed 100x100 size.
    pub fn new(state: S) -> Self {
        Self {
            state,
            request_mode: RequestMode::default(),
            register_children: None,
            update: None,
            measure: None,
            allocate: None,
            children: None,
        }
    }
}

impl ModularWidget<WidgetPod<dyn Widget>> {
    /// Creates a new `ModularWidget` with some methods already set to handle a single child.
    ///
    /// The resulting widget reports the child's measurements as its own and
    /// hands the child its entire allocation.
    pub fn new_parent(child: WidgetPod<impl Widget + ?Sized>) -> Self {
        Self::new(child.erased())
            .register_children_fn(|child, ctx| ctx.register_child(child))
            .measure_fn(|child, ctx, axis, for_size| ctx.measure_child(child, axis, for_size))
            .allocate_fn(|child, ctx, size| {
                ctx.allocate_child(child, size);
                ctx.place_child(child, Point::ORIGIN);
            })
            .children_fn(|child: &WidgetPod<dyn Widget>| std::iter::once(child).collect())
    }
}

/// Builder methods.
///
/// Each method takes a flag or a callback replacing the behavior of the
/// matching `Widget` method.
impl<S> ModularWidget<S> {
    /// See [`Widget::request_mode`]
    pub fn request_mode(mut self, mode: RequestMode) -> Self {
        self.request_mode = mode;
        self
    }

    /// See [`Widget::register_children`]
    pub fn register_children_fn(
        mut self,
        f: impl FnMut(&mut S, &mut RegisterCtx<'_>) + 'static,
    ) -> Self {
        self.register_children = Some(Box::new(f));
        self
    }

    /// See [`Widget::update`]
    pub fn update_fn(
        mut self,
        f: impl FnMut(&mut S, &mut UpdateCtx<'_>, &Update) + 'static,
    ) -> Self {
        self.update = Some(Box::new(f));
        self
    }

    /// See [`Widget::measure`]
    pub fn measure_fn(
        mut self,
        f: impl FnMut(&mut S, &mut MeasureCtx<'_>, Axis, Option<f64>) -> Measurement + 'static,
    ) -> Self {
        self.measure = Some(Box::new(f));
        self
    }

    /// See [`Widget::allocate`]
    pub fn allocate_fn(
        mut self,
        f: impl FnMut(&mut S, &mut AllocateCtx<'_>, Size) + 'static,
    ) -> Self {
        self.allocate = Some(Box::new(f));
        self
    }

    /// See [`Widget::children`]
    pub fn children_fn(mut self, f: impl for<'w> Fn(&'w S) -> ChildrenRefs<'w> + 'static) -> Self {
        self.children = Some(Box::new(f));
        self
    }
}

impl<S: 'static> Widget for ModularWidget<S> {
    fn measure(
        &mut self,
        ctx: &mut MeasureCtx<'_>,
        axis: Axis,
        for_size: Option<f64>,
    ) -> Measurement {
        match self.measure.as_mut() {
            Some(f) => f(&mut self.state, ctx, axis, for_size),
            None => Measurement::fixed(100.0),
        }
    }

    fn allocate(&mut self, ctx: &mut AllocateCtx<'_>, size: Size) {
        if let Some(f) = self.allocate.as_mut() {
            f(&mut self.state, ctx, size);
        }
    }

    fn request_mode(&self) -> RequestMode {
        self.request_mode
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, event: &Update) {
        if let Some(f) = self.update.as_mut() {
            f(&mut self.state, ctx, event);
        }
    }

    fn register_children(&mut self, ctx: &mut RegisterCtx<'_>) {
        if let Some(f) = self.register_children.as_mut() {
            f(&mut self.state, ctx);
        }
    }

    fn children(&self) -> ChildrenRefs<'_> {
        match self.children.as_ref() {
            Some(f) => f(&self.state),
            None => ChildrenRefs::new(),
        }
    }
}
