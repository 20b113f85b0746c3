// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use kurbo::Size;
use tracing::Span;

use crate::core::{
    AllocateCtx, Axis, ChildrenIds, ChildrenRefs, MeasureCtx, Measurement, RegisterCtx,
    RequestMode, Update, UpdateCtx, Widget, WidgetId,
};

/// A wrapper widget that records each time one of its methods is called.
///
/// Its intent is to let you observe the methods called on a widget in a test.
///
/// Make one like this:
///
/// ```
/// use assert_matches::assert_matches;
/// use sill::core::Update;
/// use sill::testing::{Record, Recorder, Recording, TestHarness};
/// use sill::widgets::Spacer;
///
/// let recording = Recording::default();
/// let widget = Recorder::new(Spacer::new(), &recording);
///
/// TestHarness::create(widget);
/// assert_matches!(recording.next().unwrap(), Record::U(Update::WidgetAdded));
/// assert_matches!(recording.next().unwrap(), Record::RC);
/// ```
pub struct Recorder<W> {
    recording: Recording,
    child: W,
}

/// A recording of widget method calls.
///
/// Internally stores a queue of [`Records`](Record).
#[derive(Debug, Clone, Default)]
pub struct Recording(Rc<RefCell<VecDeque<Record>>>);

/// A recording of a method call on a widget.
///
/// Each member of the enum corresponds to one of the methods on `Widget`.
#[derive(Debug, Clone)]
pub enum Record {
    /// Register children.
    RC,
    /// Update.
    U(Update),
    /// Measure. Records the queried axis and the measurement returned.
    Measure(Axis, Measurement),
    /// Allocate. Records the size the host assigned.
    Allocate(Size),
}

impl Recording {
    /// True if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// The number of events in the recording.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Clear recorded events.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Returns the next event in the recording, if one exists.
    ///
    /// This consumes the event.
    pub fn next(&self) -> Option<Record> {
        self.0.borrow_mut().pop_front()
    }

    /// Returns a vec of events drained from the recording.
    pub fn drain(&self) -> Vec<Record> {
        self.0.borrow_mut().drain(..).collect::<Vec<_>>()
    }

    fn push(&self, event: Record) {
        self.0.borrow_mut().push_back(event);
    }
}

impl<W: Widget> Recorder<W> {
    /// Wrap child widget in a `Recorder` that records all method calls.
    pub fn new(child: W, recording: &Recording) -> Self {
        Self {
            child,
            recording: recording.clone(),
        }
    }
}

#[warn(clippy::missing_trait_methods)]
impl<W: Widget> Widget for Recorder<W> {
    fn measure(
        &mut self,
        ctx: &mut MeasureCtx<'_>,
        axis: Axis,
        for_size: Option<f64>,
    ) -> Measurement {
        let measurement = self.child.measure(ctx, axis, for_size);
        self.recording.push(Record::Measure(axis, measurement));
        measurement
    }

    fn allocate(&mut self, ctx: &mut AllocateCtx<'_>, size: Size) {
        self.recording.push(Record::Allocate(size));
        self.child.allocate(ctx, size);
    }

    fn request_mode(&self) -> RequestMode {
        self.child.request_mode()
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, event: &Update) {
        self.recording.push(Record::U(*event));
        self.child.update(ctx, event);
    }

    fn register_children(&mut self, ctx: &mut RegisterCtx<'_>) {
        self.recording.push(Record::RC);
        self.child.register_children(ctx);
    }

    fn children(&self) -> ChildrenRefs<'_> {
        self.child.children()
    }

    fn children_ids(&self) -> ChildrenIds {
        self.child.children_ids()
    }

    fn make_trace_span(&self, id: WidgetId) -> Span {
        self.child.make_trace_span(id)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn short_type_name(&self) -> &'static str {
        "Recorder"
    }
}
