// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::rc::Rc;

use dpi::PhysicalSize;
use kurbo::{Rect, Size};

use crate::app::{HostRootSignal, WindowSizePolicy};
use crate::assert_debug_panics;
use crate::core::{Axis, Measurement, RequestMode, WidgetPod, WindowEvent};
use crate::testing::{ModularWidget, TestHarness, TestHarnessParams};
use crate::widgets::{SizingPolicy, SizingProxy, Spacer};

/// A widget whose measure method records the queries it receives.
fn measure_probe() -> (
    ModularWidget<Rc<RefCell<Vec<(Axis, Option<f64>)>>>>,
    Rc<RefCell<Vec<(Axis, Option<f64>)>>>,
) {
    let queries: Rc<RefCell<Vec<(Axis, Option<f64>)>>> = Rc::default();
    let widget =
        ModularWidget::new(Rc::clone(&queries)).measure_fn(|queries, _ctx, axis, for_size| {
            queries.borrow_mut().push((axis, for_size));
            Measurement::fixed(100.0)
        });
    (widget, queries)
}

#[test]
fn measure_order_follows_request_mode() {
    let (widget, queries) = measure_probe();

    TestHarness::create(widget);

    // Width first, then height at the width the window settled on.
    let queries = queries.borrow();
    assert_eq!(queries[0], (Axis::Horizontal, None));
    assert_eq!(queries[1], (Axis::Vertical, Some(400.0)));
}

#[test]
fn width_for_height_measures_vertical_first() {
    let (widget, queries) = measure_probe();
    let widget = widget.request_mode(RequestMode::WidthForHeight);

    TestHarness::create_with_size(widget, Size::new(300., 200.));

    let queries = queries.borrow();
    assert_eq!(queries[0], (Axis::Vertical, None));
    assert_eq!(queries[1], (Axis::Horizontal, Some(200.0)));
}

#[test]
fn window_size_clamped_to_minimum() {
    let widget = ModularWidget::new(()).measure_fn(|_state, _ctx, axis, _for_size| match axis {
        Axis::Horizontal => Measurement::new(150.0, 0.0),
        Axis::Vertical => Measurement::new(80.0, 0.0),
    });

    let mut harness = TestHarness::create_with_size(widget, Size::new(100., 100.));

    // The window is narrower than the root's minimum; the minimum wins.
    assert_eq!(harness.root_widget().size(), Size::new(150., 100.));

    harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(200, 60)));
    assert_eq!(harness.root_widget().size(), Size::new(200., 80.));
}

#[test]
fn parent_passes_allocation_through() {
    let child_pod = WidgetPod::new(Spacer::new().with_minimum(Size::new(30., 30.)));
    let child_id = child_pod.id();
    let widget = ModularWidget::new_parent(child_pod);

    let harness = TestHarness::create_with_size(widget, Size::new(120., 90.));

    let child = harness.get_widget(child_id);
    assert_eq!(child.layout_rect(), Rect::new(0., 0., 120., 90.));
}

#[test]
fn nested_proxies_forward_allocations() {
    let sizes: Rc<RefCell<Vec<Size>>> = Rc::default();
    let record = Rc::clone(&sizes);
    let inner = SizingProxy::new(SizingPolicy::AllocationDriven)
        .with_resize_callback(move |size| record.borrow_mut().push(size));
    let outer = SizingProxy::with_child(SizingPolicy::FixedPreferred, WidgetPod::new(inner))
        .with_natural_size(Size::new(200., 150.));

    TestHarness::create_with_size(outer, Size::new(500., 500.));

    // The outer proxy hands its whole allocation to the inner one, and the
    // repeated passes at startup don't produce duplicate reports.
    assert_eq!(*sizes.borrow(), vec![Size::new(500., 500.)]);
}

#[test]
fn content_policy_emits_physical_size() {
    let widget = Spacer::new().with_preferred(Size::new(150., 100.));
    let params = TestHarnessParams {
        size_policy: WindowSizePolicy::Content,
        scale_factor: 2.0,
        ..Default::default()
    };
    let mut harness = TestHarness::create_with(widget, params);

    // The resize request is in physical pixels; the tree itself is
    // measured and allocated in logical pixels.
    assert_eq!(
        harness.pop_signal(),
        Some(HostRootSignal::SetSize(PhysicalSize::new(300, 200)))
    );
    while harness.pop_signal().is_some() {}

    assert_eq!(harness.root_widget().size(), Size::new(150., 100.));
    assert_eq!(harness.window_size(), PhysicalSize::new(300, 200));
}

#[test]
fn forget_to_allocate_child() {
    let child = WidgetPod::new(Spacer::new());
    let parent = ModularWidget::new_parent(child).allocate_fn(|_child, _ctx, _size| {
        // We forget to call ctx.allocate_child();
    });

    assert_debug_panics!(
        TestHarness::create(parent),
        "allocate_child() was not called"
    );
}

#[test]
fn forget_to_place_child() {
    let child = WidgetPod::new(Spacer::new());
    let parent = ModularWidget::new_parent(child).allocate_fn(|child, ctx, size| {
        ctx.allocate_child(child, size);
        // We forget to call ctx.place_child();
    });

    assert_debug_panics!(TestHarness::create(parent), "place_child() was not called");
}
