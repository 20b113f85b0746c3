// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! The allocation pass, which measures the widget tree and hands every
//! widget its final size and position. Most of the logic for this pass
//! happens in [`Widget::measure`] and [`Widget::allocate`] implementations.

use dpi::LogicalSize;
use kurbo::{Point, Size};
use smallvec::SmallVec;
use tracing::{info_span, trace};

use crate::app::{HostRoot, HostRootSignal, HostRootState, WindowSizePolicy};
use crate::core::{AllocateCtx, Axis, MeasureCtx, Measurement, Widget, WidgetPod};
use crate::debug_panic;

// --- MARK: RUN MEASURE
/// Runs the [`Widget::measure`] method on the widget contained in `pod`.
///
/// This is called by [`MeasureCtx::measure_child`], which is itself called in
/// the parent widget's `measure`, and by the root sizing logic below.
pub(crate) fn run_measure_on<W: Widget + ?Sized>(
    global_state: &mut HostRootState,
    pod: &mut WidgetPod<W>,
    axis: Axis,
    for_size: Option<f64>,
) -> Measurement {
    let _span = pod.inner.make_trace_span(pod.state.id).entered();

    let measurement = {
        let mut ctx = MeasureCtx {
            global_state,
            widget_state: &mut pod.state,
        };
        pod.inner.measure(&mut ctx, axis, for_size)
    };

    if !measurement.minimum.is_finite()
        || measurement.minimum < 0.0
        || !measurement.natural.is_finite()
        || measurement.natural < 0.0
    {
        debug_panic!(
            "Error in '{}' {}: invalid measurement {:?} on axis {:?}",
            pod.inner.short_type_name(),
            pod.state.id,
            measurement,
            axis,
        );
    }
    trace!("Measured along {:?}: {:?}", axis, measurement);

    measurement
}

// --- MARK: RUN ALLOCATE
/// Runs the [`Widget::allocate`] method on the widget contained in `pod`.
///
/// This is called by [`AllocateCtx::allocate_child`], which is itself called
/// in the parent widget's `allocate`.
pub(crate) fn run_allocate_on<W: Widget + ?Sized>(
    global_state: &mut HostRootState,
    pod: &mut WidgetPod<W>,
    size: Size,
) {
    let _span = pod.inner.make_trace_span(pod.state.id).entered();

    if !size.width.is_finite() || size.width < 0.0 || !size.height.is_finite() || size.height < 0.0
    {
        debug_panic!(
            "Error in '{}' {}: invalid allocation {}",
            pod.inner.short_type_name(),
            pod.state.id,
            size,
        );
    }

    let mut children_ids = SmallVec::new();
    if cfg!(debug_assertions) {
        children_ids = pod.inner.children_ids();
    }

    trace!("Allocating size {}", size);

    pod.state.request_layout = false;
    {
        let mut ctx = AllocateCtx {
            global_state: &mut *global_state,
            widget_state: &mut pod.state,
        };
        pod.inner.allocate(&mut ctx, size);
    }
    if pod.state.request_layout {
        debug_panic!(
            "Error in '{}' {}: layout request flag was set during allocation pass",
            pod.inner.short_type_name(),
            pod.state.id,
        );
    }

    pod.state.size = size;
    pod.state.is_expecting_place_child_call = true;

    #[cfg(debug_assertions)]
    {
        let name = pod.inner.short_type_name();
        for child in pod.inner.children() {
            if child.state.request_layout {
                debug_panic!(
                    "Error in '{}' {}: AllocateCtx::allocate_child() was not called with child widget '{}' {}.",
                    name,
                    pod.state.id,
                    child.inner.short_type_name(),
                    child.state.id,
                );
            }
            if child.state.is_expecting_place_child_call {
                debug_panic!(
                    "Error in '{}' {}: AllocateCtx::place_child() was not called with child widget '{}' {}.",
                    name,
                    pod.state.id,
                    child.inner.short_type_name(),
                    child.state.id,
                );
            }
        }

        let new_children_ids = pod.inner.children_ids();
        if children_ids != new_children_ids && !global_state.needs_update_tree {
            debug_panic!(
                "Error in '{}' {}: children changed during allocation pass",
                name,
                pod.state.id,
            );
        }
    }
}

// --- MARK: ROOT
/// Lays out the whole tree, starting from the root widget.
///
/// The root allocation honors the root's [`RequestMode`]: the leading axis is
/// measured first, then the other axis is measured at the length the leading
/// one resolved to. Under [`WindowSizePolicy::User`] each window length is
/// clamped to the root's reported minimum; under
/// [`WindowSizePolicy::Content`] the root's preference dictates the window
/// size and a [`HostRootSignal::SetSize`] is emitted when the window must
/// change to match.
///
/// [`RequestMode`]: crate::core::RequestMode
pub(crate) fn run_allocate_pass(root: &mut HostRoot) {
    if !root.global_state.needs_layout {
        return;
    }
    root.global_state.needs_layout = false;

    let _span = info_span!("allocate").entered();

    let window_size = root.get_kurbo_size();
    let leading = root.root.widget().request_mode().leading_axis();
    let cross = leading.cross();

    let leading_measurement = run_measure_on(&mut root.global_state, &mut root.root, leading, None);
    let leading_length = match root.size_policy {
        WindowSizePolicy::User => leading.major(window_size).max(leading_measurement.minimum),
        WindowSizePolicy::Content => leading_measurement.preference(),
    };
    let cross_measurement = run_measure_on(
        &mut root.global_state,
        &mut root.root,
        cross,
        Some(leading_length),
    );
    let cross_length = match root.size_policy {
        WindowSizePolicy::User => cross.major(window_size).max(cross_measurement.minimum),
        WindowSizePolicy::Content => cross_measurement.preference(),
    };

    let size = leading.pack_size(leading_length, cross_length);
    run_allocate_on(&mut root.global_state, &mut root.root, size);

    // The root widget has no parent to place it; it always sits at the origin.
    root.root.state.origin = Point::ORIGIN;
    root.root.state.is_expecting_place_child_call = false;

    if let WindowSizePolicy::Content = root.size_policy {
        let new_size = LogicalSize::new(size.width, size.height)
            .to_physical(root.global_state.scale_factor);
        if root.size != new_size {
            root.size = new_size;
            root.global_state
                .emit_signal(HostRootSignal::SetSize(new_size));
        }
    }
}
