// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use dpi::PhysicalSize;
use kurbo::Size;

use crate::app::{HostRootSignal, WindowSizePolicy};
use crate::core::{Handled, WindowEvent};
use crate::testing::{ModularWidget, TestHarness, TestHarnessParams};
use crate::widgets::Spacer;

#[test]
fn resize_converts_physical_to_logical() {
    let params = TestHarnessParams {
        scale_factor: 2.0,
        ..Default::default()
    };
    let mut harness = TestHarness::create_with(ModularWidget::new(()), params);

    // The 400x400 physical window is 200x200 logical pixels at this scale.
    assert_eq!(harness.root_widget().size(), Size::new(200., 200.));

    harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(300, 120)));

    // 150x60 logical, with the height clamped to the root's 100.0 minimum.
    assert_eq!(harness.root_widget().size(), Size::new(150., 100.));
}

#[test]
fn rescale_reallocates() {
    let mut harness = TestHarness::create(ModularWidget::new(()));
    assert_eq!(harness.root_widget().size(), Size::new(400., 400.));

    let handled = harness.process_window_event(WindowEvent::Rescale(2.0));

    assert_eq!(handled, Handled::Yes);
    assert_eq!(harness.window_size(), PhysicalSize::new(400, 400));
    assert_eq!(harness.root_widget().size(), Size::new(200., 200.));
}

#[test]
fn rescale_updates_content_window() {
    let widget = Spacer::new().with_preferred(Size::new(150., 100.));
    let params = TestHarnessParams {
        size_policy: WindowSizePolicy::Content,
        ..Default::default()
    };
    let mut harness = TestHarness::create_with(widget, params);
    while harness.pop_signal().is_some() {}

    harness.process_window_event(WindowEvent::Rescale(2.0));

    // The content's logical size is unchanged, but the window needs twice
    // as many physical pixels to show it.
    assert_eq!(
        harness.pop_signal(),
        Some(HostRootSignal::SetSize(PhysicalSize::new(300, 200)))
    );
    assert_eq!(harness.pop_signal(), None);
    assert_eq!(harness.root_widget().size(), Size::new(150., 100.));
}
