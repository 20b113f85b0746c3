// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::Size;

use crate::testing::{ModularWidget, Recording, TestHarness, TestWidgetExt};
use crate::widgets::{SizingPolicy, SizingProxy};

#[test]
fn edit_root_widget_returns_value() {
    let mut harness = TestHarness::create(SizingProxy::new(SizingPolicy::AllocationDriven));

    let minimum = harness.edit_root_widget(|mut root| {
        let proxy = root.downcast::<SizingProxy>();
        proxy.widget.minimum_size()
    });

    assert_eq!(minimum, Size::ZERO);
}

#[test]
fn clean_tree_skips_measuring() {
    let recording = Recording::default();
    let widget = ModularWidget::new(()).record(&recording);
    let mut harness = TestHarness::create(widget);
    recording.clear();

    // Nothing was invalidated, so the rewrite passes have nothing to do.
    harness.edit_root_widget(|_root| {});
    assert!(recording.is_empty());
}

#[test]
fn mutation_reruns_allocation() {
    let mut harness = TestHarness::create_with_size(
        SizingProxy::new(SizingPolicy::AllocationDriven),
        Size::new(100., 100.),
    );
    assert_eq!(harness.root_widget().size(), Size::new(100., 100.));

    harness.edit_root_widget(|mut root| {
        let mut proxy = root.downcast::<SizingProxy>();
        SizingProxy::set_minimum_size(&mut proxy, Size::new(250., 30.));
    });

    assert_eq!(harness.root_widget().size(), Size::new(250., 100.));
}
