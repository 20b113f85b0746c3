// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use assert_matches::assert_matches;

use crate::assert_debug_panics;
use crate::core::{Axis, Update, WidgetPod};
use crate::testing::{ModularWidget, Record, Recording, TestHarness, TestWidgetExt};
use crate::widgets::Spacer;

#[test]
fn host_creation() {
    let recording = Recording::default();
    let widget = Spacer::new().record(&recording);

    TestHarness::create(widget);

    // One rewrite pass runs when the host is created and a second one for
    // the harness's initial resize.
    assert_matches!(
        recording.drain()[..],
        [
            Record::U(Update::WidgetAdded),
            Record::RC,
            Record::Measure(Axis::Horizontal, _),
            Record::Measure(Axis::Vertical, _),
            Record::Allocate(_),
            Record::Measure(Axis::Horizontal, _),
            Record::Measure(Axis::Vertical, _),
            Record::Allocate(_),
        ]
    );
}

#[test]
fn children_attach_after_parents() {
    let child_recording = Recording::default();
    let probe = child_recording.clone();

    let child = Spacer::new().record(&child_recording);
    let parent = ModularWidget::new_parent(WidgetPod::new(child)).update_fn(move |_, _, event| {
        // The parent hears about its own attachment before its children do.
        assert_matches!(event, Update::WidgetAdded);
        assert!(probe.is_empty());
    });

    TestHarness::create(parent);

    assert_matches!(child_recording.next(), Some(Record::U(Update::WidgetAdded)));
    assert_matches!(child_recording.next(), Some(Record::RC));
}

#[test]
fn forget_to_register_child() {
    let child = WidgetPod::new(Spacer::new());
    let parent = ModularWidget::new_parent(child).register_children_fn(|_child, _ctx| {
        // We forget to call ctx.register_child();
    });

    assert_debug_panics!(
        TestHarness::create(parent),
        "did not call RegisterCtx::register_child()"
    );
}
