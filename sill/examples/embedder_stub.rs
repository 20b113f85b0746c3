// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! A stand-in for an embedding framework driving a sill host.
//!
//! There is no real windowing system here: the "platform" is this file's main
//! function, which delivers the window events a real platform would and
//! honors the signals the host emits. The choreography matches what an
//! embedder does around a window resize, including seeding the expected size
//! with `preempt_allocated_size` so its own resize doesn't echo back.

use sill::app::{HostRoot, HostRootOptions, WindowSizePolicy, try_init_tracing};
use sill::core::{WidgetPod, WindowEvent};
use sill::dpi::PhysicalSize;
use sill::kurbo::Size;
use sill::widgets::{SizingPolicy, SizingProxy, Spacer};
use tracing::info;

fn main() {
    try_init_tracing().unwrap();

    let surface = Spacer::new();
    let proxy = SizingProxy::with_child(SizingPolicy::AllocationDriven, WidgetPod::new(surface))
        .with_minimum_size(Size::new(300., 200.))
        .with_resize_callback(|size| info!("content resized to {size}"));

    let mut host = HostRoot::new(
        WidgetPod::new(proxy),
        |signal| info!("host emitted {signal:?}"),
        HostRootOptions {
            size_policy: WindowSizePolicy::User,
            size: PhysicalSize::new(800, 600),
            scale_factor: 1.0,
        },
    );
    info!("mounted at {}", host.root_size());

    // The user drags the window larger.
    host.handle_window_event(WindowEvent::Resize(PhysicalSize::new(1024, 768)));
    info!("after grow: {}", host.root_size());

    // The user drags the window below the content's minimum; the allocation
    // stops at the floor.
    host.handle_window_event(WindowEvent::Resize(PhysicalSize::new(100, 100)));
    info!("after shrink: {}", host.root_size());

    // The embedder resizes the window itself. Seeding the size first keeps
    // the resulting allocation from being reported back as a change.
    host.edit_root_widget(|mut root| {
        let mut proxy = root.downcast::<SizingProxy>();
        SizingProxy::preempt_allocated_size(&mut proxy, Size::new(500., 400.));
    });
    host.handle_window_event(WindowEvent::Resize(PhysicalSize::new(500, 400)));
    info!("after programmatic resize: {}", host.root_size());
}
