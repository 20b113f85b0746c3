// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use dpi::PhysicalSize;
use kurbo::Size;

use crate::app::{
    HostRoot, HostRootOptions, HostRootSignal, WindowSizePolicy, try_init_test_tracing,
};
use crate::core::{Handled, Widget, WidgetId, WidgetMut, WidgetPod, WidgetRef, WindowEvent};

/// A headless host for unit-testing widgets.
///
/// The harness runs the widget tree without a native window: it wraps a
/// [`HostRoot`], feeds it [`WindowEvent`]s, and plays the platform's part by
/// honoring the resize requests the host emits. Emitted signals are also
/// queued for inspection through [`pop_signal`](Self::pop_signal).
///
/// ```
/// use kurbo::Size;
/// use sill::testing::TestHarness;
/// use sill::widgets::{SizingPolicy, SizingProxy};
///
/// let mut harness = TestHarness::create(SizingProxy::new(SizingPolicy::AllocationDriven));
/// assert_eq!(harness.root_widget().size(), Size::new(400., 400.));
/// ```
pub struct TestHarness {
    host: HostRoot,
    emitted: Rc<RefCell<VecDeque<HostRootSignal>>>,
    signal_queue: VecDeque<HostRootSignal>,
    window_size: PhysicalSize<u32>,
}

/// Parameters for creating a [`TestHarness`].
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct TestHarnessParams {
    /// The size of the simulated window, in physical pixels.
    /// Defaults to [`Self::DEFAULT_SIZE`].
    pub window_size: Size,
    /// The scale factor of the simulated window. Defaults to 1.0.
    pub scale_factor: f64,
    /// How the simulated window's size is determined.
    /// Defaults to [`WindowSizePolicy::User`].
    pub size_policy: WindowSizePolicy,
}

impl TestHarnessParams {
    /// Default window size for tests.
    pub const DEFAULT_SIZE: Size = Size::new(400., 400.);
}

impl Default for TestHarnessParams {
    fn default() -> Self {
        Self {
            window_size: Self::DEFAULT_SIZE,
            scale_factor: 1.0,
            size_policy: WindowSizePolicy::default(),
        }
    }
}

impl TestHarness {
    /// Builds a harness with the given root widget.
    ///
    /// Window size will be [`TestHarnessParams::DEFAULT_SIZE`].
    pub fn create(root_widget: impl Widget) -> Self {
        Self::create_with(root_widget, TestHarnessParams::default())
    }

    /// Builds a harness with the given root widget and window size.
    pub fn create_with_size(root_widget: impl Widget, window_size: Size) -> Self {
        Self::create_with(
            root_widget,
            TestHarnessParams {
                window_size,
                ..Default::default()
            },
        )
    }

    /// Builds a harness with the given root widget and additional parameters.
    pub fn create_with(root_widget: impl Widget, params: TestHarnessParams) -> Self {
        let window_size = PhysicalSize::new(
            params.window_size.width as _,
            params.window_size.height as _,
        );

        // If there is no default tracing subscriber, we set our own. If one has
        // already been set, we get an error which we swallow.
        // Having a default subscriber is helpful for tests; swallowing errors means
        // we don't panic if the user has already set one, or a test creates multiple
        // harnesses.
        let _ = try_init_test_tracing();

        let emitted = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&emitted);
        let mut harness = Self {
            host: HostRoot::new(
                WidgetPod::new(root_widget),
                move |signal| sink.borrow_mut().push_back(signal),
                HostRootOptions {
                    size_policy: params.size_policy,
                    size: window_size,
                    scale_factor: params.scale_factor,
                },
            ),
            emitted,
            signal_queue: VecDeque::new(),
            window_size,
        };
        harness.process_window_event(WindowEvent::Resize(window_size));

        harness
    }

    // --- MARK: PROCESS EVENTS
    /// Send a [`WindowEvent`] to the simulated window.
    ///
    /// This will run the rewrite passes after the event is processed.
    pub fn process_window_event(&mut self, event: WindowEvent) -> Handled {
        let handled = self.host.handle_window_event(event);
        self.process_signals();
        handled
    }

    // This should be run after any operation which runs the rewrite passes
    // (i.e. processing an event, editing the root widget, etc.)
    fn process_signals(&mut self) {
        loop {
            let signal = self.emitted.borrow_mut().pop_front();
            let Some(signal) = signal else {
                break;
            };
            match signal {
                HostRootSignal::SetSize(physical_size) => {
                    self.signal_queue
                        .push_back(HostRootSignal::SetSize(physical_size));
                    self.window_size = physical_size;
                    self.process_window_event(WindowEvent::Resize(physical_size));
                }
            }
        }
    }

    // --- MARK: ACCESS WIDGETS
    /// Returns a [`WidgetRef`] to the root widget.
    pub fn root_widget(&self) -> WidgetRef<'_, dyn Widget> {
        self.host.root_widget()
    }

    /// Returns a [`WidgetRef`] to the widget with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the widget is not found in the tree.
    pub fn get_widget(&self, id: WidgetId) -> WidgetRef<'_, dyn Widget> {
        self.host
            .get_widget(id)
            .unwrap_or_else(|| panic!("could not find widget {id}"))
    }

    /// Returns a [`WidgetRef`] to the widget with the given id, if it is in
    /// the tree.
    pub fn try_get_widget(&self, id: WidgetId) -> Option<WidgetRef<'_, dyn Widget>> {
        self.host.get_widget(id)
    }

    /// Returns a [`WidgetMut`] to the root widget.
    ///
    /// This will run the rewrite passes after the callback returns.
    pub fn edit_root_widget<R>(&mut self, f: impl FnOnce(WidgetMut<'_, dyn Widget>) -> R) -> R {
        let res = self.host.edit_root_widget(f);
        self.process_signals();
        res
    }

    // --- MARK: QUERIES
    /// Pop the next signal the host emitted, in emission order.
    pub fn pop_signal(&mut self) -> Option<HostRootSignal> {
        self.signal_queue.pop_front()
    }

    /// The current size of the simulated window, in physical pixels.
    pub fn window_size(&self) -> PhysicalSize<u32> {
        self.window_size
    }
}
