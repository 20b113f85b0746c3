// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! A widget reporting externally chosen size bounds for a mounted subtree.

use kurbo::{Point, Size};

use crate::core::{
    AllocateCtx, Axis, ChildrenRefs, MeasureCtx, Measurement, RegisterCtx, Widget, WidgetMut,
    WidgetPod,
};
use crate::util::debug_panic;

/// Selects which of the host's two sizing protocols a [`SizingProxy`] speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizingPolicy {
    /// Report the externally configured natural size as the preference.
    ///
    /// For hosts that ask widgets for a preferred size up front: the embedder
    /// pushes a natural size into the proxy, and the host lays the window out
    /// around it.
    FixedPreferred,
    /// Report no preference beyond the minimum and accept whatever the host
    /// allocates.
    ///
    /// For hosts that only hand sizes down: the embedder learns the actual
    /// size from the resize callback instead of proposing one.
    AllocationDriven,
}

/// A widget which reports externally chosen size bounds and forwards its
/// allocation to a single child.
///
/// `SizingProxy` is the mount point for an embedding framework. The embedder
/// mounts its own widget tree as the proxy's child, pushes minimum and
/// natural sizes in from the outside, and registers a callback to hear about
/// the size the host actually assigned. The child is always allocated the
/// proxy's entire region, with no padding or alignment.
///
/// # Caveats
///
/// The resize callback runs synchronously inside the allocation pass. Work
/// done there must be short and must not call back into the host; defer
/// anything heavier to the embedder's own event loop.
pub struct SizingProxy {
    child: Option<WidgetPod<dyn Widget>>,
    policy: SizingPolicy,
    minimum: Size,
    natural: Size,
    allocated: Size,
    has_been_allocated: bool,
    resize_callback: Option<Box<dyn FnMut(Size)>>,
}

// --- MARK: BUILDERS
impl SizingProxy {
    /// Create a new proxy with no child.
    pub fn new(policy: SizingPolicy) -> Self {
        Self {
            child: None,
            policy,
            minimum: Size::ZERO,
            natural: Size::ZERO,
            allocated: Size::ZERO,
            has_been_allocated: false,
            resize_callback: None,
        }
    }

    /// Create a new proxy wrapping the given child.
    pub fn with_child(policy: SizingPolicy, child: WidgetPod<impl Widget + ?Sized>) -> Self {
        Self {
            child: Some(child.erased()),
            ..Self::new(policy)
        }
    }

    /// Builder-style method for setting the minimum size before mounting.
    pub fn with_minimum_size(mut self, size: Size) -> Self {
        if size.width < 0.0 || size.height < 0.0 {
            debug_panic!("Minimum size should be non-negative; got {}", size);
        }
        self.minimum = size;
        self
    }

    /// Builder-style method for setting the natural size before mounting.
    ///
    /// Like [`set_natural_size`](Self::set_natural_size), this has no effect
    /// under [`SizingPolicy::AllocationDriven`].
    pub fn with_natural_size(mut self, size: Size) -> Self {
        if size.width < 0.0 || size.height < 0.0 {
            debug_panic!("Natural size should be non-negative; got {}", size);
        }
        if self.policy == SizingPolicy::AllocationDriven {
            tracing::warn!("Natural size has no effect under SizingPolicy::AllocationDriven");
            return self;
        }
        self.natural = size;
        self
    }

    /// Builder-style method for registering the resize callback before
    /// mounting.
    ///
    /// A callback registered this way also hears about the host's very first
    /// allocation; one registered later through
    /// [`set_resize_callback`](Self::set_resize_callback) only hears about
    /// subsequent changes.
    pub fn with_resize_callback(mut self, callback: impl FnMut(Size) + 'static) -> Self {
        self.resize_callback = Some(Box::new(callback));
        self
    }
}

// --- MARK: WIDGETMUT
impl SizingProxy {
    /// Replace the proxy's child.
    ///
    /// If a child was already installed, it is removed from the tree and
    /// dropped first. The new child receives [`Update::WidgetAdded`] on the
    /// next tree-update pass.
    ///
    /// [`Update::WidgetAdded`]: crate::core::Update::WidgetAdded
    pub fn set_child(this: &mut WidgetMut<'_, Self>, child: WidgetPod<impl Widget + ?Sized>) {
        if let Some(old_child) = this.widget.child.take() {
            this.ctx.remove_child(old_child);
        }
        this.widget.child = Some(child.erased());
        this.ctx.children_changed();
    }

    /// Remove and drop the proxy's child, if any.
    pub fn remove_child(this: &mut WidgetMut<'_, Self>) {
        if let Some(old_child) = this.widget.child.take() {
            this.ctx.remove_child(old_child);
        }
    }

    /// Set the smallest size the proxy will report to the host.
    ///
    /// Always requests a layout pass, even when the value is unchanged.
    pub fn set_minimum_size(this: &mut WidgetMut<'_, Self>, size: Size) {
        if size.width < 0.0 || size.height < 0.0 {
            debug_panic!("Minimum size should be non-negative; got {}", size);
        }
        this.widget.minimum = size;
        this.ctx.request_layout();
    }

    /// Set the size the proxy prefers when the host has room to give.
    ///
    /// Meaningful only under [`SizingPolicy::FixedPreferred`]. Under
    /// [`SizingPolicy::AllocationDriven`] there is no natural-size channel;
    /// the call logs a warning and changes nothing.
    ///
    /// Always requests a layout pass, even when the value is unchanged.
    pub fn set_natural_size(this: &mut WidgetMut<'_, Self>, size: Size) {
        if size.width < 0.0 || size.height < 0.0 {
            debug_panic!("Natural size should be non-negative; got {}", size);
        }
        if this.widget.policy == SizingPolicy::AllocationDriven {
            tracing::warn!("set_natural_size has no effect under SizingPolicy::AllocationDriven");
            return;
        }
        this.widget.natural = size;
        this.ctx.request_layout();
    }

    /// Seed the stored allocation without going through layout.
    ///
    /// This neither marks the proxy as allocated nor requests a layout pass,
    /// and it never fires the resize callback. Embedders call it right before
    /// resizing the window, so that the host's arriving allocation of that
    /// same size is not reported back to them.
    pub fn preempt_allocated_size(this: &mut WidgetMut<'_, Self>, size: Size) {
        if size.width < 0.0 || size.height < 0.0 {
            debug_panic!("Preempted size should be non-negative; got {}", size);
        }
        this.widget.allocated = size;
    }

    /// Register the callback invoked when the proxy's allocation changes.
    ///
    /// There is a single slot: registering a new callback replaces the
    /// previous one. The callback fires synchronously during the allocation
    /// pass, and only when the allocated size actually changed.
    pub fn set_resize_callback(
        this: &mut WidgetMut<'_, Self>,
        callback: impl FnMut(Size) + 'static,
    ) {
        this.widget.resize_callback = Some(Box::new(callback));
    }

    /// Unregister the resize callback, if any.
    pub fn clear_resize_callback(this: &mut WidgetMut<'_, Self>) {
        this.widget.resize_callback = None;
    }

    /// Get a mutable reference to the proxy's child, if any.
    pub fn child_mut<'t>(this: &'t mut WidgetMut<'_, Self>) -> Option<WidgetMut<'t, dyn Widget>> {
        let child = this.widget.child.as_mut()?;
        Some(this.ctx.get_mut(child))
    }
}

// --- MARK: GETTERS
impl SizingProxy {
    /// The sizing policy chosen at construction.
    pub fn policy(&self) -> SizingPolicy {
        self.policy
    }

    /// The externally configured minimum size.
    pub fn minimum_size(&self) -> Size {
        self.minimum
    }

    /// The externally configured natural size.
    pub fn natural_size(&self) -> Size {
        self.natural
    }

    /// Whether the host has allocated this proxy at least once.
    pub fn has_been_allocated(&self) -> bool {
        self.has_been_allocated
    }

    /// The proxy's current effective size.
    ///
    /// Once the host has allocated the proxy, this is the stored allocation.
    /// Before that, under [`SizingPolicy::FixedPreferred`] it falls back to
    /// the configured natural size when one was provided on both axes; under
    /// [`SizingPolicy::AllocationDriven`] it is [`Size::ZERO`].
    pub fn size(&self) -> Size {
        match self.policy {
            SizingPolicy::FixedPreferred => {
                if self.has_been_allocated
                    || self.natural.width == 0.0
                    || self.natural.height == 0.0
                {
                    self.allocated
                } else {
                    self.natural
                }
            }
            SizingPolicy::AllocationDriven => {
                if self.has_been_allocated {
                    self.allocated
                } else {
                    Size::ZERO
                }
            }
        }
    }
}

// --- MARK: IMPL WIDGET
impl Widget for SizingProxy {
    fn measure(
        &mut self,
        _ctx: &mut MeasureCtx<'_>,
        axis: Axis,
        _for_size: Option<f64>,
    ) -> Measurement {
        let minimum = axis.major(self.minimum);
        let natural = match self.policy {
            SizingPolicy::FixedPreferred => axis.major(self.natural).max(minimum),
            SizingPolicy::AllocationDriven => 0.0,
        };
        Measurement { minimum, natural }
    }

    fn allocate(&mut self, ctx: &mut AllocateCtx<'_>, size: Size) {
        if let Some(child) = &mut self.child {
            ctx.allocate_child(child, size);
            ctx.place_child(child, Point::ORIGIN);
        }

        // An allocation only counts as a change if it differs from the
        // stored size, including one seeded by `preempt_allocated_size`.
        self.has_been_allocated = true;
        if size == self.allocated {
            return;
        }
        self.allocated = size;
        if let Some(callback) = &mut self.resize_callback {
            callback(size);
        }
    }

    fn register_children(&mut self, ctx: &mut RegisterCtx<'_>) {
        if let Some(child) = &mut self.child {
            ctx.register_child(child);
        }
    }

    fn children(&self) -> ChildrenRefs<'_> {
        self.child.iter().collect()
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use assert_matches::assert_matches;
    use dpi::PhysicalSize;
    use kurbo::Rect;

    use super::*;
    use crate::app::{HostRootSignal, WindowSizePolicy};
    use crate::assert_debug_panics;
    use crate::core::{Update, WindowEvent};
    use crate::testing::{
        ModularWidget, Record, Recorder, Recording, TestHarness, TestHarnessParams,
    };
    use crate::widgets::Spacer;

    /// Registers a callback which appends every reported size to the
    /// returned collector.
    fn record_sizes(proxy: &mut WidgetMut<'_, SizingProxy>) -> Rc<RefCell<Vec<Size>>> {
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&sizes);
        SizingProxy::set_resize_callback(proxy, move |size| sink.borrow_mut().push(size));
        sizes
    }

    #[test]
    fn reports_allocation_changes() {
        let proxy = SizingProxy::with_child(
            SizingPolicy::AllocationDriven,
            WidgetPod::new(Spacer::new()),
        );
        let mut harness = TestHarness::create(proxy);

        let sizes = harness.edit_root_widget(|mut root| {
            let mut proxy = root.downcast::<SizingProxy>();
            record_sizes(&mut proxy)
        });

        harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(300, 200)));
        assert_eq!(*sizes.borrow(), vec![Size::new(300., 200.)]);

        // Resize to the same size.
        harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(300, 200)));
        // The size hasn't changed, so no notification.
        assert_eq!(*sizes.borrow(), vec![Size::new(300., 200.)]);

        harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(100, 150)));
        assert_eq!(
            *sizes.borrow(),
            vec![Size::new(300., 200.), Size::new(100., 150.)]
        );
    }

    #[test]
    fn first_allocation_reaches_callback_and_child() {
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&sizes);
        let child = WidgetPod::new(Spacer::new());
        let child_id = child.id();
        let proxy = SizingProxy::with_child(SizingPolicy::AllocationDriven, child)
            .with_minimum_size(Size::new(50., 50.))
            .with_resize_callback(move |size| sink.borrow_mut().push(size));
        let mut harness = TestHarness::create_with_size(proxy, Size::new(50., 50.));

        // The initial allocation is reported exactly once.
        assert_eq!(*sizes.borrow(), vec![Size::new(50., 50.)]);
        assert_eq!(
            harness.get_widget(child_id).layout_rect(),
            Rect::new(0., 0., 50., 50.)
        );
        let proxy = harness.root_widget().downcast::<SizingProxy>().unwrap();
        assert_eq!(proxy.widget().size(), Size::new(50., 50.));

        // The child always covers the proxy's entire region.
        harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(120, 90)));
        assert_eq!(
            harness.get_widget(child_id).layout_rect(),
            Rect::new(0., 0., 120., 90.)
        );
        assert_eq!(sizes.borrow().last(), Some(&Size::new(120., 90.)));

        // The window can't squeeze the proxy below its minimum.
        harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(10, 10)));
        assert_eq!(
            harness.get_widget(child_id).layout_rect(),
            Rect::new(0., 0., 50., 50.)
        );
        assert_eq!(sizes.borrow().last(), Some(&Size::new(50., 50.)));
    }

    #[test]
    fn window_tracks_content_preference() {
        let proxy =
            SizingProxy::with_child(SizingPolicy::FixedPreferred, WidgetPod::new(Spacer::new()));
        let mut harness = TestHarness::create_with(
            proxy,
            TestHarnessParams {
                size_policy: WindowSizePolicy::Content,
                ..Default::default()
            },
        );
        // The proxy has no configured sizes yet; drain the initial resize
        // requests for the empty content.
        while harness.pop_signal().is_some() {}

        harness.edit_root_widget(|mut root| {
            let mut proxy = root.downcast::<SizingProxy>();
            SizingProxy::set_natural_size(&mut proxy, Size::new(300., 200.));
        });
        assert_eq!(
            harness.pop_signal(),
            Some(HostRootSignal::SetSize(PhysicalSize::new(300, 200)))
        );
        assert_eq!(harness.pop_signal(), None);
        assert_eq!(harness.root_widget().size(), Size::new(300., 200.));

        // A minimum above the natural width wins out.
        harness.edit_root_widget(|mut root| {
            let mut proxy = root.downcast::<SizingProxy>();
            SizingProxy::set_minimum_size(&mut proxy, Size::new(350., 50.));
        });
        assert_eq!(
            harness.pop_signal(),
            Some(HostRootSignal::SetSize(PhysicalSize::new(350, 200)))
        );
        assert_eq!(harness.root_widget().size(), Size::new(350., 200.));
    }

    #[test]
    fn preempted_size_is_not_reported() {
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&sizes);
        let proxy =
            SizingProxy::with_child(SizingPolicy::FixedPreferred, WidgetPod::new(Spacer::new()))
                .with_resize_callback(move |size| sink.borrow_mut().push(size));
        let mut harness = TestHarness::create(proxy);
        assert_eq!(*sizes.borrow(), vec![Size::new(400., 400.)]);

        harness.edit_root_widget(|mut root| {
            let mut proxy = root.downcast::<SizingProxy>();
            SizingProxy::preempt_allocated_size(&mut proxy, Size::new(300., 200.));
        });
        // Seeding alone does not notify, but queries already see the size.
        assert_eq!(sizes.borrow().len(), 1);
        let proxy = harness.root_widget().downcast::<SizingProxy>().unwrap();
        assert_eq!(proxy.widget().size(), Size::new(300., 200.));

        // The allocation matching the seeded size arrives silently.
        harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(300, 200)));
        assert_eq!(sizes.borrow().len(), 1);
        let proxy = harness.root_widget().downcast::<SizingProxy>().unwrap();
        assert_eq!(proxy.widget().size(), Size::new(300., 200.));
        assert!(proxy.widget().has_been_allocated());

        // Any other size still notifies.
        harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(350, 250)));
        assert_eq!(sizes.borrow().last(), Some(&Size::new(350., 250.)));
    }

    #[test]
    fn replaces_child() {
        let alive = Rc::new(());
        let first = WidgetPod::new(ModularWidget::new(Rc::clone(&alive)));
        let first_id = first.id();
        let proxy = SizingProxy::with_child(SizingPolicy::AllocationDriven, first);
        let mut harness = TestHarness::create(proxy);
        assert_eq!(Rc::strong_count(&alive), 2);

        let recording = Recording::default();
        let second = WidgetPod::new(Recorder::new(Spacer::new(), &recording));
        let second_id = second.id();
        harness.edit_root_widget(|mut root| {
            let mut proxy = root.downcast::<SizingProxy>();
            SizingProxy::set_child(&mut proxy, second);
        });

        // The old child is detached and dropped.
        assert!(harness.try_get_widget(first_id).is_none());
        assert_eq!(Rc::strong_count(&alive), 1);
        assert_eq!(harness.root_widget().children().len(), 1);

        // The new child is attached exactly once, then laid out.
        assert_eq!(harness.get_widget(second_id).size(), Size::new(400., 400.));
        let records = recording.drain();
        assert_matches!(records[0], Record::U(Update::WidgetAdded));
        assert_matches!(records[1], Record::RC);
        let added = records
            .iter()
            .filter(|record| matches!(record, Record::U(Update::WidgetAdded)))
            .count();
        assert_eq!(added, 1);

        // Later passes never re-deliver the attach notification.
        harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(300, 200)));
        let added = recording
            .drain()
            .iter()
            .filter(|record| matches!(record, Record::U(Update::WidgetAdded)))
            .count();
        assert_eq!(added, 0);
    }

    #[test]
    fn callback_replacement_last_wins() {
        let proxy = SizingProxy::with_child(
            SizingPolicy::AllocationDriven,
            WidgetPod::new(Spacer::new()),
        );
        let mut harness = TestHarness::create(proxy);

        let (first, second) = harness.edit_root_widget(|mut root| {
            let mut proxy = root.downcast::<SizingProxy>();
            let first = record_sizes(&mut proxy);
            let second = record_sizes(&mut proxy);
            (first, second)
        });

        harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(300, 200)));
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec![Size::new(300., 200.)]);

        harness.edit_root_widget(|mut root| {
            let mut proxy = root.downcast::<SizingProxy>();
            SizingProxy::clear_resize_callback(&mut proxy);
        });
        harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(100, 100)));
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn natural_size_ignored_under_allocation_driven() {
        let proxy = SizingProxy::new(SizingPolicy::AllocationDriven);
        let mut harness = TestHarness::create(proxy);

        harness.edit_root_widget(|mut root| {
            let mut proxy = root.downcast::<SizingProxy>();
            SizingProxy::set_natural_size(&mut proxy, Size::new(300., 200.));
        });

        let proxy = harness.root_widget().downcast::<SizingProxy>().unwrap();
        assert_eq!(proxy.widget().natural_size(), Size::ZERO);
    }

    #[test]
    fn size_query_before_first_allocation() {
        let proxy = SizingProxy::new(SizingPolicy::FixedPreferred)
            .with_natural_size(Size::new(200., 100.));
        assert_eq!(proxy.size(), Size::new(200., 100.));

        // A natural size with a zero dimension is not a usable estimate.
        let proxy =
            SizingProxy::new(SizingPolicy::FixedPreferred).with_natural_size(Size::new(200., 0.));
        assert_eq!(proxy.size(), Size::ZERO);

        let proxy = SizingProxy::new(SizingPolicy::AllocationDriven)
            .with_natural_size(Size::new(200., 100.));
        assert_eq!(proxy.size(), Size::ZERO);

        // Seeded sizes don't count until a real allocation lands.
        let mut proxy = SizingProxy::new(SizingPolicy::AllocationDriven);
        proxy.allocated = Size::new(400., 300.);
        assert_eq!(proxy.size(), Size::ZERO);
    }

    #[test]
    fn rejects_negative_sizes() {
        let proxy = SizingProxy::new(SizingPolicy::FixedPreferred);
        let mut harness = TestHarness::create(proxy);

        harness.edit_root_widget(|mut root| {
            let mut proxy = root.downcast::<SizingProxy>();
            assert_debug_panics!(
                SizingProxy::set_minimum_size(&mut proxy, Size::new(-1., 10.)),
                "non-negative"
            );
            assert_debug_panics!(
                SizingProxy::set_natural_size(&mut proxy, Size::new(10., -1.)),
                "non-negative"
            );
            assert_debug_panics!(
                SizingProxy::preempt_allocated_size(&mut proxy, Size::new(-5., -5.)),
                "non-negative"
            );
        });

        let proxy = harness.root_widget().downcast::<SizingProxy>().unwrap();
        assert_eq!(proxy.widget().minimum_size(), Size::ZERO);
        assert_eq!(proxy.widget().natural_size(), Size::ZERO);
    }
}
