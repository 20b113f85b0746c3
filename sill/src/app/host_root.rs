// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

use dpi::PhysicalSize;
use kurbo::Size;
use tracing::{info_span, warn};

use crate::core::{
    Handled, MutateCtx, Widget, WidgetId, WidgetMut, WidgetPod, WidgetRef, WindowEvent,
};
use crate::passes::allocate::run_allocate_pass;
use crate::passes::update_tree::run_update_tree_pass;

/// Defines how a window's size is determined.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum WindowSizePolicy {
    /// Measure the content to determine the window size.
    ///
    /// The window size will track the root widget's preferred size, and a
    /// [`HostRootSignal::SetSize`] is emitted whenever the window must change
    /// to match it.
    Content,
    /// Use the provided window size.
    #[default]
    User,
}

/// Options for creating a [`HostRoot`].
pub struct HostRootOptions {
    /// Defines how the window size should be determined.
    pub size_policy: WindowSizePolicy,

    /// The size of the window.
    pub size: PhysicalSize<u32>,

    /// The scale factor of the window.
    ///
    /// Useful for high-DPI displays. `1.0` is a sensible default.
    pub scale_factor: f64,
}

/// Objects emitted by the [`HostRoot`] to signal that something has changed or requires external actions.
#[derive(Debug, PartialEq)]
pub enum HostRootSignal {
    /// The window should be resized.
    SetSize(PhysicalSize<u32>),
}

/// The composition root mounted at the top of one native window.
///
/// The embedder owns a `HostRoot`, feeds it [`WindowEvent`]s, and consumes
/// the signals it emits. The engine drives the widget tree's lifecycle: the
/// tree-update pass attaches new widgets, and the allocation pass measures
/// the tree and hands every widget its final size.
pub struct HostRoot {
    pub(crate) root: WidgetPod<dyn Widget>,
    pub(crate) size_policy: WindowSizePolicy,
    pub(crate) size: PhysicalSize<u32>,
    pub(crate) global_state: HostRootState,
}

/// State shared by all the passes.
pub(crate) struct HostRootState {
    pub(crate) scale_factor: f64,
    pub(crate) signal_sink: Box<dyn FnMut(HostRootSignal)>,
    /// At least one widget has requested a layout pass.
    pub(crate) needs_layout: bool,
    /// Widgets were added to or removed from the tree.
    pub(crate) needs_update_tree: bool,
}

impl HostRoot {
    /// Creates a new `HostRoot` with the given options.
    ///
    /// The provided root widget will always stay the root widget.
    /// (It cannot be changed later for another widget, only its children can change.)
    ///
    /// Note that this doesn't create a window or start an event loop. The
    /// embedder owns both and drives this type through
    /// [`handle_window_event`](Self::handle_window_event).
    pub fn new(
        root_widget: WidgetPod<impl Widget + ?Sized>,
        signal_sink: impl FnMut(HostRootSignal) + 'static,
        options: HostRootOptions,
    ) -> Self {
        let HostRootOptions {
            size_policy,
            size,
            scale_factor,
        } = options;

        let mut root = Self {
            root: root_widget.erased(),
            size_policy,
            size,
            global_state: HostRootState {
                scale_factor,
                signal_sink: Box::new(signal_sink),
                needs_layout: true,
                needs_update_tree: true,
            },
        };

        root.run_rewrite_passes();

        root
    }

    // --- MARK: WINDOW_EVENT
    /// Handles a window event.
    pub fn handle_window_event(&mut self, event: WindowEvent) -> Handled {
        match event {
            WindowEvent::Rescale(scale_factor) => {
                self.global_state.scale_factor = scale_factor;
                self.root.state.request_layout = true;
                self.global_state.needs_layout = true;
                self.run_rewrite_passes();
                Handled::Yes
            }
            WindowEvent::Resize(size) => {
                self.size = size;
                self.root.state.request_layout = true;
                self.global_state.needs_layout = true;
                self.run_rewrite_passes();
                Handled::Yes
            }
        }
    }

    // --- MARK: ACCESS WIDGETS
    /// Returns a [`WidgetMut`] to the root widget.
    ///
    /// Because of how `WidgetMut` works, it can only be passed to a user-provided callback.
    pub fn edit_root_widget<R>(&mut self, f: impl FnOnce(WidgetMut<'_, dyn Widget>) -> R) -> R {
        let res = {
            let _span =
                info_span!("edit_root_widget", name = self.root.widget().short_type_name())
                    .entered();
            let root_widget = WidgetMut {
                ctx: MutateCtx {
                    global_state: &mut self.global_state,
                    widget_state: &mut self.root.state,
                },
                widget: &mut *self.root.inner,
            };
            f(root_widget)
        };

        self.run_rewrite_passes();

        res
    }

    /// Returns a [`WidgetRef`] to the root widget.
    pub fn root_widget(&self) -> WidgetRef<'_, dyn Widget> {
        WidgetRef {
            state: &self.root.state,
            widget: &*self.root.inner,
        }
    }

    /// Returns a [`WidgetRef`] to a specific widget.
    pub fn get_widget(&self, id: WidgetId) -> Option<WidgetRef<'_, dyn Widget>> {
        self.root_widget().find_widget_by_id(id)
    }

    // --- MARK: QUERIES
    /// Returns the current size of the window, in physical pixels.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Returns the size the root widget was given in the last allocation
    /// pass, in logical pixels.
    pub fn root_size(&self) -> Size {
        self.root.state.size
    }

    pub(crate) fn get_kurbo_size(&self) -> Size {
        let size = self.size.to_logical(self.global_state.scale_factor);
        Size::new(size.width, size.height)
    }

    /// Returns `true` if something requires a rewrite pass.
    pub fn needs_rewrite_passes(&self) -> bool {
        self.global_state.needs_layout || self.global_state.needs_update_tree
    }

    // --- MARK: REWRITE PASSES
    /// Runs all rewrite passes on the widget tree.
    ///
    /// Rewrite passes are passes which occur after external events, and
    /// update flags and internal values to a consistent state.
    pub(crate) fn run_rewrite_passes(&mut self) {
        const REWRITE_PASSES_MAX: usize = 4;

        for _ in 0..REWRITE_PASSES_MAX {
            // Note: this code doesn't do any short-circuiting, because each pass is
            // expected to have its own early exits.
            run_update_tree_pass(self);
            run_allocate_pass(self);

            if !self.needs_rewrite_passes() {
                break;
            }
        }

        if self.needs_rewrite_passes() {
            warn!(
                "All rewrite passes have run {REWRITE_PASSES_MAX} times, but invalidations are still set"
            );
        }
    }
}

impl HostRootState {
    /// Sends a signal to the embedder driving this host.
    pub(crate) fn emit_signal(&mut self, signal: HostRootSignal) {
        (self.signal_sink)(signal);
    }
}
