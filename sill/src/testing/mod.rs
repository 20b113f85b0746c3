// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! Helpers for testing sill hosts headlessly.
//!
//! The primary type from this module is [`TestHarness`], which creates a
//! host for any [`Widget`] without a native window. The widget can of course
//! have children, which allows testing entire mounted trees.
//!
//! The testing harness can simulate window events, inspect any widget in the
//! tree, and observe the signals the host emits.

mod assert_debug_panics;
mod harness;
mod modular_widget;
mod recorder_widget;

pub use assert_debug_panics::assert_debug_panics_inner;
pub use harness::{TestHarness, TestHarnessParams};
pub use modular_widget::ModularWidget;
pub use recorder_widget::{Record, Recorder, Recording};

use crate::core::Widget;

/// External trait implemented for all widgets.
///
/// Implements helper methods useful for unit testing.
pub trait TestWidgetExt: Widget + Sized + 'static {
    /// Wrap this widget in a [`Recorder`] that records all method calls.
    fn record(self, recording: &Recording) -> Recorder<Self> {
        Recorder::new(self, recording)
    }
}

impl<W: Widget + 'static> TestWidgetExt for W {}
