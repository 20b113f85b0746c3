// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! Sill provides the widget-hosting engine used to embed UI trees in native windows.
//!
//! The embedder owns the native window and its event loop; Sill owns the widget
//! tree mounted inside that window. The embedder forwards window events to a
//! [`HostRoot`][app::HostRoot] and applies the [signals][app::HostRootSignal]
//! it emits back, such as requests to resize the window.
//!
//! Sill provides:
//!
//! - [`Widget`][core::Widget], the trait implemented by every mounted widget.
//! - A measurement protocol where each axis is measured independently, with the
//!   cross axis measured at the length the leading axis resolved to.
//! - An allocation pass handing every widget its final size and position.
//! - APIs for widget manipulation (such as [`WidgetMut`][core::WidgetMut]).
//! - [`SizingProxy`][widgets::SizingProxy], the root container through which an
//!   embedder dictates sizes and observes allocations.
//! - A headless [`TestHarness`][testing::TestHarness] for exercising widget
//!   trees without a window.
//!
//! Sill never creates windows, paints, or handles input. Those concerns stay
//! with the embedder; Sill only answers "how big" and "where" for the tree it
//! hosts, and tells the embedder when the window itself should change size.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
// TODO: Remove any items listed as "Deferred"
#![cfg_attr(not(debug_assertions), expect(unused, reason = "Deferred: Noisy"))]
#![expect(missing_debug_implementations, reason = "Deferred: Noisy")]
#![expect(clippy::cast_possible_truncation, reason = "Deferred: Noisy")]

pub use {dpi, kurbo};

#[macro_use]
pub mod util;

mod passes;

pub mod app;
pub mod core;
pub mod testing;
pub mod widgets;

#[cfg(test)]
mod tests;
