// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! Basic types and traits the sill widget system is built on.

mod axis;
mod contexts;
mod events;
mod measurement;
mod widget;
mod widget_mut;
mod widget_pod;
mod widget_ref;
mod widget_state;

pub use axis::Axis;
pub use contexts::{AllocateCtx, MeasureCtx, MutateCtx, RegisterCtx, UpdateCtx};
pub use events::{Handled, Update, WindowEvent};
pub use measurement::{Measurement, RequestMode};
pub use widget::{AsDynWidget, ChildrenIds, ChildrenRefs, FromDynWidget, Widget, WidgetId};
pub use widget_mut::WidgetMut;
pub use widget_pod::WidgetPod;
pub use widget_ref::WidgetRef;

pub(crate) use widget_state::WidgetState;
