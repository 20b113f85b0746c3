// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! The widgets a sill host can mount.

mod sizing_proxy;
mod spacer;

pub use self::sizing_proxy::{SizingPolicy, SizingProxy};
pub use self::spacer::Spacer;
