// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! Types needed for running a sill host inside a native window.

mod host_root;
mod tracing_backend;

pub use host_root::{HostRoot, HostRootOptions, HostRootSignal, WindowSizePolicy};
pub use tracing_backend::{
    TracingSubscriberHasBeenSetError, try_init_test_tracing, try_init_tracing,
};

pub(crate) use host_root::HostRootState;
