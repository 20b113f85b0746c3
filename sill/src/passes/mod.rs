// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! Internal passes run by the host root after external events.
//!
//! Each pass has an early exit when the invalidation flag it services is
//! clear, so running them all is cheap when nothing has changed.

pub(crate) mod allocate;
pub(crate) mod update_tree;

pub(crate) use allocate::{run_allocate_on, run_measure_on};
