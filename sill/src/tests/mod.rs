// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! We test the host engine and its passes here instead of next to each
//! widget, to keep pass-level behavior covered in one place. Behavior
//! specific to a single widget lives in that widget's module.

mod event;
mod layout;
mod mutate;
mod update;
