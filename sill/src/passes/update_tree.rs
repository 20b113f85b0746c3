// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! The tree-update pass, which attaches widgets added since the last pass.

use tracing::info_span;

use crate::app::HostRoot;
use crate::core::RegisterCtx;

/// Walks the tree and attaches widgets that are new to it.
///
/// Recursion happens through [`RegisterCtx::register_child`]: every visited
/// widget hands its child pods back to the context, and widgets seen for the
/// first time receive [`Update::WidgetAdded`](crate::core::Update::WidgetAdded)
/// before their own children are visited.
pub(crate) fn run_update_tree_pass(root: &mut HostRoot) {
    if !root.global_state.needs_update_tree {
        return;
    }
    root.global_state.needs_update_tree = false;

    let _span = info_span!("update_new_widgets").entered();

    let mut ctx = RegisterCtx {
        global_state: &mut root.global_state,
        #[cfg(debug_assertions)]
        registered_ids: Vec::new(),
    };
    ctx.register_child(&mut root.root);
}
