// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

/// Checks that the given expression panics in debug mode. No-op in release mode.
///
/// This macro is useful for tests that check the behavior of `debug_panic!` calls.
#[macro_export]
macro_rules! assert_debug_panics {
    ($expr:expr) => {
        $crate::testing::assert_debug_panics_inner(
            || {
                $expr;
            },
            "".into(),
        )
    };

    ($expr:expr, $needle:expr) => {
        $crate::testing::assert_debug_panics_inner(
            || {
                $expr;
            },
            ($needle).to_string(),
        )
    };
}

use std::panic::{AssertUnwindSafe, catch_unwind};

#[track_caller]
#[doc(hidden)]
pub fn assert_debug_panics_inner(callback: impl FnOnce(), needle: String) {
    if cfg!(not(debug_assertions)) {
        return;
    }

    // AssertUnwindSafe is not a safety invariant here: this helper only runs
    // in tests, and a misuse can produce confusing test failures but never
    // undefined behavior.
    let callback = AssertUnwindSafe(callback);

    let res = catch_unwind(callback);

    let Err(err) = res else {
        panic!("test did not panic as expected");
    };

    // The panic payload is virtually always a `&'static str` or `String`.
    let message;
    if let Some(s) = err.downcast_ref::<&str>() {
        message = s.to_string();
    } else if let Some(s) = err.downcast_ref::<String>() {
        message = s.clone();
    } else {
        panic!("panic had unexpected type");
    }

    if !message.contains(&needle) {
        panic!(
            concat!(
                "panic did not contain expected string\n",
                "      panic message: {}\n",
                " expected substring: {}",
            ),
            message, needle,
        );
    }
}
