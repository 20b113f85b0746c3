// Copyright 2026 the Sill Authors
// SPDX-License-Identifier: Apache-2.0

//! Linkage-only ABI declarations consumed by embedding framework loaders.
//!
//! Nothing in this crate is called from inside the workspace. An embedding
//! framework that mounts its UI through Sill locates these symbols and type
//! declarations at link/load time:
//!
//! - [`sill_embedder_metadata`], an exported query returning an opaque
//!   pointer to a static [`EmbedderMetadata`] record.
//! - The window-initialization interface ([`WINDOW_INIT_INTERFACE_ID`],
//!   [`WindowInitVTable`]) and the [`ResizeCallbackFn`] wire types, which
//!   are declarations only.
//!
//! These are fixed external contracts. Changing a layout or a symbol name
//! here breaks loaders that were built against the previous revision, so any
//! such change must bump [`SILL_ABI_VERSION`].

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![expect(unsafe_code, reason = "Exported symbols and FFI declarations")]

use std::ffi::{c_char, c_void};

/// The revision of the contracts declared in this crate.
pub const SILL_ABI_VERSION: u32 = 1;

// --- MARK: METADATA

/// The static record [`sill_embedder_metadata`] points to.
///
/// Loaders read it through the opaque pointer; the field order and types are
/// part of the ABI.
#[repr(C)]
#[derive(Debug)]
pub struct EmbedderMetadata {
    /// The [`SILL_ABI_VERSION`] this library was built with.
    pub abi_version: u32,
    /// Reserved; always zero in this revision.
    pub flags: u32,
    /// The host's name as a NUL-terminated string with static storage
    /// duration.
    pub name: *const c_char,
}

// The name pointer refers to a string with static storage duration, so the
// record can be shared freely.
unsafe impl Sync for EmbedderMetadata {}

static METADATA: EmbedderMetadata = EmbedderMetadata {
    abi_version: SILL_ABI_VERSION,
    flags: 0,
    name: c"sill".as_ptr(),
};

/// Returns an opaque pointer to this library's [`EmbedderMetadata`].
///
/// The pointee has static storage duration; loaders may hold the pointer for
/// the lifetime of the process.
#[unsafe(no_mangle)]
pub extern "C" fn sill_embedder_metadata() -> *const c_void {
    (&raw const METADATA).cast()
}

// --- MARK: WINDOW INIT

/// A COM-style interface identifier.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceId {
    /// The first 32 bits of the identifier.
    pub data1: u32,
    /// The next 16 bits of the identifier.
    pub data2: u16,
    /// The next 16 bits of the identifier.
    pub data3: u16,
    /// The final 64 bits of the identifier.
    pub data4: [u8; 8],
}

/// Identifies the platform's window-initialization interface
/// (`3E68D4BD-7135-4D10-8018-9FB6D9F33FA1`).
pub const WINDOW_INIT_INTERFACE_ID: InterfaceId = InterfaceId {
    data1: 0x3E68_D4BD,
    data2: 0x7135,
    data3: 0x4D10,
    data4: [0x80, 0x18, 0x9F, 0xB6, 0xD9, 0xF3, 0x3F, 0xA1],
};

/// Queries the native handle of the window a host is mounted in.
///
/// `handle_out` receives an opaque, platform-defined window handle. Returns
/// zero on success.
pub type WindowHandleQueryFn =
    unsafe extern "C" fn(context: *mut c_void, handle_out: *mut *mut c_void) -> i32;

/// The vtable of the platform's window-initialization interface.
///
/// Declaration only; the platform provides the implementation and Sill never
/// calls through it.
#[repr(C)]
#[derive(Debug)]
pub struct WindowInitVTable {
    /// Queries the handle of the backing native window.
    pub get_window_handle: WindowHandleQueryFn,
}

// --- MARK: RESIZE CALLBACK

/// A size in physical pixels, as it crosses the ABI boundary.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeSize {
    /// The width in physical pixels.
    pub width: i32,
    /// The height in physical pixels.
    pub height: i32,
}

/// The resize notification as the embedding framework's loader declares it.
///
/// `context` is the opaque pointer the framework supplied at registration.
pub type ResizeCallbackFn = unsafe extern "C" fn(context: *mut c_void, size: NativeSize);

// --- MARK: TESTS

#[cfg(test)]
mod tests {
    use std::ffi::CStr;

    use super::*;

    #[test]
    fn metadata_is_exported() {
        let pointer = sill_embedder_metadata();
        assert!(!pointer.is_null());
        assert_eq!(pointer, sill_embedder_metadata());

        assert_eq!(METADATA.abi_version, SILL_ABI_VERSION);
        assert_eq!(METADATA.flags, 0);
        let name = unsafe { CStr::from_ptr(METADATA.name) };
        assert_eq!(name, c"sill");
    }

    #[test]
    fn wire_struct_layouts() {
        assert_eq!(size_of::<NativeSize>(), 8);
        assert_eq!(align_of::<NativeSize>(), 4);
        assert_eq!(size_of::<InterfaceId>(), 16);
        assert_eq!(size_of::<WindowInitVTable>(), size_of::<usize>());
    }
}
