//! UniFFI bindings crate for the maillink library
//!
//! This crate wraps the maillink crate for UniFFI library mode binding generation.
//! It re-exports the FFI module and UniFFI scaffolding from the maillink crate.
//!
//! ## Building for Swift
//!
//! 1. Build the library for Apple platforms:
//!    ```bash
//!    cargo build --release -p maillink-ffi --target aarch64-apple-ios
//!    cargo build --release -p maillink-ffi --target aarch64-apple-ios-sim
//!    ```
//!
//! 2. Generate Swift bindings:
//!    ```bash
//!    cargo run -p maillink-ffi --features bindgen --bin uniffi-bindgen generate \
//!        --library target/aarch64-apple-ios/release/libmaillink_ffi.a \
//!        --language swift \
//!        --out-dir generated/swift
//!    ```
//!
//! Kotlin bindings are generated the same way with `--language kotlin`
//! against the Android `.so`.

// Re-export everything from the maillink crate's FFI module
pub use maillink::ffi::*;

// Library mode needs the scaffolding symbols exported from this cdylib
maillink::uniffi_reexport_scaffolding!();
