//! UniFFI bindgen binary for generating Swift/Kotlin bindings
//!
//! Usage:
//!   cargo run -p maillink-ffi --features bindgen --bin uniffi-bindgen generate \
//!       --library target/aarch64-apple-ios/release/libmaillink_ffi.a \
//!       --language swift \
//!       --out-dir generated/swift

fn main() {
    uniffi::uniffi_bindgen_main()
}
