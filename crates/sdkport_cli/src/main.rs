//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `sdkport_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("sdkport_core version={}", sdkport_core::core_version());
}
