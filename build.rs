//! Capability probe: picks the arithmetic backend once per build.
//!
//! The build script runs on the host, so everything is read from the
//! `CARGO_CFG_TARGET_*` environment, never from `#[cfg]` of the script itself.

use std::env;

fn forced(feature: &str) -> bool {
    env::var_os(format!("CARGO_FEATURE_{}", feature.to_uppercase())).is_some()
}

fn main() {
    println!("cargo:rustc-check-cfg=cfg(uint128_backend, values(\"native\", \"intrinsic\", \"portable\"))");
    println!("cargo:rerun-if-changed=build.rs");

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let pointer_width = env::var("CARGO_CFG_TARGET_POINTER_WIDTH").unwrap_or_default();

    let requested: Vec<&str> = ["native", "intrinsic", "portable"]
        .iter()
        .copied()
        .filter(|feature| forced(feature))
        .collect();

    // More than one forced backend is reported by `compile_error!` in `src/limb.rs`,
    // which names the offending features; pick the first here so that is the only error.
    let backend = match requested.first() {
        Some(&"intrinsic") if arch != "x86_64" => "portable",
        Some(backend) => backend,
        None if pointer_width == "64" => "native",
        None => "portable",
    };

    println!("cargo:rustc-cfg=uint128_backend=\"{}\"", backend);
}
