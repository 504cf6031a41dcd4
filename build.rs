fn main() {
    // Bake the deployment's API base URL into the binary, the same way the
    // web build picks it up from its environment.
    match std::env::var("FURNILAYOUT_API_URL") {
        Ok(url) if !url.trim().is_empty() => {
            println!("cargo:rustc-env=FURNILAYOUT_BUILTIN_API_URL={}", url.trim());
        }
        _ => {
            println!("cargo:rustc-env=FURNILAYOUT_BUILTIN_API_URL=");
        }
    }

    // Re-run build script if FURNILAYOUT_API_URL changes
    println!("cargo:rerun-if-env-changed=FURNILAYOUT_API_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
