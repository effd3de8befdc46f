fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Library location and entry point are baked in at compile time through `option_env!`.
    println!("cargo:rerun-if-env-changed=ROLL_DYLIB_PATH");
    println!("cargo:rerun-if-env-changed=ROLL_SYMBOL");
}
