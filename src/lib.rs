pub mod format;
pub mod measurement;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
