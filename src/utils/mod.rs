pub mod almost_equal;
pub mod math;
pub mod round;

#[cfg(target_arch = "wasm32")]
pub mod wasm_logger;
