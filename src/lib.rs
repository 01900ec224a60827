pub mod avatar;
pub mod config;
pub mod content;
pub mod debounce;
pub mod error;
pub mod menu;
pub mod overlay;
pub mod reveal;
pub mod scroll;
pub mod telemetry;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(target_arch = "wasm32")]
pub use frontend::run;
