pub mod crud;
pub mod domain;
pub mod shared;
pub mod system;

/// One-time setup for the browser build: routes `log` macros to the console
/// and installs the panic hook. The embedding shell calls this before the
/// first request.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
