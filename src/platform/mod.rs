//! Platform abstraction layer
//!
//! The simulation never touches the platform. Hosts drive a [`crate::Game`]:
//! - Browser: `web::WebGame`, called from `requestAnimationFrame` and DOM input handlers
//! - Native: the `flapgap` binary runs a headless autopilot demo

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Seed for a new session, from wall-clock time
pub fn session_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}
