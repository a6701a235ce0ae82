
#[cfg(debug_assertions)]
pub fn get_contact_recipient() -> &'static str {
    "dev@cirebonsmartfarm.local"  // Keeps test submissions out of the real inbox
}

#[cfg(not(debug_assertions))]
pub fn get_contact_recipient() -> &'static str {
    "cirebonsmartfarm@gmail.com"
}

// Hero slider
pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const PARALLAX_RATE: f64 = -0.5;
pub const PARALLAX_THROTTLE_MS: f64 = 16.0;

// Contact form
pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const MAIL_HANDOFF_DELAY_MS: u32 = 1_000;

// Navbar
pub const NAV_SCROLLED_AFTER_PX: f64 = 50.0;
pub const NAV_HIDE_AFTER_PX: f64 = 100.0;
pub const ANCHOR_EXTRA_OFFSET_PX: f64 = 20.0;

// Stat counters, roughly 60fps
pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_TICK_MS: u32 = 16;

pub const GALLERY_PULSE_MS: u32 = 150;

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const ORIENTATION_RESET_DELAY_MS: u32 = 500;
