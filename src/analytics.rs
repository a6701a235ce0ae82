use log::info;

/// Placeholder tracker; events only reach the console for now.
pub fn track_event(category: &str, action: &str, label: &str) {
    info!("Event tracked: category={} action={} label={}", category, action, label);
}
