use log::Level;

pub const COMPANY_NAME: &str = "Ferrovolt";
pub const COMPANY_TAGLINE: &str = "Electro-Mechanical Services";
pub const CONTACT_PHONE: &str = "+1 (555) 014-2290";
pub const CONTACT_EMAIL: &str = "projects@ferrovolt.example";
pub const CONTACT_ADDRESS: &str = "48 Foundry Lane, Unit 6, Riverside Industrial Park";
pub const OFFICE_HOURS: &str = "Mon-Fri 07:00-18:00, 24/7 emergency call-out";

/// How long the contact form pretends to be talking to a server.
pub const SUBMIT_DELAY_MS: u32 = 2_000;

/// Reveal line for scroll-triggered sections, as a percentage of viewport
/// height from the top.
pub const REVEAL_THRESHOLD: f64 = 80.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
