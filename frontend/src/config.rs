pub const PRODUCT_NAME: &str = "Tether";

pub const DEMO_AUTO_CLOSE_MS: u32 = 3000;

#[cfg(debug_assertions)]
pub fn demo_contact_address() -> &'static str {
    "demo+dev@tetherhealth.com"  // Development inbox when running locally
}

#[cfg(not(debug_assertions))]
pub fn demo_contact_address() -> &'static str {
    "demo@tetherhealth.com"
}

pub fn demo_subject() -> &'static str {
    "Tether demo request"
}
