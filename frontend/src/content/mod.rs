//! Static site content. Text lives in the translation table; these tables hold
//! the keys, icons and numbers.

pub mod services;

pub use services::{find_service, Service, SERVICES};

/// Stat counters on the home page: (label key, target, stagger delay in ms).
pub const STATS: [(&str, f64, u32); 3] = [
    ("stats.years", 25.0, 0),
    ("stats.shipments", 12000.0, 200),
    ("stats.countries", 40.0, 400),
];

/// Testimonial key prefixes, `testimonial.<n>.{quote,author,role}`.
pub const TESTIMONIALS: [&str; 3] = ["testimonial.1", "testimonial.2", "testimonial.3"];

/// Partner names are brands and stay untranslated.
pub const PARTNERS: [&str; 6] = [
    "Maersk",
    "MSC",
    "CMA CGM",
    "Emirates SkyCargo",
    "DHL Global Forwarding",
    "Hapag-Lloyd",
];
