pub mod domain;
pub mod listing_use_cases;
pub mod ports;
pub mod service;

pub use listing_use_cases::ListingUseCases;
