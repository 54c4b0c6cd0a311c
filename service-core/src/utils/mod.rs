pub mod secret;

pub use secret::secure_compare;
