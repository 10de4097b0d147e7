// Shared helpers

pub mod constants;
pub mod masking;

pub use constants::*;
pub use masking::mask_pass_key;
