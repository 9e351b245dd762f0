pub mod cancel_listing;
pub mod create_listing;
pub mod initialize;
pub mod purchase;
pub mod update_fee;

pub use cancel_listing::*;
pub use create_listing::*;
pub use initialize::*;
pub use purchase::*;
pub use update_fee::*;
