pub mod listing;
pub mod session;

pub use listing::*;
pub use session::*;
