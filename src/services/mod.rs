pub mod dom;
pub mod droid;
pub mod extractor;
pub mod report;
pub mod search;

pub use dom::*;
pub use droid::*;
pub use extractor::*;
pub use report::*;
pub use search::*;
