pub mod catalog;
pub mod selector;
pub mod set;

pub use catalog::*;
pub use selector::*;
pub use set::*;
