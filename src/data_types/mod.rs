pub mod cell;
pub mod options;
pub mod series;

pub use cell::*;
pub use options::*;
pub use series::*;
