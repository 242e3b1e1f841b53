pub mod audits;
pub mod spa;

pub use audits::*;
pub use spa::*;
