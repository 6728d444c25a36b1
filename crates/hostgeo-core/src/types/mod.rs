mod country;
mod dns;
mod geo;
mod report;

pub use country::*;
pub use dns::*;
pub use geo::*;
pub use report::*;
