//! API endpoint modules.

mod countries;
mod dns;
mod geo;
mod pages;

pub use countries::CountriesApi;
pub use dns::DnsApi;
pub use geo::GeoApi;
pub use pages::PagesApi;
