//! HTTP access to the EuroBasket API: the single-request fetcher and the
//! link map discovered from the root resource.

pub mod fetcher;
pub mod http_client;
pub mod links;

pub use fetcher::Fetcher;
pub use links::{LinkMap, get_links};
