pub mod media;
mod seerr;

pub use media::{MediaStatus, MediaType, SearchResult, SeasonStatus, Status};
pub use seerr::SeerrClient;
