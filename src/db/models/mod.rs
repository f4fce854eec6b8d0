pub mod api;
pub mod auth;
pub mod hackathon;
pub mod incubation;

pub use api::*;
pub use auth::*;
pub use hackathon::*;
pub use incubation::*;
