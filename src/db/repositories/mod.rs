pub mod hackathons;
pub mod incubation;
pub mod users;
