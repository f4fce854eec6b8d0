pub mod auth_service;
pub mod hackathons_service;
pub mod incubation_service;
