mod admin_gate;
mod auth;
mod export;
mod filter;
mod hackathon;
mod incubation;
mod notify;
mod status;
