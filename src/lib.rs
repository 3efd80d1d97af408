pub mod adapters;
pub mod commands;
pub mod interaction;
pub mod params;
pub mod response;
pub mod rsvp;
pub mod server;
pub mod verify;
