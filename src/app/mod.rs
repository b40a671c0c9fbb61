pub mod controller;
pub mod error;
pub mod events;
pub mod info;
pub mod ports;
pub mod state;
