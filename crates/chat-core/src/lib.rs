pub mod classify;
pub mod controller;
pub mod gateway;
pub mod message;
pub mod prompt;
pub mod protocol;
