//! Core types used throughout the Aetheria workspace

pub mod message;
pub mod request;
pub mod response;
