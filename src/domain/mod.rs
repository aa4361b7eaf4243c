//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `movie` - Movie value object, genres and random selection
//! - `conversation` - Intent classification, session keys and reply composition
//! - `messaging` - LINE webhook events and outbound message objects

pub mod conversation;
pub mod messaging;
pub mod movie;
