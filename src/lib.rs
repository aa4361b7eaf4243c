//! Nang Bot - LINE movie suggestion bot
//!
//! Receives LINE webhook events, picks a random movie from TMDB by genre,
//! replies with a poster carousel, and answers follow-up requests for the
//! synopsis of the last movie shown in that conversation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
