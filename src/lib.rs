//! Pricing Engine - plan pricing for a marketing pricing page
//!
//! This crate derives displayed prices from a plan, a user count, a billing
//! period and a currency, and keeps one visitor's selection in a session
//! that renders through ports. It also carries the phone-credit pack
//! selector and the auto-scrolling logo stripe used on the same page.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
