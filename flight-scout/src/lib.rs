//! Round-trip flight fare finder.
//!
//! Answers: "what is the cheapest way to fly from near A to near B and
//! back, within a few days of a given date?"

pub mod airports;
pub mod domain;
pub mod fares;
pub mod planner;
pub mod report;
