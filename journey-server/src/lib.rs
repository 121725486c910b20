//! Mumbai journey planner server.
//!
//! A web application that answers: "What is the fastest, cheapest or most
//! comfortable way across Mumbai's suburban rail and metro network?"

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod stations;
pub mod web;
