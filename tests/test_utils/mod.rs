#![allow(dead_code)]

pub mod collector;

pub use collector::{ACCEPTED, RawRequest, closed_port, spawn_collector};
