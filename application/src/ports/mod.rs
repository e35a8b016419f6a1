//! Ports: interfaces the application layer needs the outside world to
//! implement.

pub mod repository;
