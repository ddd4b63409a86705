//! tests/api/main.rs

mod apply;
mod health_check;
mod home;
