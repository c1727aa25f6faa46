// src/middleware.rs

pub mod cors;
