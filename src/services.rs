// src/services.rs

pub mod ai_keys;
pub mod auth;
pub mod dashboard_service;
pub mod realtime;
pub mod whatsapp;
