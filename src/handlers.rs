// src/handlers.rs

pub mod activities;
pub mod auth;
pub mod dashboard;
pub mod leads;
pub mod messages;
pub mod realtime;
pub mod settings;
pub mod status;
pub mod surveys;
pub mod users;
pub mod whatsapp;
