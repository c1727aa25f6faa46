pub mod activity;
pub mod ai_settings;
pub mod dashboard;
pub mod lead;
pub mod message;
pub mod status;
pub mod survey;
pub mod user;
