pub mod schema;
pub mod init;

pub mod user_repo;
pub use user_repo::UserRepository;
pub mod lead_repo;
pub use lead_repo::LeadRepository;
pub mod activity_repo;
pub use activity_repo::ActivityRepository;
pub mod message_repo;
pub use message_repo::MessageRepository;
pub mod survey_repo;
pub use survey_repo::SurveyRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
pub mod ai_settings_repo;
pub use ai_settings_repo::AiSettingsRepository;
