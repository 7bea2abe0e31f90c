pub mod api_client;
pub mod offline_service;

pub use api_client::ApiClient;
pub use offline_service::OfflineService;
