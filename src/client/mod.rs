pub mod api_client;
pub mod cache;

pub use api_client::ApiClient;
pub use cache::{DashboardState, SnapshotCache};
