//! Data models for the application.

mod user;

pub use user::{GoogleCallbackResponse, UserInfo, GOOGLE_PROVIDER, LOCAL_PROVIDER};
