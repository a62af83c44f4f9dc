mod api_key;

pub use api_key::{AuthGate, Authorized, API_KEY_HEADER};
