pub mod api;
pub mod error;
pub mod http;

pub use api::SearchBackend;
pub use error::{ClientError, ClientResult};
pub use http::HttpSearchClient;
