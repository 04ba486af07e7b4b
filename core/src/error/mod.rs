#[allow(clippy::module_inception)]
pub mod error;
pub mod http;

pub use error::{CliError, ClientError};
pub use http::ApiHttpError;
