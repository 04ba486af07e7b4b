mod http;

pub use http::{TaskClient, AGENT_ID_HEADER};
