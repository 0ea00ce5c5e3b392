pub mod request_id;

pub use request_id::{RequestId, RequestIdValue, REQUEST_ID_HEADER};
