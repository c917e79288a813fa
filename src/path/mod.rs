mod split;

pub use split::{RequestPath, RequestSegments, split_request_path};
