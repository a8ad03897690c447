pub mod generation_request;
pub mod generation_result;
pub mod share_links;
