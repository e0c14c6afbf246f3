pub mod object_endpoint;
pub mod test_context;
