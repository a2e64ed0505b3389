pub mod backend_status;
pub mod header;

pub use backend_status::BackendStatus;
pub use header::Header;
