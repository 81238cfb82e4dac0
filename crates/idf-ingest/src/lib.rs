pub mod error;
pub mod identity_file;

pub use error::IngestError;
pub use identity_file::read_identities;
