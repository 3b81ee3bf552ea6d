mod service;
mod types;
mod validation;


pub use service::{FileService, FileServiceImpl};
pub(crate) use types::read_file;
pub use types::{FileObject, FilePurpose, FileUploadRequest};
pub use validation::FileRequestValidator;
