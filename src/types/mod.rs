mod common;

pub(crate) use common::null_as_default;
pub use common::{DeletionStatus, ListParams, ListResponse, Metadata, SortOrder, Usage};
