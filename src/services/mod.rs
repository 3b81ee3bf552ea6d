pub mod assistants;
pub mod context;
pub mod files;
pub mod images;
