pub mod projects;
pub mod upload;
