pub mod admin;
pub mod budget;
pub mod document;
pub mod equipment;
pub mod issue;
pub mod labor;
pub mod material;
pub mod progress_update;
pub mod project;
pub mod task;
pub mod user;
