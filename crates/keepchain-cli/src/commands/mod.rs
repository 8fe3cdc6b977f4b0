pub mod body;
pub mod completions;
pub mod config;
pub mod day;
pub mod money;
pub mod note;
pub mod promise;
pub mod status;
