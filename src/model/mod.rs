pub mod config;
pub mod name;
pub mod path_set;
