pub mod bump;
pub mod changelog;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod forge;
pub mod result;
pub mod slack;

pub use result::Result;
