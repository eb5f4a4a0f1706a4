pub mod board;
pub mod config;
pub mod error;
pub mod io;
pub mod ledger;
pub mod markdown;
pub mod name;
pub mod paths;
pub mod project;
pub mod suggest;
pub mod template;

pub use error::{Result, WrinklError};
