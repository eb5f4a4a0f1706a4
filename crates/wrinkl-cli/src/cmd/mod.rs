pub mod archive;
pub mod feature;
pub mod init;
pub mod list;
