pub mod init;
pub mod report;
pub mod validate;
