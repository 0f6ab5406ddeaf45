pub mod config;
pub mod convert;
pub mod init;
pub mod mask;
pub mod sum;
pub mod vacation;
