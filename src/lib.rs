pub mod api;
pub mod cli;
pub mod config;
pub mod csv_writer;
pub mod error;
pub mod init;
pub mod movie;
pub mod runner;

pub use error::{Error, Result};

pub(crate) fn logv(tag: &str, message: &str) {
    eprintln!("[{}] {}", tag, message);
}

pub(crate) fn logi(message: impl AsRef<str>) {
    logv("INFO", message.as_ref());
}

pub(crate) fn logok(message: impl AsRef<str>) {
    logv("OK", message.as_ref());
}

pub(crate) fn loge(message: impl AsRef<str>) {
    logv("ERROR", message.as_ref());
}
