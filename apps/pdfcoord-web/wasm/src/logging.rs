//! Browser console logging

const PREFIX: &str = "[pdfcoord]";

pub fn info(message: &str) {
    web_sys::console::log_1(&format!("{} {}", PREFIX, message).into());
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&format!("{} {}", PREFIX, message).into());
}

pub fn error(message: &str) {
    web_sys::console::error_1(&format!("{} {}", PREFIX, message).into());
}
