pub mod auth;
pub mod filaments;
pub mod jobs;
pub mod moonraker;
pub mod printers;
pub mod settings;
pub mod timeline;
