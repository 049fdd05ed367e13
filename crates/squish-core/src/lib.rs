pub mod compress;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod format;
pub mod quality;
pub mod view;
