pub mod clipboard;
pub mod components;
pub mod dialogs;
pub mod export;
pub mod file_reader;
pub mod i18n;
pub mod icons;
pub mod state;
pub mod storage;
