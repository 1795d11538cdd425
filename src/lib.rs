pub mod config;
pub mod contact;
pub mod content;
pub mod filter;
pub mod modal;
pub mod notify;
pub mod projects;
pub mod report;
pub mod scroll;
pub mod storage;
pub mod theme;
pub mod view_counter;
pub mod visibility;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
