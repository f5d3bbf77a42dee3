pub mod backend;
pub mod event;
pub mod mapper;

pub mod init;
pub mod instrumentation;
pub mod internal_log;
pub mod logger;
pub mod noop_backend;
pub mod rum;
pub mod time;
