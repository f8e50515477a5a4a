pub mod ports;
pub mod event_bus;
pub mod format;
pub mod sidebar;
pub mod session;
pub mod redirect;
