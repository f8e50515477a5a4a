pub mod api;
pub mod nav;

pub use api::HttpChatApi;
pub use nav::BrowserNavigator;
