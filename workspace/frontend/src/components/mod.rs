pub mod analysis;
pub mod charts;
pub mod chat_widget;
pub mod demographics;
pub mod filters;
pub mod layout;
pub mod visualization;
