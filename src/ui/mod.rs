/// UI module exports
pub mod components;
pub mod newtab;
pub mod popup;
