//! Top-level menu and session dispatch

pub mod controller;
pub mod view;

pub use controller::MenuController;
pub use view::render_menu;
