//! View layer: session context, layout shell, shared components, pages.

pub mod badges;
pub mod common;
pub mod icon;
pub mod layout;
pub mod pages;
pub mod session;
pub mod theme;

pub use icon::{Icon, icons};
