//! Toolkit-free models of the two page widgets that talk to the service or
//! to session data: the interwiki loader and the account menu.

pub mod account_menu;
pub mod interwiki;

pub use account_menu::{AccountMenu, MenuLink, MenuState, PointerRegion};
pub use interwiki::{InitializedWidgets, InterwikiConfiguration, InterwikiLoader, WidgetNode};
