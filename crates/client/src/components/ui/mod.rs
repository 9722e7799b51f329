//! UI primitives (Button, DropdownMenu, AlertDialog)

pub mod alert_dialog;
pub mod button;
pub mod dropdown_menu;

pub use alert_dialog::*;
pub use button::*;
pub use dropdown_menu::*;
