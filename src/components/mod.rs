//! UI Components
//!
//! Reusable Leptos components.

mod navbar;
mod mobile_menu;
mod sidebar;
mod progress_chart;
mod task_composer;
mod task_section;
mod task_row;

pub use navbar::Navbar;
pub use mobile_menu::MobileMenu;
pub use sidebar::Sidebar;
pub use progress_chart::ProgressChart;
pub use task_composer::TaskComposer;
pub use task_section::TaskSection;
pub use task_row::TaskRow;
