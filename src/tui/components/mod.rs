// Components module - reusable UI building blocks
//
// - Nav bar: brand, items, mobile toggle and dropdown
// - Progress bar: reading progress along the top edge
// - Sections: the page itself, hero to footer
// - Scrollbar and toast overlays

pub mod formatters;
pub mod nav_bar;
pub mod progress_bar;
pub mod scrollbar;
pub mod sections;
pub mod toast;

pub use formatters::format_number;
pub use toast::Toast;
