pub mod output;
pub mod table;
pub mod theme;

pub use output::{error, header, info, success, warn};
pub use table::{brands_table, models_table, models_with_brand_table, parts_table, stats_table};
pub use theme::{theme, Theme};
