pub mod formatter;

pub use formatter::{
    format_json, format_rated_table, format_rating, format_tsv, should_use_colors, RatedItem,
};
