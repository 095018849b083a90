pub mod feature;
pub mod title;

pub use feature::{extract_feature_blocks, load_features, parse_feature};
pub use title::first_quoted_string;
