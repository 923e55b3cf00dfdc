mod json_ld;

pub use self::json_ld::{is_recipe, metadata_nodes_from_html, MetadataExtractor};
