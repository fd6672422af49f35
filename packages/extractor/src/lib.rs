pub mod baseline;
pub mod extractor;
pub mod properties;
pub mod resolver;

pub use baseline::{is_no_op, TagBaseline, NO_OP_VALUES, TAG_BASELINES};
pub use extractor::{class_map, NodeStyleRecord, StyleExtractor, DEFAULT_ROOT_CLASS};
pub use properties::{
    category_of, is_text_property, tracked_properties, PropertyCategory, TrackedProperty,
    TRACKED_PROPERTIES,
};
pub use resolver::{ComputedStyles, StyleResolver, StyleSnapshot};
