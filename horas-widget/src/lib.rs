mod intent;
mod list;
mod render;
mod snapshot;
mod template;

pub use intent::*;
pub use list::{parse_list_field, LIST_SLOTS};
pub use render::*;
pub use snapshot::*;
pub use template::*;
