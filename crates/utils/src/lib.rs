mod bytes;
mod path;

pub use bytes::format_bytes;
pub use path::{default_config_file, default_state_file, default_user_cache};
