mod settings;

pub use settings::{Settings, Targets};
