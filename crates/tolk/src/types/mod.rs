mod options;
mod resource;
mod value;

pub use options::{TranslateOptions, TranslatorOptions};
pub use resource::Resource;
pub use value::Value;
