pub mod backend;
pub mod picker;

pub use backend::OpenAiCompatBackend;
pub use picker::NativeFilePicker;
