mod reader;

pub use reader::SystemClipboardReader;
