mod detect_content;
mod session;
mod transform_text;

pub use detect_content::{DetectContent, Detection};
pub use session::ChainSession;
pub use transform_text::{Direction, TransformText};
