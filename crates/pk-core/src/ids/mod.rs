//! ID type wrappers for type safety.

mod clip_id;
mod id_macro;

pub use clip_id::ClipId;
