use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifies one clipboard history entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipId(String);

impl_id!(ClipId);
