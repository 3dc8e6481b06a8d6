use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Display,
    EnumString,
)]
pub enum EncodingContext {
    Streaming,
    Static,
}
