//! Response modality selection.

use serde::{Deserialize, Serialize};

/// The output modality a request asks the model for.
///
/// # Examples
///
/// ```
/// use poseboard_core::ResponseModality;
///
/// assert_ne!(ResponseModality::Image, ResponseModality::Audio);
/// assert_eq!(format!("{}", ResponseModality::Image), "IMAGE");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseModality {
    /// Text output (including structured JSON)
    #[display("TEXT")]
    Text,
    /// Image output
    #[display("IMAGE")]
    Image,
    /// Audio output
    #[display("AUDIO")]
    Audio,
}
