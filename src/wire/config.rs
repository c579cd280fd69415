//! Decoder configuration.

/// What to do with tags the schema does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTagPolicy {
    /// Skip unknown tags so newer producers stay readable.
    #[default]
    Ignore,
    /// Fail with [`DecodeError::UnknownField`](super::DecodeError::UnknownField).
    Reject,
}

/// Options for [`decode_with`](super::decode_with).
///
/// # Examples
///
/// ```
/// use projgen::wire::{DecoderConfig, UnknownTagPolicy};
///
/// let config = DecoderConfig::strict();
/// assert_eq!(config.unknown_tags, UnknownTagPolicy::Reject);
/// assert_eq!(DecoderConfig::default().unknown_tags, UnknownTagPolicy::Ignore);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    /// Handling of tags outside the schema.
    pub unknown_tags: UnknownTagPolicy,
}

impl DecoderConfig {
    /// Configuration that rejects unknown tags.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            unknown_tags: UnknownTagPolicy::Reject,
        }
    }
}
