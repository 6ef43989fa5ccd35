//! Error type shared by the coefficient designer and the filter chain.
//!
//! Every fallible operation in this crate validates its inputs before
//! touching any state, so a returned [`FilterError`] always means "nothing
//! happened". Callers on the audio thread can keep processing with the
//! previous coefficient.

/// Errors reported by [`design`](crate::design()) and [`FilterChain`](crate::FilterChain).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterError {
    /// A numeric precondition was violated (cutoff, sample rate, block size, channel count).
    InvalidParameter {
        /// Which parameter was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `process` or `set_coefficient` was called before `prepare`.
    NotPrepared,
    /// The block does not have the channel count the chain was prepared with.
    ChannelCountMismatch {
        /// Channel count given to `prepare`.
        expected: usize,
        /// Channel count of the rejected block.
        actual: usize,
    },
    /// Channels within one block have different lengths.
    ChannelLengthMismatch,
    /// A channel is longer than the prepared maximum block size.
    BlockTooLarge {
        /// Maximum block size given to `prepare`.
        max: usize,
        /// Length of the rejected block.
        actual: usize,
    },
    /// A per-channel operation named a channel the chain does not have.
    ChannelOutOfRange {
        /// Requested channel index.
        channel: usize,
        /// Number of prepared channels.
        channels: usize,
    },
}

impl FilterError {
    /// Shorthand for [`FilterError::InvalidParameter`].
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

impl core::fmt::Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid parameter '{name}': {value}")
            }
            Self::NotPrepared => write!(f, "filter chain used before prepare()"),
            Self::ChannelCountMismatch { expected, actual } => {
                write!(f, "expected {expected} channel(s), got {actual}")
            }
            Self::ChannelLengthMismatch => write!(f, "channels in one block differ in length"),
            Self::BlockTooLarge { max, actual } => {
                write!(f, "block of {actual} samples exceeds prepared maximum of {max}")
            }
            Self::ChannelOutOfRange { channel, channels } => {
                write!(f, "channel {channel} out of range (chain has {channels})")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FilterError {}
