//! Per-channel identity state.
//!
//! Each calling channel owns its own identity pointer and passes it into
//! every turn. There is no process-wide "current user": independent
//! channels never share identity state.

/// Identity state for one calling channel.
///
/// States: Anonymous (`current` is `None`), Identified/Authenticated-lite
/// (`current` is `Some`). Signup establishes identity; a failed signup
/// leaves the pointer untouched.
#[derive(Debug, Clone, Default)]
pub struct ChannelSession {
    current: Option<String>,
}

impl ChannelSession {
    /// A fresh, anonymous channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel resuming a previously established identity.
    pub fn resuming(session_id: impl Into<String>) -> Self {
        Self {
            current: Some(session_id.into()),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.current.is_none()
    }

    /// Establish an identity on this channel (successful signup).
    pub fn identify(&mut self, session_id: impl Into<String>) {
        self.current = Some(session_id.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_starts_anonymous() {
        let channel = ChannelSession::new();
        assert!(channel.is_anonymous());
        assert_eq!(channel.current(), None);
    }

    #[test]
    fn test_identify_sets_pointer() {
        let mut channel = ChannelSession::new();
        channel.identify("abc123");
        assert!(!channel.is_anonymous());
        assert_eq!(channel.current(), Some("abc123"));
    }

    #[test]
    fn test_channels_are_independent() {
        let mut a = ChannelSession::new();
        let b = ChannelSession::new();
        a.identify("abc123");
        assert!(b.is_anonymous());
    }
}
