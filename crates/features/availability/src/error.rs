use std::borrow::Cow;

/// Failures of a bed availability query.
#[erbeds_derive::erbeds_error]
pub enum AvailabilityError {
    /// The request could not be sent or its body could not be read.
    #[error("Transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The body is not a JSON envelope of the expected shape.
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The upstream answered with an HTTP error status or a non-success `resultCode`.
    #[error("Upstream error{} [{code}]: {message}", format_context(.context))]
    Upstream { code: Cow<'static, str>, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The client is missing its service key or endpoint.
    #[error("Configuration error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// How a failure is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Any failure of the outbound call or of decoding its answer.
    NetworkOrParseFailure,
    /// The client cannot be used until it is configured.
    Configuration,
}

impl AvailabilityError {
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Transport { .. } | Self::Decode { .. } | Self::Upstream { .. } => {
                FailureKind::NetworkOrParseFailure
            },
            Self::Config { .. } => FailureKind::Configuration,
        }
    }

    /// Short tag for structured logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Decode { .. } => "decode",
            Self::Upstream { .. } => "upstream",
            Self::Config { .. } => "config",
        }
    }
}
