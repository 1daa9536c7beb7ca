use schema::InvalidStyleTag;
use thiserror::Error;

/// Main error type for the summary screen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryScreenError {
    /// The host handed over arguments the entry point cannot accept
    #[error("Binding error: {0}")]
    Binding(#[from] BindingError),
    /// A screen operation was requested in the wrong phase
    #[error("Screen error: {0}")]
    Screen(#[from] ScreenError),
    /// The layout configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors detected while accepting a call from the host
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// Style tag outside the declared variants
    #[error("{0}")]
    InvalidStyle(#[from] InvalidStyleTag),
    /// A non-empty party was passed as a null pointer
    #[error("Null party pointer with {count} records")]
    NullParty { count: u32 },
    /// More records than a party holds
    #[error("Party of {count} records exceeds the maximum of {max}")]
    PartyTooLarge { count: u32, max: usize },
    /// No host table was registered before the call
    #[error("No host registered")]
    NoHost,
    /// The host table is missing an entry
    #[error("Host table is incomplete")]
    IncompleteHost,
}

/// Errors raised by the screen state machine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// A resume callback arrived while the screen was not waiting for it
    #[error("Screen is not waiting for the {expected} to return")]
    NotSuspended { expected: &'static str },
    /// A slot index beyond the party
    #[error("Slot {slot} is out of range for a party of {len}")]
    SlotOutOfRange { slot: usize, len: usize },
    /// No screen is registered with the binding
    #[error("No summary screen is active")]
    NotActive,
}

/// Errors loading a ScreenConfig
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The RON source did not parse
    #[error("Malformed config: {0}")]
    Malformed(String),
    /// A value parsed but is unusable
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(err: ron::error::SpannedError) -> Self {
        ConfigError::Malformed(err.to_string())
    }
}

/// Type alias for Results using SummaryScreenError
pub type SummaryScreenResult<T> = Result<T, SummaryScreenError>;

/// Type alias for Results using BindingError
pub type BindingResult<T> = Result<T, BindingError>;

/// Type alias for Results using ScreenError
pub type ScreenResult<T> = Result<T, ScreenError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
