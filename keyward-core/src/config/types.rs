//! Lock policy configuration
//!
//! These values are compiled into the firmware. Changing the credential
//! means rebuilding.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::KeyMap;

/// Capacity of the entry buffer, one display row
pub const INPUT_CAPACITY: usize = 16;

/// Reference credential used when no other is configured
pub const DEFAULT_CREDENTIAL: &str = "2586A";

/// Errors found while validating a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Credential has no characters
    EmptyCredential,
    /// Credential does not fit the entry buffer
    CredentialTooLong,
    /// Credential is wider than the visible entry row
    CredentialTooWide,
    /// Entry width is zero or larger than the entry buffer
    InvalidEntryWidth,
    /// Credential contains the clear or submit key
    ReservedKeyInCredential,
    /// Credential contains a character the keypad cannot produce
    UnknownKey(char),
    /// Clear and submit are the same key
    ConflictingKeys,
    /// Clear or submit key is not on the keypad
    ControlKeyMissing,
    /// At least one attempt must be allowed
    NoAttempts,
    /// Lockout must last at least one second
    NoLockout,
}

/// Lock policy
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LockConfig {
    /// Passphrase that unlocks the controller
    pub credential: String<INPUT_CAPACITY>,
    /// Key that discards the current entry
    pub clear_key: char,
    /// Key that submits the current entry
    pub submit_key: char,
    /// Visible characters on the entry row; keys past it are ignored
    pub entry_columns: u8,
    /// Failed submits allowed before a lockout
    pub max_attempts: u8,
    /// Lockout length in whole seconds
    pub lockout_secs: u8,
    /// How long the lockout notice stays up before the countdown starts (ms)
    pub lockout_notice_ms: u32,
    /// Input pause after each accepted key (ms)
    pub key_pacing_ms: u32,
    /// How long the success message is held before the session ends (ms)
    pub unlock_hold_ms: u32,
}

impl Default for LockConfig {
    fn default() -> Self {
        let mut credential = String::new();
        let _ = credential.push_str(DEFAULT_CREDENTIAL);
        Self {
            credential,
            clear_key: '*',
            submit_key: '#',
            entry_columns: INPUT_CAPACITY as u8,
            max_attempts: 3,
            lockout_secs: 10,
            lockout_notice_ms: 1000,
            key_pacing_ms: 300,
            unlock_hold_ms: 300,
        }
    }
}

impl LockConfig {
    /// Default policy with a different credential
    pub fn with_credential(credential: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.set_credential(credential)?;
        Ok(config)
    }

    /// Replace the credential
    pub fn set_credential(&mut self, credential: &str) -> Result<(), ConfigError> {
        if credential.is_empty() {
            return Err(ConfigError::EmptyCredential);
        }
        let mut value = String::new();
        value
            .push_str(credential)
            .map_err(|_| ConfigError::CredentialTooLong)?;
        self.credential = value;
        Ok(())
    }

    /// Lockout duration in milliseconds
    pub fn lockout_ms(&self) -> u32 {
        u32::from(self.lockout_secs) * 1000
    }

    /// Check the policy against the keypad it will run on
    pub fn validate(&self, keymap: &KeyMap) -> Result<(), ConfigError> {
        if self.credential.is_empty() {
            return Err(ConfigError::EmptyCredential);
        }
        if self.entry_columns == 0 || usize::from(self.entry_columns) > INPUT_CAPACITY {
            return Err(ConfigError::InvalidEntryWidth);
        }
        if self.credential.chars().count() > usize::from(self.entry_columns) {
            return Err(ConfigError::CredentialTooWide);
        }
        if self.clear_key == self.submit_key {
            return Err(ConfigError::ConflictingKeys);
        }
        if !keymap.contains(self.clear_key) || !keymap.contains(self.submit_key) {
            return Err(ConfigError::ControlKeyMissing);
        }
        for ch in self.credential.chars() {
            if ch == self.clear_key || ch == self.submit_key {
                return Err(ConfigError::ReservedKeyInCredential);
            }
            if !keymap.contains(ch) {
                return Err(ConfigError::UnknownKey(ch));
            }
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.lockout_secs == 0 {
            return Err(ConfigError::NoLockout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_KEYMAP;

    #[test]
    fn test_default_is_valid() {
        let config = LockConfig::default();
        assert_eq!(config.credential.as_str(), "2586A");
        assert_eq!(config.lockout_ms(), 10_000);
        assert_eq!(config.validate(&DEFAULT_KEYMAP), Ok(()));
    }

    #[test]
    fn test_credential_length() {
        assert!(LockConfig::with_credential("1234567890ABCD12").is_ok());
        assert_eq!(
            LockConfig::with_credential("1234567890ABCD123"),
            Err(ConfigError::CredentialTooLong)
        );
        assert_eq!(
            LockConfig::with_credential(""),
            Err(ConfigError::EmptyCredential)
        );
    }

    #[test]
    fn test_entry_width() {
        let config = LockConfig {
            entry_columns: 8,
            ..LockConfig::default()
        };
        assert_eq!(config.validate(&DEFAULT_KEYMAP), Ok(()));

        let mut config = LockConfig::with_credential("123456789").unwrap();
        config.entry_columns = 8;
        assert_eq!(
            config.validate(&DEFAULT_KEYMAP),
            Err(ConfigError::CredentialTooWide)
        );

        for entry_columns in [0, 17] {
            let config = LockConfig {
                entry_columns,
                ..LockConfig::default()
            };
            assert_eq!(
                config.validate(&DEFAULT_KEYMAP),
                Err(ConfigError::InvalidEntryWidth)
            );
        }
    }

    #[test]
    fn test_reserved_keys_rejected() {
        let config = LockConfig::with_credential("12#4").unwrap();
        assert_eq!(
            config.validate(&DEFAULT_KEYMAP),
            Err(ConfigError::ReservedKeyInCredential)
        );

        let config = LockConfig {
            submit_key: '*',
            ..LockConfig::default()
        };
        assert_eq!(
            config.validate(&DEFAULT_KEYMAP),
            Err(ConfigError::ConflictingKeys)
        );
    }

    #[test]
    fn test_unknown_characters_rejected() {
        let config = LockConfig::with_credential("12E4").unwrap();
        assert_eq!(
            config.validate(&DEFAULT_KEYMAP),
            Err(ConfigError::UnknownKey('E'))
        );

        let config = LockConfig {
            clear_key: 'X',
            ..LockConfig::default()
        };
        assert_eq!(
            config.validate(&DEFAULT_KEYMAP),
            Err(ConfigError::ControlKeyMissing)
        );
    }

    #[test]
    fn test_zero_limits_rejected() {
        let config = LockConfig {
            max_attempts: 0,
            ..LockConfig::default()
        };
        assert_eq!(config.validate(&DEFAULT_KEYMAP), Err(ConfigError::NoAttempts));

        let config = LockConfig {
            lockout_secs: 0,
            ..LockConfig::default()
        };
        assert_eq!(config.validate(&DEFAULT_KEYMAP), Err(ConfigError::NoLockout));
    }
}
