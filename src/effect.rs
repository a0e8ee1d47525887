// Chunk: docs/chunks/reconfig_channel - Swappable configuration slot and reconfigure effect

//! The reconfiguration channel: a swappable configuration slot plus the
//! opaque descriptor that replaces its contents.
//!
//! Installing the overlay into an editor instance creates a [`ConfigSlot`].
//! An instance installed with an initial configuration gets a
//! *reconfigurable* slot; an instance installed without one runs on pure
//! defaults and ignores reconfiguration. Later, [`reconfigure`] builds a
//! [`Reconfigure`] descriptor from a new full configuration, and the host's
//! dispatch primitive submits it to a running instance, swapping the active
//! configuration without re-registering the extension.
//!
//! Submitting a descriptor to an instance whose slot was never installed is
//! a no-op, not an error: the caller broadcasting to every open editor does
//! not need to know which ones opted in.
//!
//! The slot's contents are replaced wholesale, never mutated, so readers
//! holding a snapshot stay consistent and the recompute controller can
//! detect the change by deep-value comparison on its next update cycle.

use linetail_config::Config;

/// Opaque change descriptor produced by [`reconfigure`].
///
/// Submitted to an editor instance through the host's dispatch primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconfigure {
    config: Config,
}

impl Reconfigure {
    /// The configuration this descriptor installs.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Builds a reconfiguration descriptor from a full configuration.
pub fn reconfigure(config: Config) -> Reconfigure {
    Reconfigure { config }
}

/// The per-instance configuration slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSlot {
    /// The active configuration. Defaults when no initial value was given.
    current: Config,
    /// Whether reconfiguration descriptors apply to this instance.
    reconfigurable: bool,
}

impl ConfigSlot {
    /// Installs the slot at instance construction.
    ///
    /// `Some(config)` yields a reconfigurable slot holding `config`; `None`
    /// yields a defaults-only slot that ignores descriptors.
    pub fn install(initial: Option<Config>) -> Self {
        match initial {
            Some(config) => Self {
                current: config,
                reconfigurable: true,
            },
            None => Self {
                current: Config::default(),
                reconfigurable: false,
            },
        }
    }

    /// The active configuration.
    pub fn current(&self) -> &Config {
        &self.current
    }

    /// Whether descriptors apply to this slot.
    pub fn is_reconfigurable(&self) -> bool {
        self.reconfigurable
    }

    /// Applies a descriptor, replacing the active configuration wholesale.
    ///
    /// Returns `true` if the slot accepted the descriptor, `false` for the
    /// defaults-only no-op case.
    pub fn apply(&mut self, effect: Reconfigure) -> bool {
        if !self.reconfigurable {
            return false;
        }
        self.current = effect.config;
        true
    }
}
