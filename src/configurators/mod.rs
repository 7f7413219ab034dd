//! ## Logger Configurators
//!
//! This module provides the contracts shared by every configurator, plus the decorators that
//! resolve a log level from prioritized sources before handing a logger to the configurator they
//! wrap.
//!
//! ### Overview
//!
//! - [`LevelTarget`] lets a level be read and replaced from the outside.
//! - [`LoggerConfigurator`] turns a logger handle into a configured logger, and clones itself with
//!   overrides.
//! - [`HasUnderlyingConfigurator`] exposes the configurator a decorator wraps.
//! - [`SupplierLoggerConfigurator`], [`ListLoggerConfigurator`], [`EnvListLoggerConfigurator`] and
//!   [`VtEnvListLoggerConfigurator`] are the decorators. Each one owns exactly one inner
//!   configurator, pushes the level it resolved into it, and delegates the rest.
//!
//! ### Example
//!
//! ```rust
//! use logician::configurators::{LoggerConfigurator, VtEnvListLoggerConfigurator};
//! use logician::level::LogLevel;
//! use logician::subscriber::{FmtLoggerConfigurator, Logger};
//!
//! let mut configurator = VtEnvListLoggerConfigurator::<LogLevel, _>::new(
//!     vec!["MY_APP_LOG".to_string()],
//!     FmtLoggerConfigurator::new(),
//! );
//! let logger = configurator.configure(Logger::new("my_app")).unwrap();
//! logger.in_scope(|| tracing::warn!("configured"));
//! ```

pub mod env;
pub mod list;
pub mod supplier;

pub use env::{
    EnvListLC, EnvListLoggerConfigurator, EnvListOverrides, VTEnvListLC,
    VtEnvListLoggerConfigurator,
};
pub use list::{ListLoggerConfigurator, ListOverrides};
pub use supplier::{LevelSupplier, SupplierLoggerConfigurator, SupplierOverrides};

use crate::exceptions::LogicianResult;
use std::sync::Arc;

/// Permits levels to be read and set from outside of the implementor.
pub trait LevelTarget<T> {
    /// Current level.
    fn level(&self) -> &T;

    /// Replaces the current level and returns the old one.
    fn set_level(&mut self, new_level: T) -> T;
}

/// Stores the configuration needed to configure a logger.
pub trait LoggerConfigurator {
    /// The logger handle accepted by [`LoggerConfigurator::configure`].
    type Logger;
    /// The configured logger handed back to the caller.
    type Configured;
    /// One optional field per constructor parameter, see [`LoggerConfigurator::clone_with`].
    type Overrides: Default;

    /// Configures `logger` and returns the configured logger.
    ///
    /// Calling this twice with the same inputs yields the same observable logger state.
    fn configure(&mut self, logger: Self::Logger) -> LogicianResult<Self::Configured>;

    /// Returns a new configurator where every field set in `overrides` replaces the value held by
    /// `self`. Fields left unset are copied, so `self` is never affected by later changes to the
    /// clone.
    fn clone_with(&self, overrides: Self::Overrides) -> Self
    where
        Self: Sized;
}

/// A configurator that decorates another configurator.
pub trait HasUnderlyingConfigurator {
    type Underlying: LoggerConfigurator;

    fn underlying_configurator(&self) -> &Self::Underlying;

    fn underlying_configurator_mut(&mut self) -> &mut Self::Underlying;
}

/// A logger configurator whose level can be set from outside of it.
///
/// Implemented for every type that is both a [`LevelTarget`] and a [`LoggerConfigurator`].
pub trait LevelLoggerConfigurator<T>: LevelTarget<T> + LoggerConfigurator {}

impl<T, C> LevelLoggerConfigurator<T> for C where C: LevelTarget<T> + LoggerConfigurator {}

/// Picks one level out of an ordered list of candidates (index 0 has the highest precedence).
pub type PickupStrategy<T> = Arc<dyn Fn(&[Option<T>]) -> Option<T> + Send + Sync>;

/// Returns the first candidate that is present, or `None` if every candidate is absent.
///
/// # Example
///
/// ```rust
/// use logician::configurators::first_non_none;
///
/// assert_eq!(first_non_none(&[None, None, Some("X"), Some("Y")]), Some("X"));
/// assert_eq!(first_non_none::<&str>(&[None, None]), None);
/// ```
pub fn first_non_none<T: Clone>(levels: &[Option<T>]) -> Option<T> {
    levels.iter().flatten().next().cloned()
}

/// The default [`PickupStrategy`]: [`first_non_none`].
pub fn default_pickup_strategy<T: Clone + 'static>() -> PickupStrategy<T> {
    Arc::new(first_non_none::<T>)
}

/// Applies the level picked from `levels` to `configurator`, then lets it configure `logger`.
///
/// When the strategy finds no level the configurator keeps the level it already had.
pub(crate) fn configure_from_candidates<T, C>(
    levels: &[Option<T>],
    strategy: &PickupStrategy<T>,
    configurator: &mut C,
    logger: C::Logger,
) -> LogicianResult<C::Configured>
where
    C: LevelLoggerConfigurator<T>,
{
    match strategy(levels) {
        Some(level) => {
            tracing::debug!(candidates = levels.len(), "level resolved from candidates");
            configurator.set_level(level);
        }
        None => {
            tracing::debug!(
                candidates = levels.len(),
                "no candidate level present, keeping the current level"
            );
        }
    }
    configurator.configure(logger)
}
