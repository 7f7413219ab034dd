//! ## List logger configurator
//!
//! Picks a level out of an ordered list of optional levels and applies it to the configurator
//! underneath before delegating to it.

use super::{
    configure_from_candidates, default_pickup_strategy, HasUnderlyingConfigurator,
    LevelLoggerConfigurator, LoggerConfigurator, PickupStrategy,
};
use crate::exceptions::{LogicianError, LogicianResult};
use std::fmt;

/// Picks up the first present level from `level_list` (by default) to configure the logger
/// underneath.
///
/// The list is a snapshot taken at construction: earlier entries take precedence over later ones.
/// If nothing can be picked, the underlying configurator keeps its current level.
pub struct ListLoggerConfigurator<T, C> {
    level_list: Vec<Option<T>>,
    configurator: C,
    level_pickup_strategy: PickupStrategy<T>,
}

impl<T, C> ListLoggerConfigurator<T, C>
where
    T: Clone + 'static,
    C: LevelLoggerConfigurator<T>,
{
    /// Creates a configurator using the default first-present pickup strategy.
    ///
    /// # Arguments
    ///
    /// * `level_list` - Candidate levels, highest precedence first. May be empty, must not be `None`.
    /// * `configurator` - The configurator decorated by this one.
    ///
    /// # Returns
    ///
    /// * `LogicianResult<Self>` - A `PreconditionViolation` error if `level_list` is `None`.
    pub fn new(level_list: Option<Vec<Option<T>>>, configurator: C) -> LogicianResult<Self> {
        Self::with_strategy(level_list, configurator, default_pickup_strategy())
    }

    /// Creates a configurator that picks its level with `level_pickup_strategy`.
    pub fn with_strategy(
        level_list: Option<Vec<Option<T>>>,
        configurator: C,
        level_pickup_strategy: PickupStrategy<T>,
    ) -> LogicianResult<Self> {
        let level_list = level_list.ok_or_else(|| {
            LogicianError::PreconditionViolation("Level list must not be None.".to_string())
        })?;
        Ok(Self {
            level_list,
            configurator,
            level_pickup_strategy,
        })
    }

    /// Candidate levels, highest precedence first.
    pub fn level_list(&self) -> &[Option<T>] {
        &self.level_list
    }

    pub fn level_pickup_strategy(&self) -> &PickupStrategy<T> {
        &self.level_pickup_strategy
    }
}

impl<T, C> LoggerConfigurator for ListLoggerConfigurator<T, C>
where
    T: Clone + 'static,
    C: LevelLoggerConfigurator<T> + Clone,
{
    type Logger = C::Logger;
    type Configured = C::Configured;
    type Overrides = ListOverrides<T, C>;

    fn configure(&mut self, logger: Self::Logger) -> LogicianResult<Self::Configured> {
        configure_from_candidates(
            &self.level_list,
            &self.level_pickup_strategy,
            &mut self.configurator,
            logger,
        )
    }

    fn clone_with(&self, overrides: Self::Overrides) -> Self {
        Self {
            level_list: overrides
                .level_list
                .unwrap_or_else(|| self.level_list.clone()),
            configurator: overrides
                .configurator
                .unwrap_or_else(|| self.configurator.clone()),
            level_pickup_strategy: overrides
                .level_pickup_strategy
                .unwrap_or_else(|| self.level_pickup_strategy.clone()),
        }
    }
}

impl<T, C> HasUnderlyingConfigurator for ListLoggerConfigurator<T, C>
where
    T: Clone + 'static,
    C: LevelLoggerConfigurator<T> + Clone,
{
    type Underlying = C;

    fn underlying_configurator(&self) -> &C {
        &self.configurator
    }

    fn underlying_configurator_mut(&mut self) -> &mut C {
        &mut self.configurator
    }
}

impl<T: Clone, C: Clone> Clone for ListLoggerConfigurator<T, C> {
    fn clone(&self) -> Self {
        Self {
            level_list: self.level_list.clone(),
            configurator: self.configurator.clone(),
            level_pickup_strategy: self.level_pickup_strategy.clone(),
        }
    }
}

impl<T: fmt::Debug, C: fmt::Debug> fmt::Debug for ListLoggerConfigurator<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListLoggerConfigurator")
            .field("level_list", &self.level_list)
            .field("configurator", &self.configurator)
            .finish_non_exhaustive()
    }
}

/// Overrides accepted by [`ListLoggerConfigurator`]'s `clone_with`.
pub struct ListOverrides<T, C> {
    pub level_list: Option<Vec<Option<T>>>,
    pub configurator: Option<C>,
    pub level_pickup_strategy: Option<PickupStrategy<T>>,
}

impl<T, C> Default for ListOverrides<T, C> {
    fn default() -> Self {
        Self {
            level_list: None,
            configurator: None,
            level_pickup_strategy: None,
        }
    }
}

impl<T, C> ListOverrides<T, C> {
    pub fn level_list(mut self, level_list: Vec<Option<T>>) -> Self {
        self.level_list = Some(level_list);
        self
    }

    pub fn configurator(mut self, configurator: C) -> Self {
        self.configurator = Some(configurator);
        self
    }

    pub fn level_pickup_strategy(mut self, strategy: PickupStrategy<T>) -> Self {
        self.level_pickup_strategy = Some(strategy);
        self
    }
}
