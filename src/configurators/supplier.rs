//! ## Supplier logger configurator
//!
//! Configures loggers with whatever level a supplier function hands out at `configure` time.

use super::{HasUnderlyingConfigurator, LevelLoggerConfigurator, LoggerConfigurator};
use crate::exceptions::LogicianResult;
use std::fmt;
use std::sync::Arc;

/// A zero-argument function producing a level.
pub type LevelSupplier<T> = Arc<dyn Fn() -> LogicianResult<T> + Send + Sync>;

/// Configurator that configures loggers as per the level supplied by `level_supplier`.
///
/// The supplier runs on every `configure` call. If it fails, the error is returned as is and the
/// underlying configurator is left untouched.
pub struct SupplierLoggerConfigurator<T, C> {
    level_supplier: LevelSupplier<T>,
    configurator: C,
}

impl<T, C> SupplierLoggerConfigurator<T, C>
where
    C: LevelLoggerConfigurator<T>,
{
    pub fn new(level_supplier: LevelSupplier<T>, configurator: C) -> Self {
        Self {
            level_supplier,
            configurator,
        }
    }

    /// Wraps an infallible supplier.
    pub fn from_fn<F>(supplier: F, configurator: C) -> Self
    where
        T: 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::new(Arc::new(move || Ok(supplier())), configurator)
    }

    pub fn level_supplier(&self) -> &LevelSupplier<T> {
        &self.level_supplier
    }
}

impl<T, C> LoggerConfigurator for SupplierLoggerConfigurator<T, C>
where
    C: LevelLoggerConfigurator<T> + Clone,
{
    type Logger = C::Logger;
    type Configured = C::Configured;
    type Overrides = SupplierOverrides<T, C>;

    fn configure(&mut self, logger: Self::Logger) -> LogicianResult<Self::Configured> {
        let final_level = (self.level_supplier)()?;
        self.configurator.set_level(final_level);
        self.configurator.configure(logger)
    }

    fn clone_with(&self, overrides: Self::Overrides) -> Self {
        Self {
            level_supplier: overrides
                .level_supplier
                .unwrap_or_else(|| self.level_supplier.clone()),
            configurator: overrides
                .configurator
                .unwrap_or_else(|| self.configurator.clone()),
        }
    }
}

impl<T, C> HasUnderlyingConfigurator for SupplierLoggerConfigurator<T, C>
where
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

impl<T, C: Clone> Clone for SupplierLoggerConfigurator<T, C> {
    fn clone(&self) -> Self {
        Self {
            level_supplier: self.level_supplier.clone(),
            configurator: self.configurator.clone(),
        }
    }
}

impl<T, C: fmt::Debug> fmt::Debug for SupplierLoggerConfigurator<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupplierLoggerConfigurator")
            .field("configurator", &self.configurator)
            .finish_non_exhaustive()
    }
}

/// Overrides accepted by [`SupplierLoggerConfigurator`]'s `clone_with`.
pub struct SupplierOverrides<T, C> {
    pub level_supplier: Option<LevelSupplier<T>>,
    pub configurator: Option<C>,
}

impl<T, C> Default for SupplierOverrides<T, C> {
    fn default() -> Self {
        Self {
            level_supplier: None,
            configurator: None,
        }
    }
}

impl<T, C> SupplierOverrides<T, C> {
    pub fn level_supplier(mut self, level_supplier: LevelSupplier<T>) -> Self {
        self.level_supplier = Some(level_supplier);
        self
    }

    pub fn configurator(mut self, configurator: C) -> Self {
        self.configurator = Some(configurator);
        self
    }
}
