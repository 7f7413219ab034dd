//! ## Environment variable logger configurators
//!
//! These configurators read their candidate levels from environment variables. The variables are
//! looked up again on every `configure` call, so changing the environment between two calls changes
//! the level that gets applied, without rebuilding the configurator.
//!
//! - [`EnvListLoggerConfigurator`] consults exactly the variables it was given, first one first.
//! - [`VtEnvListLoggerConfigurator`] always consults the catch-all `VT_ALL_LOG` variable last.

use super::{
    configure_from_candidates, default_pickup_strategy, HasUnderlyingConfigurator,
    LevelLoggerConfigurator, LoggerConfigurator, PickupStrategy,
};
use crate::exceptions::LogicianResult;
use crate::settings::VT_ALL_LOG_ENV_VAR;
use std::fmt;

/// Shorthand for [`EnvListLoggerConfigurator`].
pub type EnvListLC<T, C> = EnvListLoggerConfigurator<T, C>;

/// Shorthand for [`VtEnvListLoggerConfigurator`].
#[allow(clippy::upper_case_acronyms)]
pub type VTEnvListLC<T, C> = VtEnvListLoggerConfigurator<T, C>;

/// Configures the log level from a list of environment variables.
///
/// The first variable that is set wins; precedence decreases down the list. A variable set to an
/// empty string counts as set, and so does one holding invalid unicode: its value is read lossily
/// and left for the configurator underneath to reject.
pub struct EnvListLoggerConfigurator<T, C> {
    env_list: Vec<String>,
    configurator: C,
    level_pickup_strategy: PickupStrategy<T>,
}

impl<T, C> EnvListLoggerConfigurator<T, C>
where
    T: From<String> + Clone + 'static,
    C: LevelLoggerConfigurator<T>,
{
    /// Creates a configurator using the default first-present pickup strategy.
    ///
    /// # Arguments
    ///
    /// * `env_list` - Environment variable names, highest precedence first.
    /// * `configurator` - The configurator decorated by this one.
    pub fn new(env_list: Vec<String>, configurator: C) -> Self {
        Self::with_strategy(env_list, configurator, default_pickup_strategy())
    }

    pub fn with_strategy(
        env_list: Vec<String>,
        configurator: C,
        level_pickup_strategy: PickupStrategy<T>,
    ) -> Self {
        Self {
            env_list,
            configurator,
            level_pickup_strategy,
        }
    }

    /// Environment variable names, highest precedence first.
    pub fn env_list(&self) -> &[String] {
        &self.env_list
    }

    pub fn level_pickup_strategy(&self) -> &PickupStrategy<T> {
        &self.level_pickup_strategy
    }

    /// Current values of the variables in [`Self::env_list`], in the same order.
    pub fn level_list(&self) -> Vec<Option<T>> {
        self.env_list
            .iter()
            .map(|name| {
                std::env::var_os(name).map(|v| T::from(v.to_string_lossy().into_owned()))
            })
            .collect()
    }
}

impl<T, C> EnvListLoggerConfigurator<T, C>
where
    T: From<String> + Clone + 'static,
    C: LevelLoggerConfigurator<T> + Clone,
{
    /// Clones this configurator with extra environment variables.
    ///
    /// Useful when a module wants to honour the variables of a parent configurator and add its
    /// own. By default the new variables are prepended and so take precedence over the existing
    /// ones; with `low_precedence` they are appended instead. The order of `envs` is kept either
    /// way, and `self` is not modified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use logician::configurators::EnvListLoggerConfigurator;
    /// use logician::level::LogLevel;
    /// use logician::subscriber::FmtLoggerConfigurator;
    ///
    /// let ppp = EnvListLoggerConfigurator::<LogLevel, _>::new(
    ///     vec!["ENV_PPP".to_string()],
    ///     FmtLoggerConfigurator::new(),
    /// );
    /// let som = ppp.clone_with_envs(["SUMO", "ENV_PPP.SOM"], false);
    /// assert_eq!(som.env_list(), ["SUMO", "ENV_PPP.SOM", "ENV_PPP"]);
    ///
    /// let som = ppp.clone_with_envs(["SUMO", "ENV_PPP.SOM"], true);
    /// assert_eq!(som.env_list(), ["ENV_PPP", "SUMO", "ENV_PPP.SOM"]);
    /// assert_eq!(ppp.env_list(), ["ENV_PPP"]);
    /// ```
    pub fn clone_with_envs<I, S>(&self, envs: I, low_precedence: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let env_list = merge_env_list(&self.env_list, envs, low_precedence);
        self.clone_with(EnvListOverrides::default().env_list(env_list))
    }
}

fn merge_env_list<I, S>(current: &[String], envs: I, low_precedence: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let envs = envs.into_iter().map(Into::into);
    if low_precedence {
        current.iter().cloned().chain(envs).collect()
    } else {
        envs.chain(current.iter().cloned()).collect()
    }
}

impl<T, C> LoggerConfigurator for EnvListLoggerConfigurator<T, C>
where
    T: From<String> + Clone + 'static,
    C: LevelLoggerConfigurator<T> + Clone,
{
    type Logger = C::Logger;
    type Configured = C::Configured;
    type Overrides = EnvListOverrides<T, C>;

    fn configure(&mut self, logger: Self::Logger) -> LogicianResult<Self::Configured> {
        let level_list = self.level_list();
        tracing::debug!(env_list = ?self.env_list, "reading levels from environment");
        configure_from_candidates(
            &level_list,
            &self.level_pickup_strategy,
            &mut self.configurator,
            logger,
        )
    }

    fn clone_with(&self, overrides: Self::Overrides) -> Self {
        Self {
            env_list: overrides
                .env_list
                .unwrap_or_else(|| self.env_list.clone()),
            configurator: overrides
                .configurator
                .unwrap_or_else(|| self.configurator.clone()),
            level_pickup_strategy: overrides
                .level_pickup_strategy
                .unwrap_or_else(|| self.level_pickup_strategy.clone()),
        }
    }
}

impl<T, C> HasUnderlyingConfigurator for EnvListLoggerConfigurator<T, C>
where
    T: From<String> + Clone + 'static,
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

impl<T, C: Clone> Clone for EnvListLoggerConfigurator<T, C> {
    fn clone(&self) -> Self {
        Self {
            env_list: self.env_list.clone(),
            configurator: self.configurator.clone(),
            level_pickup_strategy: self.level_pickup_strategy.clone(),
        }
    }
}

impl<T, C: fmt::Debug> fmt::Debug for EnvListLoggerConfigurator<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvListLoggerConfigurator")
            .field("env_list", &self.env_list)
            .field("configurator", &self.configurator)
            .finish_non_exhaustive()
    }
}

/// Overrides accepted by the `clone_with` of the environment variable configurators.
pub struct EnvListOverrides<T, C> {
    pub env_list: Option<Vec<String>>,
    pub configurator: Option<C>,
    pub level_pickup_strategy: Option<PickupStrategy<T>>,
}

impl<T, C> Default for EnvListOverrides<T, C> {
    fn default() -> Self {
        Self {
            env_list: None,
            configurator: None,
            level_pickup_strategy: None,
        }
    }
}

impl<T, C> EnvListOverrides<T, C> {
    pub fn env_list<S: Into<String>>(mut self, env_list: impl IntoIterator<Item = S>) -> Self {
        self.env_list = Some(env_list.into_iter().map(Into::into).collect());
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

/// Configures the log level from a list of environment variables, always falling back to a
/// catch-all variable (`VT_ALL_LOG` unless told otherwise).
///
/// The catch-all variable is appended once, when the configurator is built, so at least one
/// variable is consulted even for an empty `env_list`. It stays the last entry through
/// [`Self::clone_with_envs`]; only an explicit `env_list` override in `clone_with` removes it.
pub struct VtEnvListLoggerConfigurator<T, C> {
    inner: EnvListLoggerConfigurator<T, C>,
    all_log_env_var: String,
}

impl<T, C> VtEnvListLoggerConfigurator<T, C>
where
    T: From<String> + Clone + 'static,
    C: LevelLoggerConfigurator<T>,
{
    pub fn new(env_list: Vec<String>, configurator: C) -> Self {
        Self::with_strategy(env_list, configurator, default_pickup_strategy())
    }

    pub fn with_strategy(
        env_list: Vec<String>,
        configurator: C,
        level_pickup_strategy: PickupStrategy<T>,
    ) -> Self {
        Self::with_all_log_env_var(
            env_list,
            configurator,
            level_pickup_strategy,
            VT_ALL_LOG_ENV_VAR,
        )
    }

    /// Like [`Self::with_strategy`], with `all_log_env_var` as the catch-all variable.
    pub fn with_all_log_env_var(
        mut env_list: Vec<String>,
        configurator: C,
        level_pickup_strategy: PickupStrategy<T>,
        all_log_env_var: impl Into<String>,
    ) -> Self {
        let all_log_env_var = all_log_env_var.into();
        env_list.push(all_log_env_var.clone());
        Self {
            inner: EnvListLoggerConfigurator::with_strategy(
                env_list,
                configurator,
                level_pickup_strategy,
            ),
            all_log_env_var,
        }
    }

    pub fn env_list(&self) -> &[String] {
        self.inner.env_list()
    }

    pub fn all_log_env_var(&self) -> &str {
        &self.all_log_env_var
    }

    pub fn level_pickup_strategy(&self) -> &PickupStrategy<T> {
        self.inner.level_pickup_strategy()
    }

    pub fn level_list(&self) -> Vec<Option<T>> {
        self.inner.level_list()
    }
}

impl<T, C> VtEnvListLoggerConfigurator<T, C>
where
    T: From<String> + Clone + 'static,
    C: LevelLoggerConfigurator<T> + Clone,
{
    /// Clones this configurator with extra environment variables.
    ///
    /// Same as [`EnvListLoggerConfigurator::clone_with_envs`], except that low precedence variables
    /// are inserted ahead of the catch-all variable, which stays last.
    ///
    /// # Example
    ///
    /// ```rust
    /// use logician::configurators::VtEnvListLoggerConfigurator;
    /// use logician::level::LogLevel;
    /// use logician::subscriber::FmtLoggerConfigurator;
    ///
    /// let base = VtEnvListLoggerConfigurator::<LogLevel, _>::new(
    ///     vec!["ENV_PPP".to_string()],
    ///     FmtLoggerConfigurator::new(),
    /// );
    /// assert_eq!(base.env_list(), ["ENV_PPP", "VT_ALL_LOG"]);
    ///
    /// let som = base.clone_with_envs(["ENV_PPP.SOM"], true);
    /// assert_eq!(som.env_list(), ["ENV_PPP", "ENV_PPP.SOM", "VT_ALL_LOG"]);
    /// ```
    pub fn clone_with_envs<I, S>(&self, envs: I, low_precedence: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let current = self.inner.env_list();
        let env_list = match current.split_last() {
            Some((tail, head)) if low_precedence && *tail == self.all_log_env_var => {
                let mut env_list = merge_env_list(head, envs, true);
                env_list.push(tail.clone());
                env_list
            }
            _ => merge_env_list(current, envs, low_precedence),
        };
        self.clone_with(EnvListOverrides::default().env_list(env_list))
    }
}

impl<T, C> LoggerConfigurator for VtEnvListLoggerConfigurator<T, C>
where
    T: From<String> + Clone + 'static,
    C: LevelLoggerConfigurator<T> + Clone,
{
    type Logger = C::Logger;
    type Configured = C::Configured;
    type Overrides = EnvListOverrides<T, C>;

    fn configure(&mut self, logger: Self::Logger) -> LogicianResult<Self::Configured> {
        self.inner.configure(logger)
    }

    /// An `env_list` override is used verbatim; the catch-all variable is not appended to it.
    fn clone_with(&self, overrides: Self::Overrides) -> Self {
        Self {
            inner: self.inner.clone_with(overrides),
            all_log_env_var: self.all_log_env_var.clone(),
        }
    }
}

impl<T, C> HasUnderlyingConfigurator for VtEnvListLoggerConfigurator<T, C>
where
    T: From<String> + Clone + 'static,
    C: LevelLoggerConfigurator<T> + Clone,
{
    type Underlying = C;

    fn underlying_configurator(&self) -> &C {
        self.inner.underlying_configurator()
    }

    fn underlying_configurator_mut(&mut self) -> &mut C {
        self.inner.underlying_configurator_mut()
    }
}

impl<T, C: Clone> Clone for VtEnvListLoggerConfigurator<T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            all_log_env_var: self.all_log_env_var.clone(),
        }
    }
}

impl<T, C: fmt::Debug> fmt::Debug for VtEnvListLoggerConfigurator<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VtEnvListLoggerConfigurator")
            .field("env_list", &self.inner.env_list)
            .field("configurator", &self.inner.configurator)
            .field("all_log_env_var", &self.all_log_env_var)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_env_list_high_precedence() {
        let current = names(&["ENV_PPP"]);
        assert_eq!(
            merge_env_list(&current, ["SUMO", "ENV_PPP.SOM"], false),
            names(&["SUMO", "ENV_PPP.SOM", "ENV_PPP"])
        );
    }

    #[test]
    fn test_merge_env_list_low_precedence() {
        let current = names(&["ENV_PPP"]);
        assert_eq!(
            merge_env_list(&current, ["SUMO", "ENV_PPP.SOM"], true),
            names(&["ENV_PPP", "SUMO", "ENV_PPP.SOM"])
        );
    }

    #[test]
    fn test_merge_env_list_nothing_added() {
        let current = names(&["E1", "E2"]);
        assert_eq!(merge_env_list(&current, Vec::<String>::new(), false), current);
        assert_eq!(merge_env_list(&current, Vec::<String>::new(), true), current);
    }
}
