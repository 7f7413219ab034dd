use std::sync::Arc;

use logician::configurators::{
    HasUnderlyingConfigurator, LevelTarget, ListLoggerConfigurator, ListOverrides,
    LoggerConfigurator, PickupStrategy,
};
use logician::exceptions::{LogicianError, LogicianResult};
use logician::level::LogLevel;
use logician::subscriber::{FmtLoggerConfigurator, Logger};
use tracing::level_filters::LevelFilter;

fn levels(list: &[Option<&str>]) -> Vec<Option<LogLevel>> {
    list.iter().map(|l| l.map(LogLevel::from)).collect()
}

#[test]
fn test_none_level_list_fails_construction() {
    let result = ListLoggerConfigurator::<LogLevel, _>::new(None, FmtLoggerConfigurator::new());
    assert!(matches!(
        result,
        Err(LogicianError::PreconditionViolation(ref msg)) if msg == "Level list must not be None."
    ));
}

#[test]
fn test_first_present_level_configures_logger() -> LogicianResult<()> {
    let mut lc = ListLoggerConfigurator::new(
        Some(levels(&[None, None, Some("DEBUG"), Some("ERROR")])),
        FmtLoggerConfigurator::new(),
    )?;
    let logger = lc.configure(Logger::new("first_present"))?;

    assert_eq!(logger.level(), LevelFilter::DEBUG);
    assert_eq!(
        lc.underlying_configurator().level(),
        &LogLevel::from("DEBUG")
    );
    Ok(())
}

#[test]
fn test_all_absent_leaves_underlying_level_untouched() -> LogicianResult<()> {
    let sink = FmtLoggerConfigurator::new().with_level("INFO");

    let mut lc = ListLoggerConfigurator::new(Some(levels(&[None, None])), sink.clone())?;
    let logger = lc.configure(Logger::new("all_absent"))?;
    assert_eq!(logger.level(), LevelFilter::INFO);
    assert_eq!(lc.underlying_configurator().level(), &LogLevel::from("INFO"));

    let mut empty = ListLoggerConfigurator::new(Some(Vec::new()), sink)?;
    let logger = empty.configure(Logger::new("empty"))?;
    assert_eq!(logger.level(), LevelFilter::INFO);
    Ok(())
}

#[test]
fn test_custom_pickup_strategy() -> LogicianResult<()> {
    // Picks the most verbose present level instead of the first one.
    let most_verbose: PickupStrategy<LogLevel> = Arc::new(|candidates: &[Option<LogLevel>]| {
        candidates
            .iter()
            .flatten()
            .max_by_key(|level| level.to_filter())
            .cloned()
    });
    let mut lc = ListLoggerConfigurator::with_strategy(
        Some(levels(&[Some("ERROR"), None, Some("TRACE"), Some("INFO")])),
        FmtLoggerConfigurator::new(),
        most_verbose,
    )?;
    let logger = lc.configure(Logger::new("custom_strategy"))?;
    assert_eq!(logger.level(), LevelFilter::TRACE);
    Ok(())
}

#[test]
fn test_clone_with_without_overrides_copies() -> LogicianResult<()> {
    let original = ListLoggerConfigurator::new(
        Some(levels(&[None, Some("WARNING")])),
        FmtLoggerConfigurator::new(),
    )?;
    let clone = original.clone_with(ListOverrides::default());

    assert_eq!(clone.level_list(), original.level_list());
    assert_eq!(
        clone.underlying_configurator(),
        original.underlying_configurator()
    );
    assert!(Arc::ptr_eq(
        clone.level_pickup_strategy(),
        original.level_pickup_strategy()
    ));
    assert_ne!(clone.level_list().as_ptr(), original.level_list().as_ptr());
    Ok(())
}

#[test]
fn test_clone_with_overrides_leave_original_unchanged() -> LogicianResult<()> {
    let mut original = ListLoggerConfigurator::new(
        Some(levels(&[Some("ERROR")])),
        FmtLoggerConfigurator::new(),
    )?;
    let mut clone = original.clone_with(
        ListOverrides::default()
            .level_list(levels(&[Some("TRACE")]))
            .configurator(FmtLoggerConfigurator::new().with_line_number(true)),
    );

    assert_eq!(
        clone.configure(Logger::new("clone"))?.level(),
        LevelFilter::TRACE
    );
    assert_eq!(original.level_list(), levels(&[Some("ERROR")]).as_slice());
    assert_eq!(
        original.configure(Logger::new("original"))?.level(),
        LevelFilter::ERROR
    );
    // the clone's sink got the clone's level, the original's sink kept its own
    assert_eq!(clone.underlying_configurator().level(), &LogLevel::from("TRACE"));
    assert_eq!(original.underlying_configurator().level(), &LogLevel::from("ERROR"));
    Ok(())
}

#[test]
fn test_configuring_the_clone_does_not_touch_the_original_sink() -> LogicianResult<()> {
    let original = ListLoggerConfigurator::new(
        Some(levels(&[Some("DEBUG")])),
        FmtLoggerConfigurator::new(),
    )?;
    let mut clone = original.clone_with(ListOverrides::default());
    clone.configure(Logger::new("clone"))?;

    assert_eq!(clone.underlying_configurator().level(), &LogLevel::from("DEBUG"));
    assert_eq!(original.underlying_configurator().level(), &LogLevel::from("WARN"));
    Ok(())
}

#[test]
fn test_mutating_the_sink_through_the_decorator() -> LogicianResult<()> {
    let mut lc = ListLoggerConfigurator::new(
        Some(levels(&[None, None])),
        FmtLoggerConfigurator::new(),
    )?;
    assert_eq!(lc.configure(Logger::new("before"))?.level(), LevelFilter::WARN);

    let old = lc.underlying_configurator_mut().set_level(LogLevel::from("TRACE"));
    assert_eq!(old, LogLevel::from("WARN"));
    assert_eq!(lc.configure(Logger::new("after"))?.level(), LevelFilter::TRACE);
    Ok(())
}
