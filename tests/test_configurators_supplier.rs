use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use logician::configurators::{
    HasUnderlyingConfigurator, LevelSupplier, LevelTarget, LoggerConfigurator,
    SupplierLoggerConfigurator, SupplierOverrides,
};
use logician::exceptions::{LogicianError, LogicianResult};
use logician::level::LogLevel;
use logician::subscriber::{FmtLoggerConfigurator, LogStream, Logger};
use tracing::level_filters::LevelFilter;

#[test]
fn test_supplied_level_is_applied() -> LogicianResult<()> {
    let mut lc = SupplierLoggerConfigurator::from_fn(
        || LogLevel::from("INFO"),
        FmtLoggerConfigurator::new(),
    );
    let logger = lc.configure(Logger::new("supplied"))?;
    assert_eq!(logger.level(), LevelFilter::INFO);
    assert_eq!(lc.underlying_configurator().level(), &LogLevel::from("INFO"));
    Ok(())
}

#[test]
fn test_supplier_runs_on_every_configure() -> LogicianResult<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let supplier: LevelSupplier<LogLevel> = Arc::new(move || {
        let call = counter.fetch_add(1, Ordering::SeqCst);
        Ok(LogLevel::from(if call == 0 { "ERROR" } else { "DEBUG" }))
    });
    let mut lc = SupplierLoggerConfigurator::new(supplier, FmtLoggerConfigurator::new());

    assert_eq!(lc.configure(Logger::new("first"))?.level(), LevelFilter::ERROR);
    assert_eq!(lc.configure(Logger::new("second"))?.level(), LevelFilter::DEBUG);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[test]
fn test_supplier_error_propagates_unmodified() {
    let supplier: LevelSupplier<LogLevel> =
        Arc::new(|| Err(LogicianError::LevelSupply("no level today".into())));
    let mut lc = SupplierLoggerConfigurator::new(
        supplier,
        FmtLoggerConfigurator::new().with_level("TRACE"),
    );

    let err = lc.configure(Logger::new("failing")).unwrap_err();
    assert!(matches!(err, LogicianError::LevelSupply(ref msg) if msg == "no level today"));
    // the sink never saw a new level
    assert_eq!(lc.underlying_configurator().level(), &LogLevel::from("TRACE"));
}

#[test]
fn test_supplier_clone_with() -> LogicianResult<()> {
    let original = SupplierLoggerConfigurator::from_fn(
        || LogLevel::from("ERROR"),
        FmtLoggerConfigurator::new(),
    );

    let mut same = original.clone_with(SupplierOverrides::default());
    assert!(Arc::ptr_eq(same.level_supplier(), original.level_supplier()));
    assert_eq!(same.configure(Logger::new("same"))?.level(), LevelFilter::ERROR);

    let trace: LevelSupplier<LogLevel> = Arc::new(|| Ok(LogLevel::from("TRACE")));
    let mut other = original.clone_with(SupplierOverrides::default().level_supplier(trace));
    assert_eq!(other.configure(Logger::new("other"))?.level(), LevelFilter::TRACE);

    // configuring the clones never reaches the original's sink
    assert_eq!(original.underlying_configurator().level(), &LogLevel::from("WARN"));
    Ok(())
}

#[test]
fn test_replacing_the_sink_through_the_decorator() -> LogicianResult<()> {
    let mut lc = SupplierLoggerConfigurator::from_fn(
        || LogLevel::from("DEBUG"),
        FmtLoggerConfigurator::new(),
    );
    *lc.underlying_configurator_mut() =
        FmtLoggerConfigurator::new().with_streams(Vec::<LogStream>::new());
    assert!(lc.underlying_configurator().streams().is_empty());
    assert_eq!(lc.configure(Logger::new("replaced"))?.level(), LevelFilter::DEBUG);
    Ok(())
}
