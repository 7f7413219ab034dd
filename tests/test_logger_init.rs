// Installing a global default is a one-shot operation per process, so it lives in its own test
// binary.

use logician::configurators::{LoggerConfigurator, VtEnvListLoggerConfigurator};
use logician::exceptions::LogicianError;
use logician::level::LogLevel;
use logician::subscriber::{FmtLoggerConfigurator, Logger};

#[test]
fn test_init_installs_global_default_only_once() {
    let mut lc = VtEnvListLoggerConfigurator::<LogLevel, _>::with_all_log_env_var(
        vec!["LOGICIAN_TEST_INIT_APP".to_string()],
        FmtLoggerConfigurator::new().with_ansi(false),
        logician::configurators::default_pickup_strategy(),
        "LOGICIAN_TEST_INIT_ALL",
    );

    let first = lc.configure(Logger::new("init")).unwrap();
    let second = lc.configure(Logger::new("init")).unwrap();

    first.init().unwrap();
    tracing::warn!("global default installed");

    let err = second.init().unwrap_err();
    assert!(matches!(err, LogicianError::GlobalDefaultSubscriber(_)));
}
