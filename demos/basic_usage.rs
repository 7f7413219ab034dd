// Run `cargo run --example basic_usage` to execute this example
// Try it again with `MY_APP_LOG=debug` or `VT_ALL_LOG=error` set in the environment

use logician::configurators::{LoggerConfigurator, VtEnvListLoggerConfigurator};
use logician::level::LogLevel;
use logician::subscriber::{FmtLoggerConfigurator, Logger};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // `MY_APP_LOG` first, then the catch-all `VT_ALL_LOG`, then the sink's own level
    let mut configurator = VtEnvListLoggerConfigurator::<LogLevel, _>::new(
        vec!["MY_APP_LOG".to_string()],
        FmtLoggerConfigurator::new().with_level("INFO"),
    );

    // A sub-module honours the application's variables, but its own one wins
    let mut module_configurator = configurator.clone_with_envs(["MY_APP_DB_LOG"], false);

    let logger = configurator.configure(Logger::new("my_app"))?;
    println!("my_app logs at {}", logger.level());
    logger.in_scope(|| {
        tracing::info!("visible at the default INFO level");
        tracing::debug!("visible once MY_APP_LOG=debug is set");
    });

    let db_logger = module_configurator.configure(Logger::new("my_app.db"))?;
    println!("my_app.db logs at {}", db_logger.level());
    db_logger.in_scope(|| tracing::warn!("written to stderr"));

    Ok(())
}
