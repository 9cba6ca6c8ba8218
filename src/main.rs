use anyhow::Context;
use clap::Parser;
use page_fixture::utils::{logger, validation::Validate};
use page_fixture::{CliConfig, FileWriter, LocalStorage};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let result = config
        .validate()
        .and_then(|_| config.load())
        .and_then(|settings| FileWriter::from_config(LocalStorage::new(), &settings).write());

    match result {
        Ok(report) => {
            println!("{}", report.confirmation());
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());

            // Write failures surface as the underlying I/O error, exit status 1.
            if e.is_io() {
                return Err(e).context("failed to write fixture");
            }

            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
