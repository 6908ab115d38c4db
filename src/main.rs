use clap::Parser;
use fivecolor_rust::{classifier, cli, config, corrector, error};

use cli::{Cli, Commands};
use config::{AssignConfig, VerifyConfig};
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assign {
            input,
            output,
            report,
        } => {
            println!("🎴 fivecolor - 範囲分類\n");

            let config = AssignConfig::new(input, output, report);
            let corrections = classifier::run(&config, cli.verbose)?;

            println!("\n✅ 範囲分類完了（修正 {}件）", corrections.len());
        }

        Commands::Verify {
            input,
            url,
            timeout,
            output,
            report,
        } => {
            println!("🎴 fivecolor - ウェブ照合\n");

            let config = VerifyConfig::new(input, url, timeout, output, report);
            let outcome = corrector::run(&config, cli.verbose).await?;

            println!("\n✅ ウェブ照合完了（修正 {}件）", outcome.corrections.len());
        }
    }

    Ok(())
}
