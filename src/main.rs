use anyhow::Result;
use clap::Parser;
use salary_stats::cli::Cli;
use salary_stats::services::render_report;
use salary_stats::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 中可以放 SJ_TOKEN
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 加载配置
    let config = Config::load(cli.config.as_deref())?;

    // 初始化日志
    logger::init(config.verbose_logging);

    let app = App::initialize(config)?;
    let reports = app.run(&cli.city, &cli.provider.providers()).await?;

    for report in &reports {
        println!("{}", render_report(report));
    }

    Ok(())
}
