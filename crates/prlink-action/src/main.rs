use anyhow::Result;
use clap::Parser;
use prlink_action::{init_tracing, run_pr_issue_link, PrIssueLinkConfig, PrIssueLinkOutcome};
use prlink_cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = PrIssueLinkConfig::from_cli(cli)?;
    let outcome = run_pr_issue_link(&config).await?;
    if let PrIssueLinkOutcome::AlreadyCommented { issue_id, .. } = &outcome {
        println!("This pull request already has issue link for {issue_id}.");
    }
    Ok(())
}
