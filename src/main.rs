use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    numguess::cli::run_cli().await
}
