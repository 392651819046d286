#[tokio::main]
async fn main() -> ontotree::Result<()> {
    ontotree::cli::main().await
}
