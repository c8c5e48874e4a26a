#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tripplanner::run().await
}
