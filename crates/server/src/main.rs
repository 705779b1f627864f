#[tokio::main]
async fn main() -> anyhow::Result<()> {
    studykit_server::start().await
}
