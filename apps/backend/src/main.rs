#[tokio::main]
async fn main() -> anyhow::Result<()> {
    notebook_vision_backend::run().await
}
