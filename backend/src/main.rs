#[tokio::main]
async fn main() -> anyhow::Result<()> {
  lienzo_lib::run().await
}
