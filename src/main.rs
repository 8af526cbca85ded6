#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    title_versions_lib::run().await?;
    Ok(())
}
