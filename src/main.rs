#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    issue_digest::logging::init();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => (),
        Err(err) => return Err(anyhow::Error::new(err).context("Failed to load .env")),
    }

    let args: Vec<String> = std::env::args().collect();
    issue_digest::run::run(
        args,
        |key| std::env::var(key).ok(),
        &issue_digest::notify::StdoutNotifier,
        None,
    )
    .await
}
