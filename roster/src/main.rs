use anyhow::Context;
use clap::Parser;
use roster::cli::{self, Cli};
use roster::{Config, RedbStore, Session, init_logger_with_file};

fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let args = Cli::parse();

    // 2. Storage
    std::fs::create_dir_all(&config.work_dir).with_context(|| {
        format!("Failed to create work dir {}", config.work_dir.display())
    })?;
    let db_path = config.db_path();
    let store = RedbStore::open(&db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    // 3. Session
    let mut session = Session::load(store, config.storage_key.clone());
    tracing::debug!(db = %db_path.display(), key = %config.storage_key, "Roster ready");

    cli::run(args, &mut session, &config.currency)
}
