use std::path::Path;

use anyhow::Context;
use manggad_config::ManggadConfig;
use manggad_db::service::ManggadService;
use manggad_search::SearchExecutor;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub executor: SearchExecutor<ManggadService>,
    pub config: ManggadConfig,
}

impl AppContext {
    /// Open the configured database and build the search executor.
    ///
    /// `db_override` (the `--db` flag) wins over both the remote settings and
    /// `database.path`.
    pub async fn init(config: ManggadConfig, db_override: Option<&str>) -> anyhow::Result<Self> {
        let service = match db_override {
            Some(path) => open_local(path).await?,
            None if config.database.is_remote() => {
                tracing::debug!(url = %config.database.url, "opening remote database");
                ManggadService::new_remote(&config.database.url, &config.database.auth_token)
                    .await
                    .context("failed to connect to remote database")?
            }
            None => open_local(&config.database.path).await?,
        };

        let executor = SearchExecutor::from_config(service, &config.search);
        Ok(Self { executor, config })
    }

    pub const fn service(&self) -> &ManggadService {
        self.executor.store()
    }

    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}

async fn open_local(path: &str) -> anyhow::Result<ManggadService> {
    if path != ":memory:"
        && let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tracing::debug!(path, "opening local database");
    ManggadService::new_local(path)
        .await
        .with_context(|| format!("failed to open database at {path}"))
}
