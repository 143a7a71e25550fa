use super::SystemError;
use crate::clients::ProductClient;
use crate::config::CatalogConfig;
use crate::dashboard::Dashboard;
use crate::repository::{CatalogRepository, SessionRegistry};
use tracing::{error, info};

/// The running catalog: the product actor plus everything wired on top of it.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(CatalogConfig::from_env()?);
/// let session = system.sessions.open("alice");
///
/// let mut dashboard = system.dashboard();
/// dashboard.mount(&system.repository, &session).await;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Direct access to the product actor, bypassing session checks.
    pub product_client: ProductClient,

    pub repository: CatalogRepository,

    pub sessions: SessionRegistry,

    config: CatalogConfig,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Spawn the product actor and wire the repository to it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: CatalogConfig) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(config.actor_buffer.get());
        let product_handle = tokio::spawn(product_actor.run(()));

        let sessions = SessionRegistry::new();
        let repository = CatalogRepository::new(product_client.clone(), sessions.clone());
        info!(page_size = config.page_size.get(), "Catalog system started");

        Self {
            product_client,
            repository,
            sessions,
            config,
            handles: vec![product_handle],
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// A fresh, unmounted dashboard using this system's settings.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(&self.config)
    }

    /// Drop the clients and wait for the actor to drain its queue.
    ///
    /// Clones of the product client or repository still held elsewhere keep the actor
    /// alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.repository);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
