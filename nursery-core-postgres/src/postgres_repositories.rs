use sqlx::PgPool;
use std::error::Error;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use nursery_core_db::models::product_control::LaborControlProducts;
use nursery_core_db::repository::load::Load;

use crate::config::DatabaseConfig;
use crate::executor::Executor;
use crate::repository::holding::{HoldingRepoFactory, HoldingRepositories};
use crate::repository::product_control::{ProductControlRepoFactory, ProductControlRepositories};

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
    holding_factory: HoldingRepoFactory,
    product_control_factory: ProductControlRepoFactory,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            holding_factory: HoldingRepoFactory::new(),
            product_control_factory: ProductControlRepoFactory::new(),
        }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        Ok(Self::new(Arc::new(config.connect().await?)))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create all repositories sharing a single transaction
    pub async fn begin_session(&self) -> Result<NurseryRepositories, sqlx::Error> {
        let executor = Executor::begin(&self.pool).await?;
        info!("repository session started");

        Ok(NurseryRepositories {
            holding_repos: self.holding_factory.build_all_repos(&executor),
            product_control_repos: self.product_control_factory.build_all_repos(&executor),
            executor,
        })
    }
}

/// All repositories of one unit of work.
///
/// Nothing is visible to other sessions until [`NurseryRepositories::commit`].
/// Dropping the session without committing rolls the transaction back.
pub struct NurseryRepositories {
    executor: Executor,
    pub holding_repos: HoldingRepositories,
    pub product_control_repos: ProductControlRepositories,
}

impl NurseryRepositories {
    pub fn holding_repos(&self) -> &HoldingRepositories {
        &self.holding_repos
    }

    pub fn product_control_repos(&self) -> &ProductControlRepositories {
        &self.product_control_repos
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// The fungus, pest and fertilizer controls recorded against a labor.
    ///
    /// Fails with `ApiError::NotFound` when the labor does not exist.
    pub async fn load_labor_control_products(
        &self,
        labor_id: Uuid,
    ) -> Result<LaborControlProducts, Box<dyn Error + Send + Sync>> {
        self.holding_repos.labor_repository.load(labor_id).await?;

        let controls = &self.product_control_repos;
        Ok(LaborControlProducts {
            labor_id,
            fungus: controls.fungus_control_repository.find_by_labor_id(labor_id).await?,
            pest: controls.pest_control_repository.find_by_labor_id(labor_id).await?,
            fertilizer: controls.fertilizer_control_repository.find_by_labor_id(labor_id).await?,
        })
    }

    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.executor.commit().await?;
        info!("repository session committed");
        Ok(())
    }

    pub async fn rollback(self) -> Result<(), sqlx::Error> {
        self.executor.rollback().await?;
        info!("repository session rolled back");
        Ok(())
    }
}
