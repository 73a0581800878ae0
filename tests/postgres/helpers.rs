//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use pg_embedded_setup_unpriv::TestCluster;
use sprintboard::planning::adapters::postgres::{
    PostgresProjectRepository, PostgresSprintRepository, PostgresTaskRepository,
};
use tokio::runtime::Runtime;
use uuid::Uuid;

/// SQL creating the planning tables.
pub const CREATE_PLANNING_TABLES_SQL: &str =
    include_str!("../../migrations/2026-10-16-000000_create_planning_tables/up.sql");

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "sprintboard_test_template";

/// Creates a runtime for driving the async repositories from sync tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn test_runtime() -> eyre::Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if template creation or migration fails.
pub fn ensure_template(cluster: &TestCluster) -> eyre::Result<()> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            conn.batch_execute(CREATE_PLANNING_TABLES_SQL)
                .map_err(|e| eyre::eyre!("{e}"))?;
            Ok(())
        })
        .map_err(|e| eyre::eyre!("template setup failed: {e}"))
}

/// Drops the test database when the test ends, even on failure.
struct CleanupGuard {
    cluster: &'static TestCluster,
    db_name: String,
}

impl Drop for CleanupGuard {
    #[expect(
        clippy::print_stderr,
        reason = "cleanup failures are reported without failing the test"
    )]
    fn drop(&mut self) {
        if let Err(err) = self.cluster.drop_database(self.db_name.as_str()) {
            eprintln!("warning: failed to drop test database {}: {err}", self.db_name);
        }
    }
}

/// Repositories bound to a fresh database cloned from the template.
pub struct PlanningDb {
    _guard: CleanupGuard,
    /// Project repository.
    pub projects: PostgresProjectRepository,
    /// Sprint repository.
    pub sprints: PostgresSprintRepository,
    /// Task repository.
    pub tasks: PostgresTaskRepository,
}

/// Creates a database from the template and wires the three repositories
/// to one pool.
///
/// # Errors
///
/// Returns an error if template setup, database creation or pool
/// construction fails.
pub fn planning_db(cluster: &'static TestCluster, label: &str) -> eyre::Result<PlanningDb> {
    ensure_template(cluster)?;
    let db_name = format!("{label}_{}", Uuid::new_v4().simple());
    cluster
        .create_database_from_template(db_name.as_str(), TEMPLATE_DB)
        .map_err(|e| eyre::eyre!("create {db_name}: {e}"))?;
    let guard = CleanupGuard {
        cluster,
        db_name: db_name.clone(),
    };

    let url = cluster.connection().database_url(&db_name);
    let pool = Pool::builder()
        .max_size(1)
        .build(ConnectionManager::<PgConnection>::new(url))?;

    Ok(PlanningDb {
        _guard: guard,
        projects: PostgresProjectRepository::new(pool.clone()),
        sprints: PostgresSprintRepository::new(pool.clone()),
        tasks: PostgresTaskRepository::new(pool),
    })
}
