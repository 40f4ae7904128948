use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use charity_directory::db::{DbPool, establish_connection_pool};
use charity_directory::domain::charity::{Charity, NewCharity};
use charity_directory::repository::errors::RepositoryResult;
use charity_directory::repository::{CharityListQuery, CharityReader, CharityWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database in a temp directory, removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let url = dir.path().join(name).display().to_string();
        let pool = establish_connection_pool(&url).expect("failed to create pool");

        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");
        drop(conn);

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

mockall::mock! {
    pub Repository {}

    impl CharityReader for Repository {
        fn get_charity_by_id(&self, id: i32) -> RepositoryResult<Option<Charity>>;
        fn list_charities(&self, query: CharityListQuery) -> RepositoryResult<(usize, Vec<Charity>)>;
    }

    impl CharityWriter for Repository {
        fn create_charity(&self, new_charity: &NewCharity) -> RepositoryResult<Charity>;
    }
}
