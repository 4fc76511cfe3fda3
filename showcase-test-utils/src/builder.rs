//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::skill::Proficiency;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and seeded
/// portfolio rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_portfolio_tables: bool,

    // Database fixtures to insert
    profiles: Vec<String>,
    skills: Vec<(i32, String, Proficiency)>, // (profile_id, skill_name, proficiency)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_portfolio_tables: false,
            profiles: Vec::new(),
            skills: Vec::new(),
        }
    }

    /// Add every portfolio table to the test database.
    ///
    /// Creates Profile, Skill, Project, ProjectSkill and WorkExperience in foreign key order.
    pub fn with_portfolio_tables(mut self) -> Self {
        self.include_portfolio_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables. Useful for tests that need a table to be
    /// missing so a later query fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use showcase_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), showcase_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Profile)
    ///     .with_table(Skill)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a profile with the provided name.
    ///
    /// Profiles are inserted in the order queued, so the first queued profile receives ID 1.
    pub fn with_profile(mut self, name: impl Into<String>) -> Self {
        self.profiles.push(name.into());
        self
    }

    /// Insert a skill row owned by `profile_id`.
    ///
    /// Skills are inserted after all queued profiles.
    pub fn with_skill(
        mut self,
        profile_id: i32,
        skill_name: impl Into<String>,
        proficiency: Proficiency,
    ) -> Self {
        self.skills
            .push((profile_id, skill_name.into(), proficiency));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (portfolio tables if specified, then custom tables)
    /// 2. Inserts profiles, then skills
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_portfolio_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Profile),
                schema.create_table_from_entity(entity::prelude::Skill),
                schema.create_table_from_entity(entity::prelude::Project),
                schema.create_table_from_entity(entity::prelude::ProjectSkill),
                schema.create_table_from_entity(entity::prelude::WorkExperience),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for name in self.profiles {
            setup.portfolio().insert_profile(&name).await?;
        }

        for (profile_id, skill_name, proficiency) in self.skills {
            setup
                .portfolio()
                .insert_skill(profile_id, &skill_name, proficiency)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
