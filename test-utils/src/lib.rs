//! Voicebot Test Utils
//!
//! Provides shared testing utilities for the voice channel bot. This crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases, factories for seeding
//! the voice tables, and factories for Serenity model objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn counts_generated_channels() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_voice_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
