//! Record Services - validated in-memory stores for contacts, tasks and appointments.
//!
//! Every entity validates its fields on construction and on every write, and
//! each service owns an identity-keyed store that rejects duplicate IDs. The
//! services are also exposed over the Model Context Protocol.
//!
//! # Architecture
//!
//! - **domain**: Value objects (record IDs, phone numbers) and field rules
//! - **models**: The `Contact`, `Task` and `Appointment` entities
//! - **repositories**: The identity-keyed store shared by all services
//! - **services**: Add, delete, update, get and search per record type
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Tool call counters
//! - **tools**: JSON views over service operations
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod tools;

pub use config::Config;
pub use domain::{PhoneNumber, RecordId, ValidationError};
pub use error::{ConfigError, RecordError, RecordResult};
pub use metrics::{Metrics, MetricsSummary, ToolTimer};
pub use models::{Appointment, Contact, Task};
pub use repositories::{InMemoryRepository, Record, RecordKind};
pub use server::RecordsMcpServer;
pub use services::{AppointmentService, ContactService, TaskService};
