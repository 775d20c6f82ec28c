//! MCP tool handlers for the record services.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.
//! Each service sits behind its own mutex; a handler holds the lock only for the
//! duration of one synchronous service operation.

use crate::config::Config;
use crate::error::{RecordError, RecordResult};
use crate::metrics::{Metrics, ToolTimer};
use crate::services::{AppointmentService, ContactService, TaskService};
use crate::tools::{
    self, AddAppointmentParams, AddContactParams, AddTaskParams, AppointmentIdParams,
    ContactIdParams, SearchParams, TaskIdParams, UpdateAppointmentParams, UpdateContactParams,
    UpdateTaskParams,
};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The MCP server that exposes the contact, task and appointment services.
#[derive(Clone)]
pub struct RecordsMcpServer {
    contacts: Arc<Mutex<ContactService>>,
    tasks: Arc<Mutex<TaskService>>,
    appointments: Arc<Mutex<AppointmentService>>,
    metrics: Metrics,
    server_name: String,
    max_search_results: usize,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for RecordsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: self.server_name.clone(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("In-memory record services - add, get, update, delete and search contacts, tasks and appointments. IDs are 1-10 characters and unique per record type.".into()),
        }
    }
}

/// Map a service error onto a JSON-RPC error code.
fn record_error_to_mcp(e: &RecordError) -> McpError {
    let code = match e {
        RecordError::InvalidArgument(_) => ErrorCode::INVALID_PARAMS,
        RecordError::NotFound { .. } => ErrorCode::RESOURCE_NOT_FOUND,
        RecordError::DuplicateIdentifier { .. } => ErrorCode::INVALID_REQUEST,
    };
    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

#[tool_router]
impl RecordsMcpServer {
    /// Create a server with empty services.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        Self::with_services(
            ContactService::new(),
            TaskService::new(),
            AppointmentService::new(),
            config,
            metrics,
        )
    }

    /// Create a server around pre-populated services.
    pub fn with_services(
        contacts: ContactService,
        tasks: TaskService,
        appointments: AppointmentService,
        config: &Config,
        metrics: Metrics,
    ) -> Self {
        Self {
            contacts: Arc::new(Mutex::new(contacts)),
            tasks: Arc::new(Mutex::new(tasks)),
            appointments: Arc::new(Mutex::new(appointments)),
            metrics,
            server_name: config.server_name.clone(),
            max_search_results: config.max_search_results,
            tool_router: Self::tool_router(),
        }
    }

    /// Metrics collected by this server.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn respond(
        &self,
        timer: ToolTimer,
        tool: &'static str,
        result: RecordResult<Value>,
    ) -> Result<CallToolResult, McpError> {
        timer.finish(&result);
        let value = result.map_err(|e| {
            tracing::warn!(tool, error = %e, "Tool call rejected");
            record_error_to_mcp(&e)
        })?;
        let body = serde_json::to_string_pretty(&value).map_err(to_mcp_error)?;
        Ok(CallToolResult::success(vec![Content::text(body)]))
    }

    fn timer(&self, tool: &'static str) -> ToolTimer {
        ToolTimer::new(self.metrics.clone(), tool)
    }

    #[tool(description = "Add a contact. IDs are 1-10 characters, first and last name at most 10 characters, phone exactly 10 digits, address at most 30 characters. Fails if the ID already exists.")]
    async fn add_contact(
        &self,
        params: Parameters<AddContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("add_contact");
        let mut contacts = self.contacts.lock().await;
        let result = tools::contacts::add_contact(&mut contacts, params.0);
        drop(contacts);
        self.respond(timer, "add_contact", result)
    }

    #[tool(description = "Get a contact by ID. Returns found=false when the ID is not stored.")]
    async fn get_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("get_contact");
        let contacts = self.contacts.lock().await;
        let view = tools::contacts::get_contact(&contacts, params.0);
        drop(contacts);
        self.respond(timer, "get_contact", Ok(view))
    }

    #[tool(description = "Replace first name, last name, phone and address of a stored contact. Either every field is updated or none is.")]
    async fn update_contact(
        &self,
        params: Parameters<UpdateContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("update_contact");
        let mut contacts = self.contacts.lock().await;
        let result = tools::contacts::update_contact(&mut contacts, params.0);
        drop(contacts);
        self.respond(timer, "update_contact", result)
    }

    #[tool(description = "Delete a contact by ID. Fails if the ID is not stored.")]
    async fn delete_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("delete_contact");
        let mut contacts = self.contacts.lock().await;
        let result = tools::contacts::delete_contact(&mut contacts, params.0);
        drop(contacts);
        self.respond(timer, "delete_contact", result)
    }

    #[tool(description = "Search contacts whose first name, last name or address contain the query, ignoring case.")]
    async fn search_contacts(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("search_contacts");
        let contacts = self.contacts.lock().await;
        let view = tools::contacts::search_contacts(&contacts, params.0, self.max_search_results);
        drop(contacts);
        self.respond(timer, "search_contacts", Ok(view))
    }

    #[tool(description = "Add a task. IDs are 1-10 characters, name at most 20 characters, description at most 50 characters. Fails if the ID already exists.")]
    async fn add_task(&self, params: Parameters<AddTaskParams>) -> Result<CallToolResult, McpError> {
        let timer = self.timer("add_task");
        let mut tasks = self.tasks.lock().await;
        let result = tools::tasks::add_task(&mut tasks, params.0);
        drop(tasks);
        self.respond(timer, "add_task", result)
    }

    #[tool(description = "Get a task by ID. Returns found=false when the ID is not stored.")]
    async fn get_task(&self, params: Parameters<TaskIdParams>) -> Result<CallToolResult, McpError> {
        let timer = self.timer("get_task");
        let tasks = self.tasks.lock().await;
        let view = tools::tasks::get_task(&tasks, params.0);
        drop(tasks);
        self.respond(timer, "get_task", Ok(view))
    }

    #[tool(description = "Replace name and description of a stored task. Either both fields are updated or neither is.")]
    async fn update_task(
        &self,
        params: Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("update_task");
        let mut tasks = self.tasks.lock().await;
        let result = tools::tasks::update_task(&mut tasks, params.0);
        drop(tasks);
        self.respond(timer, "update_task", result)
    }

    #[tool(description = "Delete a task by ID. Fails if the ID is not stored.")]
    async fn delete_task(
        &self,
        params: Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("delete_task");
        let mut tasks = self.tasks.lock().await;
        let result = tools::tasks::delete_task(&mut tasks, params.0);
        drop(tasks);
        self.respond(timer, "delete_task", result)
    }

    #[tool(description = "Search tasks whose name or description contain the query, ignoring case.")]
    async fn search_tasks(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("search_tasks");
        let tasks = self.tasks.lock().await;
        let view = tools::tasks::search_tasks(&tasks, params.0, self.max_search_results);
        drop(tasks);
        self.respond(timer, "search_tasks", Ok(view))
    }

    #[tool(description = "Add an appointment. IDs are 1-10 characters, the date is an RFC 3339 timestamp strictly in the future, description at most 50 characters. Fails if the ID already exists.")]
    async fn add_appointment(
        &self,
        params: Parameters<AddAppointmentParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("add_appointment");
        let mut appointments = self.appointments.lock().await;
        let result = tools::appointments::add_appointment(&mut appointments, params.0);
        drop(appointments);
        self.respond(timer, "add_appointment", result)
    }

    #[tool(description = "Get an appointment by ID. Returns found=false when the ID is not stored.")]
    async fn get_appointment(
        &self,
        params: Parameters<AppointmentIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("get_appointment");
        let appointments = self.appointments.lock().await;
        let view = tools::appointments::get_appointment(&appointments, params.0);
        drop(appointments);
        self.respond(timer, "get_appointment", Ok(view))
    }

    #[tool(description = "Replace the description of a stored appointment. The date cannot be changed.")]
    async fn update_appointment(
        &self,
        params: Parameters<UpdateAppointmentParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("update_appointment");
        let mut appointments = self.appointments.lock().await;
        let result = tools::appointments::update_appointment(&mut appointments, params.0);
        drop(appointments);
        self.respond(timer, "update_appointment", result)
    }

    #[tool(description = "Delete an appointment by ID. Fails if the ID is not stored.")]
    async fn delete_appointment(
        &self,
        params: Parameters<AppointmentIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("delete_appointment");
        let mut appointments = self.appointments.lock().await;
        let result = tools::appointments::delete_appointment(&mut appointments, params.0);
        drop(appointments);
        self.respond(timer, "delete_appointment", result)
    }

    #[tool(description = "Search appointments whose description contains the query, ignoring case.")]
    async fn search_appointments(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let timer = self.timer("search_appointments");
        let appointments = self.appointments.lock().await;
        let view =
            tools::appointments::search_appointments(&appointments, params.0, self.max_search_results);
        drop(appointments);
        self.respond(timer, "search_appointments", Ok(view))
    }
}
