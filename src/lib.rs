//! # Taskdeck - Task Board Client
//!
//! A command-line client for a folder-based task management service.
//! Tasks live in nested folders ("boards"); the client keeps a local
//! mirror of the server's folder tree, task lists and user roster and
//! pushes every change back over HTTP.
//!
//! ## Features
//!
//! - **Folder Tree**: Browse, create and delete nested task folders
//! - **Task Management**: Create tasks, move them through statuses and
//!   priorities, track progress and due dates
//! - **Assignees**: Toggle user membership on a task
//! - **Admin Oversight**: List every user and task, manage accounts
//! - **Data Export**: Export a folder's tasks to CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
