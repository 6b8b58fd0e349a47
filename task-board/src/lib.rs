//! Task Board Crate
//!
//! The core behind the dashboard's project and task Kanban page: filtering,
//! drag-and-drop status transitions, task/project commands and the derived
//! values a task card renders. Everything here is synchronous and works on
//! in-memory state; I/O only happens through the injected collaborators.
//!
//! # Architecture
//!
//! - **Types**: Entities and wire types live in the `shared-types` crate
//! - **Engines**: `filter` and `drag` are pure functions over task slices
//! - **Commands**: `TaskBoard` owns the collections and applies every change
//!   copy-on-write, then notifies and persists through its collaborators
//!
//! # Example
//!
//! ```rust,ignore
//! use task_board::{Collaborators, TaskBoard};
//! use shared_types::{DropTarget, TaskStatus};
//!
//! let mut board = TaskBoard::new(team, Collaborators::demo());
//! board.move_task(&task_id, &DropTarget::Column(TaskStatus::Done));
//! ```

pub mod board;
pub mod card;
pub mod clock;
pub mod collection;
pub mod drag;
pub mod error;
pub mod filter;
pub mod generate;
pub mod notify;
pub mod persist;

// Re-export commonly used types
pub use board::{CardOutcome, Collaborators, TaskBoard, TaskDraft, TaskForm};
pub use card::{checklist_completion, days_remaining, CardAction, DueBadge, TaskCard};
pub use clock::{Clock, FixedClock, SystemClock};
pub use collection::Collection;
pub use drag::{DropOutcome, NoOpReason};
pub use error::{BoardError, BoardResult};
pub use generate::TaskTemplateGenerator;
pub use notify::{MemoryNotifier, Notifier, TracingNotifier, DEFAULT_NOTIFICATION_LIMIT};
pub use persist::{DemoPersistence, PersistMethod, PersistRequest, Persistence, RemotePersistence};
