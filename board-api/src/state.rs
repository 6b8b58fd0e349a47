use std::sync::{Arc, Mutex, MutexGuard};

use task_board::{Collaborators, DemoPersistence, MemoryNotifier, SystemClock, TaskBoard};

use crate::config::BoardConfig;
use crate::seed;

/// Shared state for every request: the one board and its notification log
pub struct AppState {
    pub board: Mutex<TaskBoard>,
    pub notifications: Arc<MemoryNotifier>,
}

impl AppState {
    pub fn new(config: &BoardConfig) -> Self {
        let notifications = Arc::new(MemoryNotifier::with_limit(config.notification_limit));
        let collaborators = Collaborators {
            notifier: notifications.clone(),
            // This process is the authoritative store, writes stay local
            persistence: Arc::new(DemoPersistence),
            clock: Arc::new(SystemClock),
        };

        let team = seed::team();
        let mut board = TaskBoard::new(team.clone(), collaborators);
        if config.seed_sample_data {
            let now = chrono::Utc::now();
            board = board.with_data(seed::projects(&team, now), seed::tasks(&team, now));
            tracing::info!(
                projects = board.projects().len(),
                tasks = board.tasks().len(),
                "Seeded sample data"
            );
        }

        Self {
            board: Mutex::new(board),
            notifications,
        }
    }

    pub fn board(&self) -> actix_web::Result<MutexGuard<'_, TaskBoard>> {
        self.board
            .lock()
            .map_err(|_| actix_web::error::ErrorInternalServerError("Board state is unavailable"))
    }
}
