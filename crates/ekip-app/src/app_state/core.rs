//! EkipApp struct definition, constructor and input loop.

use std::sync::Arc;

use ekip_client::{KnowledgeClient, QuerySessionManager, SessionHolder, SessionObserver};
use ekip_config::EkipConfig;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::command::{Command, HELP};
use super::render;

/// Top-level application state.
pub struct EkipApp {
    pub(super) client: Arc<dyn KnowledgeClient>,
    pub(super) sessions: SessionHolder,
    pub(super) manager: Arc<QuerySessionManager>,
}

/// Whether the input loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Quit,
}

impl EkipApp {
    pub fn new(client: Arc<dyn KnowledgeClient>, config: &EkipConfig) -> Self {
        let mut sessions = SessionHolder::new();
        let manager = Arc::new(
            QuerySessionManager::new(Arc::clone(&client), sessions.handle())
                .with_department_filter(config.search.department_filter.clone()),
        );
        sessions.register(Arc::clone(&manager) as Arc<dyn SessionObserver>);

        Self {
            client,
            sessions,
            manager,
        }
    }

    /// Read commands from `input` until `/quit` or end of input.
    pub async fn run<R>(self, input: R, email: Option<String>) -> ekip_common::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let renderer = render::spawn_renderer(self.manager.subscribe());
        println!("{HELP}\n");

        if let Some(email) = email {
            self.dispatch(Command::Login(email)).await;
        }

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if self.dispatch(Command::parse(&line)).await == Flow::Quit {
                break;
            }
        }

        self.sessions.clear();
        renderer.abort();
        tracing::info!("input closed, shutting down");
        Ok(())
    }
}
