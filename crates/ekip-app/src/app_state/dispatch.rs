//! Command dispatch: routes parsed input to the session holder or manager.

use std::sync::Arc;

use ekip_client::{LoginError, Submission};

use super::command::{example_question, Command, HELP};
use super::core::{EkipApp, Flow};
use super::render;

impl EkipApp {
    pub(super) async fn dispatch(&self, command: Command) -> Flow {
        match command {
            Command::Ask(text) => {
                self.manager.set_pending_input(text);
                self.spawn_submit(None);
            }
            Command::Resubmit => self.spawn_submit(None),
            Command::AskExample(n) => {
                if let Some(question) = example_question(n) {
                    self.spawn_submit(Some(question.to_string()));
                }
            }
            Command::Login(email) => self.login(&email).await,
            Command::Logout => {
                let was_active = self.sessions.current().is_some();
                self.sessions.clear();
                if was_active {
                    println!("Signed out.\n");
                }
            }
            Command::Filter(dept) => self.manager.set_department_filter(dept.as_deref()),
            Command::History => println!("{}\n", render::render_history(&self.manager.state())),
            Command::Examples => println!("{}\n", render::render_examples()),
            Command::Help => println!("{HELP}\n"),
            Command::Invalid(reason) => println!("{reason}\n"),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    async fn login(&self, email: &str) {
        match self.sessions.login(self.client.as_ref(), email).await {
            Ok(session) => println!("{}\n", render::render_session(&session)),
            Err(LoginError::Request { message, .. }) => println!("Login failed: {message}\n"),
            Err(e @ LoginError::Identity(_)) => {
                tracing::warn!(error = %e, "login returned an unusable identity");
                println!("Login failed: {e}\n");
            }
        }
    }

    /// Submit without blocking the input loop; the renderer prints the result.
    fn spawn_submit(&self, text: Option<String>) {
        let manager = Arc::clone(&self.manager);
        tokio::spawn(async move {
            match manager.submit(text.as_deref()).await {
                Ok(Submission::Busy) => println!("{}\n", render::BUSY),
                Ok(_) => {}
                Err(e) => println!("Not signed in ({e}). Use /login <email> first.\n"),
            }
        });
    }
}
