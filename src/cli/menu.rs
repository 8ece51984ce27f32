//! Main application menu.

use std::str::FromStr;

use tracing::debug;

use crate::cli::builder;
use crate::error::{FlowError, Result};
use crate::runner::Flow;
use crate::state::FlowStore;
use crate::ui::{Prompt, PromptOption, UserInterface};

pub const MENU_KEY: &str = "menu";
pub const FLOW_NAME_KEY: &str = "flow_name";

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Run,
    Delete,
    List,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Create,
        MenuChoice::Run,
        MenuChoice::Delete,
        MenuChoice::List,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Create => "Create Flow",
            Self::Run => "Run Flow",
            Self::Delete => "Delete Flow",
            Self::List => "List Flows",
            Self::Exit => "Exit",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Run => "run",
            Self::Delete => "delete",
            Self::List => "list",
            Self::Exit => "exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .find(|choice| choice.value() == s)
            .copied()
            .ok_or_else(|| format!("unknown menu choice: {}", s))
    }
}

/// The interactive session: a flow store driven by the main menu.
#[derive(Debug, Default)]
pub struct Menu {
    store: FlowStore,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &FlowStore {
        &self.store
    }

    /// Show the menu until the user exits or input runs out.
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let prompt = menu_prompt();
        loop {
            ui.show_header("Flow Application Menu");

            let result = match ui.prompt(&prompt) {
                Ok(answer) => self.handle(&answer.into_string(), ui),
                Err(e) => Err(e),
            };

            match result {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(FlowError::InputClosed) => {
                    debug!("Input closed; leaving the menu");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Act on one menu answer. Returns `false` once the user exits.
    fn handle(&mut self, answer: &str, ui: &mut dyn UserInterface) -> Result<bool> {
        let choice = match answer.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(reason) => {
                debug!("{}", reason);
                ui.warning("Invalid choice.");
                return Ok(true);
            }
        };

        match choice {
            MenuChoice::Create => self.create_flow(ui)?,
            MenuChoice::Run => self.run_flow(ui)?,
            MenuChoice::Delete => self.delete_flow(ui)?,
            MenuChoice::List => self.list_flows(ui),
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    pub fn create_flow(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let name = ask_name(ui, "Enter flow name")?;
        if self.store.get(&name).is_some() {
            ui.error(&FlowError::DuplicateFlow { name }.to_string());
            return Ok(());
        }

        let mut flow = Flow::new(name);
        builder::build_steps(&mut flow, ui)?;
        self.store.insert(flow)?;
        ui.success("Flow created successfully.");
        Ok(())
    }

    pub fn run_flow(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let name = ask_name(ui, "Enter the flow name to run")?;
        match self.store.get_mut(&name) {
            Some(flow) => {
                let report = flow.run(ui)?;
                debug!(
                    "Flow '{}' {}",
                    name,
                    if report.completed() { "completed" } else { "aborted" }
                );
            }
            None => ui.error("Flow not found."),
        }
        Ok(())
    }

    pub fn delete_flow(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let name = ask_name(ui, "Enter the flow name to delete")?;
        match self.store.remove(&name) {
            Ok(_) => ui.success("Flow deleted successfully."),
            Err(FlowError::FlowNotFound { .. }) => ui.error("Flow not found."),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    pub fn list_flows(&self, ui: &mut dyn UserInterface) {
        if self.store.is_empty() {
            ui.message("No flows available.");
            return;
        }
        for flow in self.store.iter() {
            flow.display_analytics(ui);
        }
    }
}

fn menu_prompt() -> Prompt {
    let options = MenuChoice::ALL
        .iter()
        .map(|choice| PromptOption::new(choice.label(), choice.value()))
        .collect();
    Prompt::select(MENU_KEY, "Enter choice", options)
}

fn ask_name(ui: &mut dyn UserInterface, question: &str) -> Result<String> {
    Ok(ui.prompt(&Prompt::input(FLOW_NAME_KEY, question))?.into_string())
}
