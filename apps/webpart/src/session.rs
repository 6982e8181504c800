//! Line-oriented interactive session: reads commands from stdin, drives the
//! mounted view, and lands delayed saves as they complete.

use anyhow::{anyhow, bail, Result};
use shared::domain::{Direction, SectionId};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{debug, info, warn};
use view_core::{Commit, MenuAction, SaveQueue, SavedSection, WebPartView};

use crate::{
    host::WebPartHost,
    render::{pane_text, render_text},
};

pub const HELP: &str = "\
commands:
  show                          render the web part
  toggle <id>                   expand/collapse an accordion panel
  select <n>                    activate tab n (0-based)
  move <id> up|down|left|right  reorder a section
  add <title> | <content>       add a section
  edit <id> <title> | <content> update a section
  delete <id>                   ask to delete a section
  confirm | keep                answer the delete prompt
  menu <id>                     open a tab's context menu
  pick edit|left|right|delete   run a context menu entry
  drag <id> <dx>                drag a tab horizontally
  set <property> <value>        change a web part property
  pane                          show the property pane
  quit";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Show,
    Pane,
    Help,
    Quit,
    Toggle(SectionId),
    Select(usize),
    Move(SectionId, Direction),
    Add { title: String, content: String },
    Edit { id: SectionId, title: String, content: String },
    Delete(SectionId),
    Confirm,
    Keep,
    Menu(SectionId),
    Pick(MenuAction),
    Drag(SectionId, f64),
    Set { property: String, value: String },
}

pub fn parse_direction(raw: &str) -> Option<Direction> {
    match raw.to_ascii_lowercase().as_str() {
        "up" | "left" | "earlier" => Some(Direction::Earlier),
        "down" | "right" | "later" => Some(Direction::Later),
        _ => None,
    }
}

fn split_body(rest: &str) -> (String, String) {
    match rest.split_once('|') {
        Some((title, content)) => (title.trim().to_string(), content.trim().to_string()),
        None => (rest.trim().to_string(), String::new()),
    }
}

fn required<'a>(arg: Option<&'a str>, usage: &str) -> Result<&'a str> {
    arg.filter(|a| !a.is_empty())
        .ok_or_else(|| anyhow!("usage: {usage}"))
}

pub fn parse_command(line: &str) -> Result<SessionCommand> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let mut args = rest.split_whitespace();

    let cmd = match word.to_ascii_lowercase().as_str() {
        "show" | "" => SessionCommand::Show,
        "pane" => SessionCommand::Pane,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        "toggle" => SessionCommand::Toggle(required(args.next(), "toggle <id>")?.into()),
        "select" => {
            let raw = required(args.next(), "select <n>")?;
            SessionCommand::Select(raw.parse().map_err(|_| anyhow!("not a tab index: {raw}"))?)
        }
        "move" => {
            let id = required(args.next(), "move <id> up|down|left|right")?;
            let raw = required(args.next(), "move <id> up|down|left|right")?;
            let direction = parse_direction(raw).ok_or_else(|| anyhow!("unknown direction: {raw}"))?;
            SessionCommand::Move(id.into(), direction)
        }
        "add" => {
            let (title, content) = split_body(rest);
            SessionCommand::Add { title, content }
        }
        "edit" => {
            let (id, body) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let id = required(Some(id), "edit <id> <title> | <content>")?;
            let (title, content) = split_body(body);
            SessionCommand::Edit {
                id: id.into(),
                title,
                content,
            }
        }
        "delete" => SessionCommand::Delete(required(args.next(), "delete <id>")?.into()),
        "confirm" | "yes" => SessionCommand::Confirm,
        "keep" | "no" => SessionCommand::Keep,
        "menu" => SessionCommand::Menu(required(args.next(), "menu <id>")?.into()),
        "pick" => {
            let raw = required(args.next(), "pick edit|left|right|delete")?;
            let action = match raw.to_ascii_lowercase().as_str() {
                "edit" => MenuAction::Edit,
                "left" => MenuAction::MoveLeft,
                "right" => MenuAction::MoveRight,
                "delete" => MenuAction::Delete,
                other => bail!("unknown menu entry: {other}"),
            };
            SessionCommand::Pick(action)
        }
        "drag" => {
            let id = required(args.next(), "drag <id> <dx>")?;
            let raw = required(args.next(), "drag <id> <dx>")?;
            let dx = raw.parse().map_err(|_| anyhow!("not a distance: {raw}"))?;
            SessionCommand::Drag(id.into(), dx)
        }
        "set" => {
            let property = required(args.next(), "set <property> <value>")?.to_string();
            let value = args.collect::<Vec<_>>().join(" ");
            SessionCommand::Set { property, value }
        }
        other => bail!("unknown command: {other} (try `help`)"),
    };
    Ok(cmd)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

pub struct Session {
    host: WebPartHost,
    view: WebPartView,
    queue: SaveQueue,
}

impl Session {
    pub fn new(host: WebPartHost, queue: SaveQueue) -> Self {
        let view = WebPartView::mount(host.properties(), host.display_mode());
        Self { host, view, queue }
    }

    pub fn show(&self) -> String {
        render_text(&self.view.render())
    }

    pub fn handle(&mut self, cmd: SessionCommand) -> Result<Flow> {
        debug!(?cmd, "session command");
        let message = match cmd {
            SessionCommand::Quit => return Ok(Flow::Quit),
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Show => self.show(),
            SessionCommand::Pane => pane_text(&self.host.properties().property_pane()),
            SessionCommand::Toggle(id) => {
                let WebPartView::Accordion(view) = &mut self.view else {
                    bail!("toggle only applies to the accordion layout");
                };
                view.toggle(&id);
                self.show()
            }
            SessionCommand::Select(index) => {
                let WebPartView::Tabs(view) = &mut self.view else {
                    bail!("select only applies to the tabs layout");
                };
                view.select(index);
                self.show()
            }
            SessionCommand::Move(id, direction) => {
                let commit = self.view.move_section(&id, direction);
                self.apply_or(commit, "nothing to move")?
            }
            SessionCommand::Add { title, content } => {
                self.view.open_new_section()?;
                self.submit_editor(title, content)?
            }
            SessionCommand::Edit { id, title, content } => {
                if !self.view.open_section(&id)? {
                    bail!("no section with id {id}");
                }
                self.submit_editor(title, content)?
            }
            SessionCommand::Delete(id) => {
                if !self.view.request_delete(&id) {
                    bail!("cannot delete {id}");
                }
                format!("{} (confirm/keep)", shared::strings::DELETE_CONFIRMATION)
            }
            SessionCommand::Confirm => {
                let commit = self.view.confirm_delete();
                self.apply_or(commit, "no delete pending")?
            }
            SessionCommand::Keep => {
                self.view.editing_mut().cancel_delete();
                "kept".to_string()
            }
            SessionCommand::Menu(id) => {
                let WebPartView::Tabs(view) = &mut self.view else {
                    bail!("menus only apply to the tabs layout");
                };
                let items = view.open_menu(&id);
                if items.is_empty() {
                    bail!("no menu for {id}");
                }
                items
                    .iter()
                    .map(|item| item.label())
                    .collect::<Vec<_>>()
                    .join(" | ")
            }
            SessionCommand::Pick(action) => {
                let WebPartView::Tabs(view) = &mut self.view else {
                    bail!("menus only apply to the tabs layout");
                };
                let commit = view.invoke_menu(action);
                match action {
                    MenuAction::Edit => "editor open; use `edit` to change the section".to_string(),
                    MenuAction::Delete => {
                        format!("{} (confirm/keep)", shared::strings::DELETE_CONFIRMATION)
                    }
                    MenuAction::MoveLeft | MenuAction::MoveRight => {
                        self.apply_or(commit, "tab cannot move that way")?
                    }
                }
            }
            SessionCommand::Drag(id, dx) => {
                let WebPartView::Tabs(view) = &mut self.view else {
                    bail!("drag only applies to the tabs layout");
                };
                view.begin_drag(&id, 0.0, 0.0);
                let commit = view.drag_to(dx, 0.0);
                view.end_drag();
                self.apply_or(commit, "drag too short")?
            }
            SessionCommand::Set { property, value } => {
                self.host.set_property(&property, &value)?;
                self.view
                    .refresh(self.host.properties(), self.host.display_mode());
                self.show()
            }
        };
        Ok(Flow::Continue(message))
    }

    /// Merges a completed save into the host collection.
    pub fn land(&mut self, saved: SavedSection) -> Result<String> {
        let id = saved.section.id.clone();
        match self.view.complete_save(&saved) {
            Some(commit) => {
                self.apply(commit)?;
                Ok(format!("saved {id}\n{}", self.show()))
            }
            None => {
                warn!(section_id = %id, "save dropped; section no longer exists");
                Ok(format!("save for {id} dropped"))
            }
        }
    }

    /// Stops the save worker and lands whatever it still releases.
    pub async fn finish(self, mut done: mpsc::UnboundedReceiver<SavedSection>) -> Result<WebPartHost> {
        let Session {
            mut host,
            mut view,
            queue,
        } = self;
        queue.shutdown().await;
        while let Some(saved) = done.recv().await {
            if let Some(commit) = view.complete_save(&saved) {
                host.commit(commit)?;
                view.refresh(host.properties(), host.display_mode());
            }
        }
        Ok(host)
    }

    fn submit_editor(&mut self, title: String, content: String) -> Result<String> {
        if let Some(editor) = self.view.editing_mut().editor_mut() {
            editor.set_title(title);
            editor.edit_content(content);
        }
        match self.view.submit_editor() {
            Ok(saved) => {
                let id = saved.section.id.clone();
                self.queue.submit(saved)?;
                Ok(format!("saving {id}..."))
            }
            Err(err) => {
                self.view.editing_mut().cancel_editor();
                Err(err.into())
            }
        }
    }

    fn apply(&mut self, commit: Commit) -> Result<()> {
        self.host.commit(commit)?;
        self.view
            .refresh(self.host.properties(), self.host.display_mode());
        Ok(())
    }

    fn apply_or(&mut self, commit: Option<Commit>, otherwise: &str) -> Result<String> {
        match commit {
            Some(commit) => {
                self.apply(commit)?;
                Ok(self.show())
            }
            None => Ok(otherwise.to_string()),
        }
    }
}

/// Runs the session until `quit` or end of input, then drains pending saves.
pub async fn run(host: WebPartHost, queue: SaveQueue, mut done: mpsc::UnboundedReceiver<SavedSection>) -> Result<()> {
    let mut session = Session::new(host, queue);
    println!("{}", session.show());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let outcome = parse_command(&line).and_then(|cmd| session.handle(cmd));
                match outcome {
                    Ok(Flow::Continue(message)) => println!("{message}"),
                    Ok(Flow::Quit) => break,
                    Err(err) => println!("error: {err:#}"),
                }
            }
            Some(saved) = done.recv() => {
                match session.land(saved) {
                    Ok(message) => println!("{message}"),
                    Err(err) => println!("error: {err:#}"),
                }
            }
        }
    }

    info!("session ending; flushing pending saves");
    let host = session.finish(done).await?;
    info!(path = %host.path().display(), "properties saved");
    Ok(())
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
