mod config;
mod host;
mod render;
mod session;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shared::domain::{DisplayMode, Direction, SectionId};
use tracing_subscriber::EnvFilter;
use view_core::{SaveQueue, WebPartView};

use crate::{
    config::load_settings,
    host::WebPartHost,
    render::{pane_text, render_text},
};

#[derive(Parser, Debug)]
#[command(about = "Accordion/tabs web part driven from a JSON property bag")]
struct Cli {
    /// Property bag to load and persist.
    #[arg(long)]
    properties: Option<std::path::PathBuf>,
    /// Render in edit mode.
    #[arg(long)]
    edit: bool,
    #[arg(long)]
    save_delay_ms: Option<u64>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render once and exit.
    Show,
    /// Print the property pane.
    Pane,
    /// Interactive session on stdin.
    Session,
    /// Change one web part property.
    Set { property: String, value: String },
    /// Move a section one step.
    Move { id: String, direction: MoveDirection },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl From<MoveDirection> for Direction {
    fn from(value: MoveDirection) -> Self {
        match value {
            MoveDirection::Up | MoveDirection::Left => Direction::Earlier,
            MoveDirection::Down | MoveDirection::Right => Direction::Later,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings();
    if let Some(path) = cli.properties {
        settings.properties_path = path;
    }
    if let Some(delay) = cli.save_delay_ms {
        settings.save_delay_ms = delay;
    }
    if cli.edit {
        settings.display_mode = DisplayMode::Edit;
    }

    let mut host = WebPartHost::load(&settings.properties_path, settings.display_mode)?;

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {
            let view = WebPartView::mount(host.properties(), host.display_mode());
            print!("{}", render_text(&view.render()));
        }
        Command::Pane => print!("{}", pane_text(&host.properties().property_pane())),
        Command::Set { property, value } => {
            host.set_property(&property, &value)?;
            println!("{property} = {value}");
        }
        Command::Move { id, direction } => {
            let mut view = WebPartView::mount(host.properties(), host.display_mode());
            let section_id = SectionId::from(id.as_str());
            let Some(commit) = view.move_section(&section_id, direction.into()) else {
                bail!("cannot move {id} (unknown id, edge of the list, or not in edit mode)");
            };
            host.commit(commit)?;
            view.refresh(host.properties(), host.display_mode());
            print!("{}", render_text(&view.render()));
        }
        Command::Session => {
            let (queue, done) = SaveQueue::spawn(settings.save_delay());
            session::run(host, queue, done).await?;
        }
    }

    Ok(())
}
