mod cli;
mod page;

use std::fs::File;
use std::io;
use std::sync::{Arc, Mutex};

use clap::Parser;
use crossterm::event::EventStream;
use futures::StreamExt;
use image_explorer::{
    EventOutcome, ExplorerError, ExplorerState, ImageDescriptor, ImageExplorer, RegistryError,
    StaticImageSource, registry, wakeup,
};
use log::{debug, info};
use scopedom::{Event, Key, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

use cli::Args;
use page::Page;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Explorer(#[from] ExplorerError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

fn demo_images() -> Vec<ImageDescriptor> {
    vec![
        ImageDescriptor::new("https://picsum.photos/id/10/640/480", "forest"),
        ImageDescriptor::new("https://picsum.photos/id/28/640/480", "canyon"),
        ImageDescriptor::new("https://picsum.photos/id/42/640/480", "coffee"),
        ImageDescriptor::new("https://picsum.photos/id/57/640/480", ""),
    ]
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_file = File::create("image-explorer.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let mut page = Page::new(if args.demo { "demo" } else { args.url.as_str() });
    let (wakeup_tx, mut wakeup_rx) = wakeup::channel();

    let mut explorer = registry::create_as::<ImageExplorer>(image_explorer::TAG)?;
    explorer.set_wakeup(wakeup_tx);
    if args.demo {
        explorer.initialize_with_source(&page.host(), Arc::new(StaticImageSource::new(demo_images())))?;
    } else {
        explorer.initialize(&page.host())?;
    }

    // Filled by the explorer's callback, drained after each event.
    let picked: Arc<Mutex<Option<ImageDescriptor>>> = Arc::default();

    let mut terminal = Terminal::new()?;
    let mut events = EventStream::new();
    info!("Host page running against {}", args.url);

    loop {
        terminal.render(&page.element(&explorer))?;

        tokio::select! {
            next = events.next() => {
                let Some(raw) = next else { break };
                let Some(event) = Event::from_crossterm(raw?) else { continue };

                if explorer.handle_event(&event, terminal.layout()) == EventOutcome::Consumed {
                    if let Some(image) = picked.lock().unwrap_or_else(|e| e.into_inner()).take() {
                        page.status = "Image inserted.".to_string();
                        page.selected = Some(image);
                    }
                    continue;
                }

                let Event::Key { key, modifiers } = event else { continue };
                if modifiers.ctrl && key == Key::Char('c') {
                    break;
                }
                match (explorer.state(), key) {
                    (ExplorerState::Open, Key::Escape) => {
                        explorer.close();
                        page.status = "Cancelled.".to_string();
                    }
                    (ExplorerState::Idle, Key::Char('i')) => {
                        let sink = picked.clone();
                        explorer.show(move |image| {
                            *sink.lock().unwrap_or_else(|e| e.into_inner()) = Some(image);
                        })?;
                        page.status = "Loading images… (Esc to cancel)".to_string();
                    }
                    (ExplorerState::Idle, Key::Char('q')) => break,
                    _ => debug!("Unhandled key {key:?}"),
                }
            }
            Some(()) = wakeup_rx.recv() => {
                if explorer.poll_fetch() {
                    page.status = "Click an image, or type a link and press Enter.".to_string();
                }
            }
        }
    }

    info!("Host page exiting");
    Ok(())
}
