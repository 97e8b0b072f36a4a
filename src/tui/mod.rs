pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::store::Store;

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut tui_app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));

    load_data(&mut tui_app, &ctx);

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                tui_app.clear_status();
                match Action::from(key) {
                    Action::Quit => tui_app.should_quit = true,
                    Action::MoveUp => tui_app.move_up(),
                    Action::MoveDown => tui_app.move_down(),
                    Action::NextPage => tui_app.next_page(),
                    Action::PrevPage => tui_app.prev_page(),
                    Action::NextPane => tui_app.active_pane = tui_app.active_pane.next(),
                    Action::PrevPane => tui_app.active_pane = tui_app.active_pane.prev(),
                    Action::OpenInBrowser => {
                        let url = tui_app.selected_vehicle().map(|(_, v)| v.url.clone());
                        match url {
                            Some(url) => {
                                if let Err(e) = open::that(&url) {
                                    tui_app.set_status(format!("Failed to open browser: {}", e));
                                }
                            }
                            None => tui_app.set_status("No catalog page for this entry".to_string()),
                        }
                    }
                    Action::Refresh => {
                        tui_app.is_refreshing = true;
                        terminal.draw(|frame| layout::render(frame, &mut tui_app))?;

                        let status = match refresh(&ctx).await {
                            Ok(week_of) => format!("Fetched weekly update for {}", week_of),
                            Err(e) => format!("Refresh failed: {}", e),
                        };
                        load_data(&mut tui_app, &ctx);

                        tui_app.is_refreshing = false;
                        if tui_app.status_message.is_none() {
                            tui_app.set_status(status);
                        }
                    }
                    Action::None => {}
                }
            }
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

fn load_data(tui_app: &mut TuiApp, ctx: &AppContext) {
    let loaded = ctx.store.load_weekly_update().and_then(|update| {
        let vehicles = ctx.store.load_vehicle_data()?.unwrap_or_default();
        Ok((update, vehicles))
    });

    match loaded {
        Ok((update, vehicles)) => tui_app.load(update, vehicles),
        Err(e) => tui_app.set_status(format!("Failed to load saved data: {}", e)),
    }
}

/// Fetch the newest post and overwrite the stored weekly update.
async fn refresh(ctx: &AppContext) -> Result<String> {
    let post = ctx.fetcher.latest_post().await?;
    let update = ctx.extractor.extract(&post);
    ctx.store.save_weekly_update(&update)?;
    Ok(update.week_of)
}
