use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};

use agentdash_core::{map_key, Action, Dashboard, DashboardConfig, Effect, Key, Page, SessionFile};
use tracing::{info, warn};

use crate::render;

pub fn run_tui(config: &DashboardConfig, initial_page: Option<String>) -> anyhow::Result<()> {
    let session = SessionFile::new(config.session.state_file.clone());
    let mut dash = Dashboard::new(config);
    restore_start_page(&mut dash, config, &session, initial_page.as_deref());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut dash, config, &session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    dash: &mut Dashboard,
    config: &DashboardConfig,
    session: &SessionFile,
) -> anyhow::Result<()> {
    let tick_rate = config.timing.tick_rate();
    let start = Instant::now();
    let mut last_tick = Instant::now();

    let size = terminal.size()?;
    dash.dispatch(resize_action(size.width, size.height));
    info!(page = %dash.page(), "dashboard started");

    loop {
        terminal.draw(|f| render::draw(f, dash))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key_action(key, dash),
                Event::Resize(width, height) => Some(resize_action(width, height)),
                _ => None,
            };
            if let Some(effect) = action.and_then(|a| dash.dispatch(a)) {
                handle_effect(dash, effect, config, session);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            dash.advance(start.elapsed());
            last_tick = Instant::now();
        }

        if dash.should_quit() {
            break;
        }
    }

    info!("dashboard closed");
    Ok(())
}

/// Open `--page` if given, otherwise the page stored by the last session
fn restore_start_page(
    dash: &mut Dashboard,
    config: &DashboardConfig,
    session: &SessionFile,
    initial_page: Option<&str>,
) -> Option<Page> {
    if let Some(fragment) = initial_page {
        let page = dash.restore(fragment);
        if page.is_none() {
            warn!(fragment, "ignoring unknown start page");
        }
        return page;
    }
    if !config.session.persist {
        return None;
    }
    let page = session.restore()?;
    dash.restore(&page.fragment())
}

/// The chart is laid out inside the terminal, so size it to its own area
fn resize_action(width: u16, height: u16) -> Action {
    let area = render::chart_area(Rect::new(0, 0, width, height));
    Action::Resize(area.width, area.height)
}

fn handle_effect(
    dash: &mut Dashboard,
    effect: Effect,
    config: &DashboardConfig,
    session: &SessionFile,
) {
    match effect {
        Effect::PersistPage(page) => {
            if config.session.persist {
                if let Err(e) = session.save(page) {
                    warn!(error = %e, "could not persist page");
                }
            }
        }
        Effect::Export(snapshot) => {
            let result = snapshot.write_to(&config.export.directory);
            if let Err(e) = &result {
                warn!(error = %e, "export failed");
            }
            dash.export_finished(&result);
        }
        Effect::Quit => {}
    }
}

fn key_action(key: KeyEvent, dash: &Dashboard) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        // Ctrl+C quits from any mode
        return (key.code == KeyCode::Char('c')).then_some(Action::Quit);
    }
    translate_key(key.code).and_then(|k| map_key(k, dash.input_mode()))
}

fn translate_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_c_quits_from_search() {
        let mut dash = Dashboard::new(&DashboardConfig::new().with_seed(1));
        dash.dispatch(Action::OpenSearch);
        assert_eq!(
            key_action(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &dash),
            Some(Action::Quit)
        );
        assert_eq!(
            key_action(press(KeyCode::Char('c'), KeyModifiers::NONE), &dash),
            Some(Action::SearchInput('c'))
        );
    }

    #[test]
    fn test_digit_keys_navigate() {
        let dash = Dashboard::new(&DashboardConfig::new().with_seed(1));
        assert_eq!(
            key_action(press(KeyCode::Char('5'), KeyModifiers::NONE), &dash),
            Some(Action::NavigateTo(Page::Langgraph))
        );
        assert_eq!(key_action(press(KeyCode::F(1), KeyModifiers::NONE), &dash), None);
    }

    fn stored_session(page: Page) -> (tempfile::TempDir, SessionFile) {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionFile::new(dir.path().join("session"));
        session.save(page).unwrap();
        (dir, session)
    }

    #[test]
    fn test_start_page_from_session() {
        let (_dir, session) = stored_session(Page::Rag);
        let config = DashboardConfig::new().with_seed(1);
        let mut dash = Dashboard::new(&config);
        assert_eq!(restore_start_page(&mut dash, &config, &session, None), Some(Page::Rag));
        assert_eq!(dash.page(), Page::Rag);
    }

    #[test]
    fn test_start_page_flag_beats_session() {
        let (_dir, session) = stored_session(Page::Rag);
        let config = DashboardConfig::new().with_seed(1);
        let mut dash = Dashboard::new(&config);
        assert_eq!(
            restore_start_page(&mut dash, &config, &session, Some("#security")),
            Some(Page::Security)
        );
        assert_eq!(dash.page(), Page::Security);
    }

    #[test]
    fn test_session_ignored_when_not_persisting() {
        let (_dir, session) = stored_session(Page::Rag);
        let mut config = DashboardConfig::new().with_seed(1);
        config.session.persist = false;
        let mut dash = Dashboard::new(&config);
        assert_eq!(restore_start_page(&mut dash, &config, &session, None), None);
        assert_eq!(dash.page(), Page::Dashboard);
    }

    #[test]
    fn test_resize_sizes_chart_to_its_area() {
        let mut dash = Dashboard::new(&DashboardConfig::new().with_seed(1));
        dash.dispatch(resize_action(140, 40));
        let viewport = dash.chart_viewport().unwrap();
        assert_eq!((viewport.width, viewport.height), (138, 24));
    }
}
