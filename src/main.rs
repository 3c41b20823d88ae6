use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::core::constants::{CONFIG_FILE, HIGH_SCORE_FILE, LOG_FILE};
use flappy::input::{map_key, TickInput};
use flappy::round::RoundSnapshot;
use flappy::ui::{render_game_over, render_round, render_title, Background, Viewport};
use flappy::utils::logging::init_file_logger;
use flappy::utils::persistence::{data_path, load_json_or_default};
use flappy::{GameConfig, HighScoreStore, RoundEngine};
use log::LevelFilter;
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

enum Screen {
    Title,
    Playing,
    GameOver { ticks_shown: u32 },
}

fn main() -> io::Result<()> {
    // The terminal is not in raw mode yet, so stderr is still readable.
    match data_path(LOG_FILE) {
        Ok(path) => {
            if let Err(e) = init_file_logger(&path, LevelFilter::Info) {
                eprintln!("Logging disabled: cannot open {}: {}", path.display(), e);
            }
        }
        Err(e) => eprintln!("Logging disabled: no data dir: {}", e),
    }

    let config: GameConfig = match data_path(CONFIG_FILE) {
        Ok(path) => load_json_or_default(&path),
        Err(_) => GameConfig::default(),
    };
    log::info!("starting with {:?}", config);

    let store = HighScoreStore::open_default().unwrap_or_else(|e| {
        log::warn!("no data dir ({}), using ./{}", e, HIGH_SCORE_FILE);
        HighScoreStore::at(HIGH_SCORE_FILE)
    });
    let high_score = store.load();
    log::info!("loaded high score {} from {}", high_score, store.path().display());

    let engine = match RoundEngine::new(config, high_score) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("rejected configuration: {}", e);
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, engine, &store);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("shutting down");
    result
}

/// Title → rounds → game over, one fixed-rate tick at a time, until quit.
fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut engine: RoundEngine,
    store: &HighScoreStore,
) -> io::Result<()> {
    let config = engine.config().clone();
    let tick_interval = config.tick_interval();
    // Keys pressed right after a crash should not skip the game-over screen.
    let restart_grace_ticks = config.tick_rate / 2;
    let viewport = Viewport {
        width: config.viewport_width,
        height: config.viewport_height,
    };

    let mut background = Background::new(&config);
    let mut saved_high_score = engine.state().high_score;
    let mut screen = Screen::Title;
    let mut input = TickInput::default();
    let mut snapshot = RoundSnapshot::default();
    let mut next_tick = Instant::now() + tick_interval;

    loop {
        engine.snapshot_into(&mut snapshot);
        terminal.draw(|frame| {
            let area = frame.size();
            match screen {
                Screen::Title => {
                    render_title(frame, area, snapshot.high_score, &background, viewport)
                }
                Screen::Playing => render_round(frame, area, &snapshot, &background, viewport),
                Screen::GameOver { .. } => render_game_over(
                    frame,
                    area,
                    &snapshot,
                    &background,
                    viewport,
                    engine.over_cause(),
                ),
            }
        })?;

        // Gather input until the next tick is due
        loop {
            let now = Instant::now();
            if now >= next_tick {
                break;
            }
            if event::poll(next_tick - now)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(game_input) = map_key(key) {
                        input.record(game_input);
                    }
                }
            }
        }
        next_tick += tick_interval;
        let now = Instant::now();
        if next_tick < now {
            // Fell behind (suspended terminal, slow draw): don't try to catch up.
            next_tick = now + tick_interval;
        }

        if input.quit {
            break;
        }

        let next_screen = match &mut screen {
            Screen::Title => {
                background.advance();
                if input.take_jump() {
                    engine.reset();
                    log::info!("round started");
                    Some(Screen::Playing)
                } else {
                    None
                }
            }
            Screen::Playing => {
                engine.apply_input(input.take_jump());
                let state = engine.update();
                background.advance();
                if state.alive {
                    None
                } else {
                    log::info!(
                        "round over ({:?}) after {} ticks: score {}, high score {}",
                        engine.over_cause(),
                        engine.tick_count(),
                        state.score,
                        state.high_score
                    );
                    match store.save(state.high_score) {
                        Ok(()) => saved_high_score = state.high_score,
                        Err(e) => log::warn!("failed to save high score: {}", e),
                    }
                    Some(Screen::GameOver { ticks_shown: 0 })
                }
            }
            Screen::GameOver { ticks_shown } => {
                let jump = input.take_jump();
                if *ticks_shown < restart_grace_ticks {
                    *ticks_shown += 1;
                    None
                } else if jump {
                    engine.reset();
                    log::info!("round restarted");
                    Some(Screen::Playing)
                } else {
                    None
                }
            }
        };
        if let Some(next) = next_screen {
            screen = next;
        }
    }

    // Quitting mid-round can still leave a new best behind.
    let high_score = engine.state().high_score;
    if high_score > saved_high_score {
        if let Err(e) = store.save(high_score) {
            log::warn!("failed to save high score on exit: {}", e);
        }
    }
    Ok(())
}
