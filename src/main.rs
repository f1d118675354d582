mod army;
mod build_info;
mod character;
mod combat;
mod core;
mod gates;
mod input;
mod items;
mod ui;
mod utils;

use crate::core::constants::TICK_INTERVAL_MS;
use crate::core::game_state::GameState;
use crate::core::scheduler;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{handle_game_input, InputResult};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use ui::name_entry::NameEntryScreen;
use ui::{draw_ui, UiState};

enum Screen {
    NameEntry,
    Game,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut debug_mode = false;

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Arise - Terminal-Based Hunter RPG\n");
                println!("Usage: arise [option]\n");
                println!("Options:");
                println!("  --debug    Enable the debug menu (backtick to open)");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            "--debug" => {
                debug_mode = true;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'arise --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Screen state variables
    let mut current_screen = Screen::NameEntry;
    let mut name_screen = NameEntryScreen::new();
    let mut game_state: Option<GameState> = None;
    let mut ui_state = UiState::new(debug_mode);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        match current_screen {
            Screen::NameEntry => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    name_screen.draw(frame, area);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char(c) => {
                                name_screen.handle_char_input(c);
                            }
                            KeyCode::Backspace => {
                                name_screen.handle_backspace();
                            }
                            KeyCode::Enter => {
                                if name_screen.is_valid() {
                                    let name = name_screen.get_name();
                                    game_state = Some(GameState::new(&name));
                                    current_screen = Screen::Game;
                                }
                            }
                            KeyCode::Esc => break,
                            _ => {}
                        }
                    }
                }
            }

            Screen::Game => {
                // Take game state (it is always Some when we reach the Game screen)
                let mut state = game_state
                    .take()
                    .expect("game state is set before entering the Game screen");

                let mut rng = rand::thread_rng();
                let mut last_tick = Instant::now();

                loop {
                    // Draw UI
                    terminal.draw(|frame| {
                        draw_ui(frame, &state, &ui_state);
                    })?;

                    // Poll for input (50ms non-blocking)
                    if event::poll(Duration::from_millis(50))? {
                        if let Event::Key(key_event) = event::read()? {
                            match handle_game_input(key_event, &mut state, &mut ui_state, &mut rng)
                            {
                                InputResult::Continue => {}
                                InputResult::Quit => break,
                            }
                        }
                    }

                    // Game tick every 100ms
                    if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
                        let delta = TICK_INTERVAL_MS as f64 / 1000.0;
                        let events = scheduler::advance(&mut state, delta, &mut rng);
                        ui_state.note_events(&events);
                        ui_state.tick_banner(delta);
                        ui_state.clamp_cursors(&state);
                        last_tick = Instant::now();
                    }
                }

                break;
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye, Hunter.");

    Ok(())
}
