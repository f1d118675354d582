pub mod army_panel;
pub mod debug_menu_scene;
pub mod gate_scene;
pub mod inventory_panel;
pub mod log_panel;
pub mod name_entry;
pub mod shop_scene;
pub mod status_panel;

use crate::core::events::GameEvent;
use crate::core::game_state::{GameState, GateActivity};
use crate::gates::Rank;
use crate::items::catalog::get_shop_catalog;
use crate::items::types::{ItemCategory, ItemTemplate};
use crate::utils::debug_menu::DebugMenu;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// How long a banner announcement stays on screen.
const BANNER_SECONDS: f64 = 4.0;

/// The three left-hand panels, cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideTab {
    Status,
    Inventory,
    Army,
}

impl SideTab {
    pub fn title(self) -> &'static str {
        match self {
            SideTab::Status => "Status",
            SideTab::Inventory => "Inventory",
            SideTab::Army => "Army",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SideTab::Status => SideTab::Inventory,
            SideTab::Inventory => SideTab::Army,
            SideTab::Army => SideTab::Status,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SideTab::Status => SideTab::Army,
            SideTab::Inventory => SideTab::Status,
            SideTab::Army => SideTab::Inventory,
        }
    }
}

/// A transient announcement shown in the footer.
#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    pub color: Color,
    pub remaining: f64,
}

/// Everything about the screen that is not game state: cursors, the
/// open shop overlay, banners, and the debug menu.
pub struct UiState {
    pub tab: SideTab,
    pub stat_cursor: usize,
    pub inventory_cursor: usize,
    pub army_cursor: usize,
    pub shop_open: bool,
    pub shop_cursor: usize,
    pub shop_filter: Option<ItemCategory>,
    pub catalog: Vec<ItemTemplate>,
    pub banner: Option<Banner>,
    pub debug: DebugMenu,
    pub debug_mode: bool,
}

impl UiState {
    pub fn new(debug_mode: bool) -> Self {
        Self {
            tab: SideTab::Status,
            stat_cursor: 0,
            inventory_cursor: 0,
            army_cursor: 0,
            shop_open: false,
            shop_cursor: 0,
            shop_filter: None,
            catalog: get_shop_catalog(),
            banner: None,
            debug: DebugMenu::new(),
            debug_mode,
        }
    }

    /// Catalog rows matching the current filter, in catalog order.
    pub fn visible_shop_items(&self) -> Vec<&ItemTemplate> {
        self.catalog
            .iter()
            .filter(|template| {
                self.shop_filter
                    .map_or(true, |category| template.kind.category() == category)
            })
            .collect()
    }

    pub fn next_shop_filter(&mut self) {
        self.shop_filter = match self.shop_filter {
            None => Some(ItemCategory::Consumable),
            Some(ItemCategory::Consumable) => Some(ItemCategory::Weapon),
            Some(ItemCategory::Weapon) => Some(ItemCategory::Armor),
            Some(ItemCategory::Armor) => None,
        };
        self.shop_cursor = 0;
    }

    pub fn prev_shop_filter(&mut self) {
        self.shop_filter = match self.shop_filter {
            None => Some(ItemCategory::Armor),
            Some(ItemCategory::Armor) => Some(ItemCategory::Weapon),
            Some(ItemCategory::Weapon) => Some(ItemCategory::Consumable),
            Some(ItemCategory::Consumable) => None,
        };
        self.shop_cursor = 0;
    }

    pub fn set_banner(&mut self, text: String, color: Color) {
        self.banner = Some(Banner {
            text,
            color,
            remaining: BANNER_SECONDS,
        });
    }

    /// Promotes the headline moments out of an event batch into a
    /// banner. Later events in the batch win.
    pub fn note_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::GateCleared { exp, gold } => {
                    self.set_banner(
                        format!("GATE CLEARED  +{exp} EXP  +{gold} gold"),
                        Color::Green,
                    );
                }
                GameEvent::EmergencyRecovery { .. } => {
                    self.set_banner(
                        "FATAL DAMAGE! The System intervenes.".to_string(),
                        Color::Red,
                    );
                }
                GameEvent::LeveledUp { new_level } => {
                    self.set_banner(format!("LEVEL UP! You are now level {new_level}."), Color::Yellow);
                }
                GameEvent::Awakened { job } => {
                    self.set_banner(
                        format!("[JOB CHANGE] You have awakened: {}.", job.name()),
                        Color::Cyan,
                    );
                }
                GameEvent::ExtractionSucceeded { shadow_name } => {
                    self.set_banner(
                        format!("{shadow_name} rises from the dead."),
                        Color::Magenta,
                    );
                }
                _ => {}
            }
        }
    }

    /// Ages the current banner by one tick.
    pub fn tick_banner(&mut self, delta: f64) {
        if let Some(banner) = &mut self.banner {
            banner.remaining -= delta;
            if banner.remaining <= 0.0 {
                self.banner = None;
            }
        }
    }

    /// Keeps cursors inside their lists after items or shadows move.
    pub fn clamp_cursors(&mut self, game_state: &GameState) {
        let inventory_len = game_state.player.inventory.len();
        if self.inventory_cursor >= inventory_len {
            self.inventory_cursor = inventory_len.saturating_sub(1);
        }
        let army_len = game_state.player.shadows.len();
        if self.army_cursor >= army_len {
            self.army_cursor = army_len.saturating_sub(1);
        }
        let shop_len = self.visible_shop_items().len();
        if self.shop_cursor >= shop_len {
            self.shop_cursor = shop_len.saturating_sub(1);
        }
    }
}

/// The gauntlet color for each gate rank.
pub fn rank_color(rank: Rank) -> Color {
    match rank {
        Rank::E => Color::DarkGray,
        Rank::D => Color::Green,
        Rank::C => Color::Blue,
        Rank::B => Color::Magenta,
        Rank::A => Color::Red,
        Rank::S => Color::Yellow,
    }
}

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, game_state: &GameState, ui: &UiState) {
    let size = frame.size();

    // Split vertically: main content, full-width log, footer
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Side panel + gate scene
            Constraint::Length(9), // System log
            Constraint::Length(3), // Footer
        ])
        .split(size);

    // Split main content: side panel (left) and gate or shop (right)
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(v_chunks[0]);

    match ui.tab {
        SideTab::Status => status_panel::draw_status_panel(frame, chunks[0], game_state, ui),
        SideTab::Inventory => {
            inventory_panel::draw_inventory_panel(frame, chunks[0], game_state, ui)
        }
        SideTab::Army => army_panel::draw_army_panel(frame, chunks[0], game_state, ui),
    }

    if ui.shop_open {
        shop_scene::draw_shop(frame, chunks[1], game_state, ui);
    } else {
        gate_scene::draw_gate_scene(frame, chunks[1], game_state);
    }

    log_panel::draw_log_panel(frame, v_chunks[1], game_state);
    draw_footer(frame, v_chunks[2], game_state, ui);

    if ui.debug_mode {
        debug_menu_scene::render_debug_indicator(frame, size);
    }
    if ui.debug.is_open {
        debug_menu_scene::render_debug_menu(frame, size, &ui.debug);
    }
}

/// Draws the footer: a banner announcement when one is live, otherwise
/// the control hints for the current phase.
fn draw_footer(frame: &mut Frame, area: ratatui::layout::Rect, game_state: &GameState, ui: &UiState) {
    if let Some(banner) = &ui.banner {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            banner.text.clone(),
            Style::default()
                .fg(banner.color)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let hints = if ui.debug.is_open {
        "[Up/Down] Navigate  [Enter] Trigger  [`] Close"
    } else if ui.shop_open {
        "[Up/Down] Browse  [Left/Right] Filter  [Enter] Buy  [s] Close"
    } else {
        match &game_state.activity {
            GateActivity::Idle => {
                "[1-6] Enter Gate  [s] Shop  [Tab] Panel  [Up/Down/Enter] Panel Action  [q] Quit"
            }
            GateActivity::Combat(_) => "[Space] Attack  [Tab] Panel  [Up/Down/Enter] Panel Action",
            GateActivity::Victory(_) => "[e] Arise  [g] Leave Gate  [Tab] Panel",
        }
    };

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
