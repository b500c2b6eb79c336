//! Terminal picker for the word category.
//!
//! Renders the region and subregion menus with Ratatui before the game
//! itself drops back to plain line-based I/O.
//!
//! # State Machine
//! - `ChoosingRegion` → `ChoosingSubregion` (regions with named subregions)
//! - `ChoosingRegion` → done ("World" and the unclassified "Other" bucket)
//! - Esc/q cancels from either menu and ends the program gracefully.

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::io;

use crate::wordset::{Country, RegionIndex, Selection};

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const HIGHLIGHT_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Display label for the dataset's empty region/subregion buckets.
const OTHER_LABEL: &str = "Other";

#[derive(Debug)]
enum PickerState {
    ChoosingRegion,
    ChoosingSubregion { region: String },
}

struct MenuEntry {
    label: String,
    selection: Selection,
}

enum Step {
    Done(Selection),
    Cancelled,
}

/// Shows the category menus and returns the player's choice.
///
/// Returns `Ok(None)` when the player cancels. The terminal is restored
/// before returning, whatever happens inside the event loop.
pub fn pick_selection(countries: &[Country]) -> Result<Option<Selection>, io::Error> {
    let index = RegionIndex::build(countries);
    let mut picker = Picker::new(index)?;
    let outcome = picker.run();
    picker.cleanup()?;
    match outcome? {
        Step::Done(selection) => Ok(Some(selection)),
        Step::Cancelled => Ok(None),
    }
}

struct Picker {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    index: RegionIndex,
    state: PickerState,
    entries: Vec<MenuEntry>,
    list_state: ListState,
}

impl Picker {
    fn new(index: RegionIndex) -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let entries = region_entries(&index);
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Ok(Self {
            terminal,
            index,
            state: PickerState::ChoosingRegion,
            entries,
            list_state,
        })
    }

    fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn run(&mut self) -> Result<Step, io::Error> {
        loop {
            self.draw()?;
            if let Some(step) = self.handle_input()? {
                return Ok(step);
            }
        }
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let title = match &self.state {
            PickerState::ChoosingRegion => "Choose region".to_string(),
            PickerState::ChoosingSubregion { region } => {
                format!("Choose subregion of {}", display_name(region))
            }
        };
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| ListItem::new(entry.label.clone()))
            .collect();
        let list_state = &mut self.list_state;

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(5),
                    Constraint::Length(3),
                ])
                .split(f.area());

            let header = Paragraph::new("HANGMAN")
                .style(HEADER_STYLE)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(header, chunks[0]);

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title))
                .highlight_style(HIGHLIGHT_STYLE)
                .highlight_symbol("> ");
            f.render_stateful_widget(list, chunks[1], list_state);

            render_instructions(f, chunks[2]);
        })?;
        Ok(())
    }

    fn handle_input(&mut self) -> Result<Option<Step>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        // Release/Repeat would double up on Windows terminals.
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                Ok(None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                Ok(None)
            }
            KeyCode::Enter => Ok(self.confirm()),
            KeyCode::Esc | KeyCode::Char('q') => {
                log::info!("category picker cancelled");
                Ok(Some(Step::Cancelled))
            }
            _ => Ok(None),
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.entries.len() as isize;
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len);
        self.list_state.select(Some(next as usize));
    }

    fn confirm(&mut self) -> Option<Step> {
        let cursor = self.list_state.selected().unwrap_or(0);
        let selection = self.entries.get(cursor)?.selection.clone();

        match (&self.state, &selection) {
            // Drill into regions that carry named subregions; everything
            // else is already a final choice.
            (PickerState::ChoosingRegion, Selection::Region(region))
                if has_named_subregions(&self.index, region) =>
            {
                self.entries = subregion_entries(&self.index, region);
                self.state = PickerState::ChoosingSubregion {
                    region: region.clone(),
                };
                self.list_state.select(Some(0));
                None
            }
            _ => {
                log::debug!("picker selected {selection:?}");
                Some(Step::Done(selection))
            }
        }
    }
}

fn display_name(region: &str) -> &str {
    if region.is_empty() { OTHER_LABEL } else { region }
}

fn has_named_subregions(index: &RegionIndex, region: &str) -> bool {
    !region.is_empty()
        && index
            .regions
            .get(region)
            .is_some_and(|entry| entry.subregions.keys().any(|s| !s.is_empty()))
}

fn region_entries(index: &RegionIndex) -> Vec<MenuEntry> {
    let mut entries = vec![MenuEntry {
        label: format!("World ({})", index.total),
        selection: Selection::World,
    }];
    for (region, entry) in &index.regions {
        entries.push(MenuEntry {
            label: format!("{} ({})", display_name(region), entry.count),
            selection: Selection::Region(region.clone()),
        });
    }
    entries
}

fn subregion_entries(index: &RegionIndex, region: &str) -> Vec<MenuEntry> {
    let Some(region_entry) = index.regions.get(region) else {
        return Vec::new();
    };
    let mut entries = vec![MenuEntry {
        label: format!("All ({})", region_entry.count),
        selection: Selection::Region(region.to_string()),
    }];
    for (subregion, count) in &region_entry.subregions {
        entries.push(MenuEntry {
            label: format!("{} ({count})", display_name(subregion)),
            selection: Selection::Subregion(subregion.clone()),
        });
    }
    entries
}

fn render_instructions(f: &mut Frame, area: ratatui::layout::Rect) {
    let instructions = Paragraph::new("Up/Down: move | Enter: select | Esc/q: quit")
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(instructions, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordset::{CountryName, RegionIndex};

    fn index() -> RegionIndex {
        let countries = vec![
            Country {
                name: CountryName {
                    common: "France".to_string(),
                },
                region: "Europe".to_string(),
                subregion: "Western Europe".to_string(),
            },
            Country {
                name: CountryName {
                    common: "Spain".to_string(),
                },
                region: "Europe".to_string(),
                subregion: "Southern Europe".to_string(),
            },
            Country {
                name: CountryName {
                    common: "Antarctica".to_string(),
                },
                region: "Antarctic".to_string(),
                subregion: String::new(),
            },
        ];
        RegionIndex::build(&countries)
    }

    #[test]
    fn test_region_menu_starts_with_world() {
        let entries = region_entries(&index());
        assert_eq!(entries[0].label, "World (3)");
        assert_eq!(entries[0].selection, Selection::World);
        assert!(entries.iter().any(|e| e.label == "Europe (2)"));
    }

    #[test]
    fn test_subregion_menu_starts_with_all() {
        let entries = subregion_entries(&index(), "Europe");
        assert_eq!(entries[0].label, "All (2)");
        assert_eq!(entries[0].selection, Selection::Region("Europe".to_string()));
        assert!(
            entries
                .iter()
                .any(|e| e.selection == Selection::Subregion("Western Europe".to_string()))
        );
    }

    #[test]
    fn test_regions_without_named_subregions_skip_the_second_menu() {
        let index = index();
        assert!(has_named_subregions(&index, "Europe"));
        assert!(!has_named_subregions(&index, "Antarctic"));
        assert!(!has_named_subregions(&index, ""));
    }
}
