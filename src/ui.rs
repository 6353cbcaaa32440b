use anyhow::{Context, Result};
use creature_dex::{
    Browser, Category, CategoryFilter, Creature, CreatureDetail, LinkTemplates, RenderSink,
    ViewState,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;

const CARD_WIDTH: u16 = 20;
const CARD_HEIGHT: u16 = 4;
const PAGE_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Flags the app whenever the browser derives a new visible list
struct ListChanged(Rc<Cell<bool>>);

impl RenderSink for ListChanged {
    fn render(&mut self, _state: &ViewState, _visible: &[&Creature]) {
        self.0.set(true);
    }
}

pub struct App {
    pub browser: Browser,
    pub links: LinkTemplates,
    /// Index into the visible list
    pub selected: usize,
    /// First grid row on screen
    pub scroll_row: usize,
    /// Cards per row at the last draw
    pub columns: usize,
    pub show_detail: bool,
    pub input_mode: InputMode,
    /// 0 = "all", i + 1 = categories[i]
    pub category_cursor: usize,
    pub message: Option<String>,
    list_changed: Rc<Cell<bool>>,
}

impl App {
    pub fn new(browser: Browser, links: LinkTemplates) -> Self {
        let list_changed = Rc::new(Cell::new(false));
        let browser = browser.with_sink(Box::new(ListChanged(list_changed.clone())));
        list_changed.set(false);

        let category_cursor = match &browser.state().category {
            CategoryFilter::All => 0,
            CategoryFilter::Only(id) => browser
                .categories()
                .iter()
                .position(|c| &c.id == id)
                .map(|i| i + 1)
                .unwrap_or(0),
        };

        Self {
            browser,
            links,
            selected: 0,
            scroll_row: 0,
            columns: 1,
            show_detail: false,
            input_mode: InputMode::Normal,
            category_cursor,
            message: None,
            list_changed,
        }
    }

    pub fn visible_len(&self) -> usize {
        self.browser.visible_list().len()
    }

    pub fn selected_creature(&self) -> Option<&Creature> {
        self.browser.visible_list().get(self.selected).copied()
    }

    pub fn toggle_detail(&mut self) {
        if self.show_detail {
            self.show_detail = false;
        } else if self.selected_creature().is_some() {
            self.show_detail = true;
        }
    }

    /// Handle one key press. Returns false when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let keep_running = match self.input_mode {
            InputMode::Search => {
                self.handle_search_key(key);
                true
            }
            InputMode::Normal => self.handle_normal_key(key),
        };

        self.sync_selection();
        keep_running
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                let mut text = self.browser.state().search_text.clone();
                text.pop();
                self.browser.set_search_text(text);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.browser.set_search_text("");
            }
            KeyCode::Char(c) if (key.modifiers - KeyModifiers::SHIFT).is_empty() => {
                let mut text = self.browser.state().search_text.clone();
                text.push(c);
                self.browser.set_search_text(text);
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        if self.show_detail {
            match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => self.show_detail = false,
                _ => {}
            }
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Enter => self.toggle_detail(),
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Tab => self.cycle_category(true),
            KeyCode::BackTab => self.cycle_category(false),
            KeyCode::Char('a') => self.select_category(0),
            KeyCode::Char('s') => self.browser.toggle_sort(),
            KeyCode::Char('c') => {
                self.browser.reset();
                self.category_cursor = 0;
            }
            KeyCode::Right | KeyCode::Char('l') => self.move_by(1),
            KeyCode::Left | KeyCode::Char('h') => self.move_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(self.columns as isize),
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-(self.columns as isize)),
            KeyCode::PageDown => self.move_by((self.columns * PAGE_ROWS) as isize),
            KeyCode::PageUp => self.move_by(-((self.columns * PAGE_ROWS) as isize)),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.visible_len().saturating_sub(1),
            _ => {}
        }

        true
    }

    fn cycle_category(&mut self, forward: bool) {
        let options = self.browser.categories().len() + 1;
        let next = if forward {
            (self.category_cursor + 1) % options
        } else {
            (self.category_cursor + options - 1) % options
        };
        self.select_category(next);
    }

    fn select_category(&mut self, cursor: usize) {
        let filter = match cursor {
            0 => CategoryFilter::All,
            i => match self.browser.categories().get(i - 1) {
                Some(category) => CategoryFilter::Only(category.id.clone()),
                None => return,
            },
        };

        match self.browser.set_active_category(filter) {
            Ok(()) => {
                self.category_cursor = cursor;
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn move_by(&mut self, delta: isize) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }

    /// New list → back to the first card
    fn sync_selection(&mut self) {
        if self.list_changed.replace(false) {
            self.selected = 0;
            self.scroll_row = 0;
            if self.selected_creature().is_none() {
                self.show_detail = false;
            }
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal event loop failed")
}

fn run_app<B, E>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: E) -> io::Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = next_event()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Category buttons
            Constraint::Length(3), // Search + sort
            Constraint::Min(0),    // Card grid
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_categories(f, chunks[0], app);
    render_search_bar(f, chunks[1], app);
    render_grid(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);

    if app.show_detail {
        render_detail_overlay(f, f.size(), app);
    }
}

fn category_color(category: &Category) -> Color {
    category
        .rgb()
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

fn render_categories(f: &mut Frame, area: Rect, app: &App) {
    let active_style = Style::default()
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![];
    let all_style = if app.category_cursor == 0 {
        active_style.bg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    spans.push(Span::styled(" すべて ", all_style));

    for (i, category) in app.browser.categories().iter().enumerate() {
        spans.push(Span::raw(" "));
        let style = if app.category_cursor == i + 1 {
            active_style.bg(category_color(category))
        } else {
            Style::default().fg(category_color(category))
        };
        spans.push(Span::styled(format!(" {} ", category.display_label()), style));
    }

    let header = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Types (Tab / Shift-Tab) "),
        );

    f.render_widget(header, area);
}

fn render_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let state = app.browser.state();
    let searching = app.input_mode == InputMode::Search;

    let mut spans = vec![
        Span::styled("🔍 ", Style::default().fg(Color::Cyan)),
        Span::styled(
            state.search_text.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];
    if searching {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    } else if state.search_text.is_empty() {
        spans.push(Span::styled(
            "press / to search by name",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
    }
    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(state.sort.label(), Style::default().fg(Color::Green)));
    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(
        format!("{} / {}", app.visible_len(), app.browser.catalog().len()),
        Style::default().fg(Color::White),
    ));

    let border = if searching { Color::Yellow } else { Color::White };
    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );

    f.render_widget(bar, area);
}

fn render_grid(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Creatures ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = usize::from((inner.width / CARD_WIDTH).max(1));
    let rows_on_screen = usize::from((inner.height / CARD_HEIGHT).max(1));
    app.columns = columns;

    // keep the selected card on screen
    let selected_row = app.selected / columns;
    if selected_row < app.scroll_row {
        app.scroll_row = selected_row;
    } else if selected_row >= app.scroll_row + rows_on_screen {
        app.scroll_row = selected_row + 1 - rows_on_screen;
    }

    let visible = app.browser.visible_list();
    if visible.is_empty() {
        let empty = Paragraph::new("該当なし - no creatures match")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
        f.render_widget(empty, inner);
        return;
    }

    let registry = app.browser.category_registry();
    let first = app.scroll_row * columns;
    let last = (first + rows_on_screen * columns).min(visible.len());

    for (offset, creature) in visible[first..last].iter().enumerate() {
        let index = first + offset;
        let col = (offset % columns) as u16;
        let row = (offset / columns) as u16;
        let card_area = Rect {
            x: inner.x + col * CARD_WIDTH,
            y: inner.y + row * CARD_HEIGHT,
            width: CARD_WIDTH.min(inner.width),
            height: CARD_HEIGHT,
        }
        .intersection(inner);
        if card_area.area() == 0 {
            continue;
        }

        let is_selected = index == app.selected;
        let border_color = if is_selected {
            Color::Yellow
        } else {
            creature
                .types()
                .first()
                .and_then(|t| registry.find_by_id(t))
                .map(category_color)
                .unwrap_or(Color::DarkGray)
        };

        let name_style = if is_selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let content = vec![
            Line::from(Span::styled(
                creature.dex_number(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(truncate(creature.name(), 8), name_style)),
        ];

        let card = Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );

        f.render_widget(card, card_area);
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let total = app.visible_len();
    let selected = if total == 0 { 0 } else { app.selected + 1 };

    let mut status_spans = vec![Span::styled(
        format!(" Card: {}/{} ", selected, total),
        Style::default().fg(Color::Cyan),
    )];

    // Show filter status if active
    if let Some(summary) = filter_summary(app.browser.state()) {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(summary, Style::default().fg(Color::Green)));
        status_spans.push(Span::raw(" ("));
        status_spans.push(Span::styled("c", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" clear)"));
    }

    if let Some(message) = &app.message {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(message.clone(), Style::default().fg(Color::Red)));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Details | "));
    status_spans.push(Span::styled("/", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Search | "));
    status_spans.push(Span::styled("s", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Sort | "));
    status_spans.push(Span::styled("←↑↓→", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Nav | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

/// "Type: fire", "Search: ひ", both, or None when nothing narrows the list
fn filter_summary(state: &ViewState) -> Option<String> {
    if state.is_unfiltered() {
        return None;
    }

    let mut parts = vec![];
    if let CategoryFilter::Only(id) = &state.category {
        parts.push(format!("Type: {}", id));
    }
    if !state.search_text.is_empty() {
        parts.push(format!("Search: {}", state.search_text));
    }
    Some(parts.join(", "))
}

fn render_detail_overlay(f: &mut Frame, area: Rect, app: &App) {
    let creature = match app.selected_creature() {
        Some(c) => c,
        None => return,
    };
    let registry = app.browser.category_registry();
    let detail = CreatureDetail::new(creature, registry, &app.links);

    let label_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut chips = vec![Span::raw("  ")];
    for (id, label) in detail.type_ids.iter().zip(&detail.type_labels) {
        let bg = registry.find_by_id(id).map(category_color).unwrap_or(Color::Gray);
        chips.push(Span::styled(
            format!(" {} ", label),
            Style::default().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD),
        ));
        chips.push(Span::raw(" "));
    }

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", detail.info_line),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", detail.name),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(chips),
        Line::from(""),
        Line::from("  ─────────────────────────────────────"),
        Line::from(""),
        Line::from(vec![Span::styled("  Image:  ", label_style), Span::raw(detail.image_url)]),
        Line::from(vec![Span::styled("  Search: ", label_style), Span::raw(detail.search_url)]),
        Line::from(vec![Span::styled("  Wiki:   ", label_style), Span::raw(detail.wiki_url)]),
        Line::from(vec![Span::styled("  Video:  ", label_style), Span::raw(detail.video_url)]),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Enter or Esc to close",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    ];

    let popup = centered_rect(70, 60, area);
    let panel = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Details "),
        );

    f.render_widget(Clear, popup);
    f.render_widget(panel, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Truncate to `max_chars` characters (not bytes - names are multi-byte)
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creature_dex::{CatalogBuilder, CategoryRegistry, Generation, RawCreature, SortDirection};
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let categories = CategoryRegistry::with_defaults();
        let mut builder = CatalogBuilder::new(&categories);
        builder
            .add_partition(
                Generation::Gen1,
                vec![
                    RawCreature::new(1, "フシギダネ", &["grass", "poison"]),
                    RawCreature::new(4, "ヒトカゲ", &["fire"]),
                    RawCreature::new(7, "ゼニガメ", &["water"]),
                    RawCreature::new(25, "ピカチュウ", &["electric"]),
                ],
            )
            .unwrap();
        let catalog = builder.build().unwrap();
        App::new(Browser::new(catalog, categories), LinkTemplates::default())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_search_mode_types_into_browser() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);

        type_text(&mut app, "ぴか");
        assert_eq!(app.browser.state().search_text, "ぴか");
        assert_eq!(app.visible_len(), 1);
        assert_eq!(app.selected_creature().unwrap().id(), 25);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.browser.state().search_text, "ぴ");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_q_in_search_mode_is_text() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert!(press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.browser.state().search_text, "q");
    }

    #[test]
    fn test_category_cycle_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.browser.state().category, CategoryFilter::parse("grass"));
        assert_eq!(app.visible_len(), 1);

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.browser.state().category, CategoryFilter::parse("fairy"));
        assert_eq!(app.visible_len(), 0);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.browser.state().category, CategoryFilter::All);
        assert_eq!(app.category_cursor, 0);
    }

    #[test]
    fn test_selection_resets_when_list_changes() {
        let mut app = app();
        press(&mut app, KeyCode::End);
        assert_eq!(app.selected, 3);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.browser.state().sort, SortDirection::Descending);
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_creature().unwrap().id(), 25);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut app = app();
        app.columns = 2;
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected, 0);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 2);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 3);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected, 3);
    }

    #[test]
    fn test_detail_open_and_close() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.show_detail);

        // q closes the overlay instead of quitting
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(!app.show_detail);

        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_detail_not_opened_on_empty_list() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Enter);
        assert!(!app.show_detail);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('c'));

        assert_eq!(app.browser.state(), &ViewState::new());
        assert_eq!(app.category_cursor, 0);
        assert_eq!(app.visible_len(), 4);
    }

    #[test]
    fn test_modified_chars_not_typed_into_search() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.browser.state().search_text, "");

        app.handle_key(KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT));
        assert_eq!(app.browser.state().search_text, "P");
    }

    #[test]
    fn test_filter_summary() {
        let mut state = ViewState::new();
        assert_eq!(filter_summary(&state), None);

        state.search_text = "ひ".to_string();
        assert_eq!(filter_summary(&state), Some("Search: ひ".to_string()));

        state.category = CategoryFilter::parse("fire");
        assert_eq!(filter_summary(&state), Some("Type: fire, Search: ひ".to_string()));

        state.search_text.clear();
        assert_eq!(filter_summary(&state), Some("Type: fire".to_string()));
    }

    #[test]
    fn test_event_loop_error_is_returned() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        let result = run_app(&mut terminal, &mut app, || {
            Err(io::Error::new(io::ErrorKind::Other, "tty gone"))
        });

        assert_eq!(result.unwrap_err().to_string(), "tty gone");
    }

    #[test]
    fn test_event_loop_quits_on_q() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut keys = vec![KeyCode::Char('q'), KeyCode::Char('s')];

        let result = run_app(&mut terminal, &mut app, || {
            let code = keys.pop().unwrap_or(KeyCode::Char('q'));
            Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        });

        assert!(result.is_ok());
        assert_eq!(app.browser.state().sort, SortDirection::Descending);
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ピカチュウ", 8), "ピカチュウ");
        assert_eq!(truncate("ガラル・ヒスイ地方", 5), "ガラル・…");
    }
}
