use crate::content::{investing, tips, GlossaryCatalog, InvestmentGuide, QuestionBank, TipTicker};
use crate::emi::{self, format_inr, LoanInput, LoanResult, ValidationError};
use crate::quiz::QuizRound;
use crate::store::{self, Theme};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use rusqlite::Connection;
use std::io;
use std::time::{Duration, Instant};

/// Rotation interval for the daily-tip banner
const TIP_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Glossary,
    Savings,
    Investing,
    Calculator,
    Quiz,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Glossary,
        Page::Savings,
        Page::Investing,
        Page::Calculator,
        Page::Quiz,
    ];

    pub fn next(&self) -> Self {
        match self {
            Page::Home => Page::Glossary,
            Page::Glossary => Page::Savings,
            Page::Savings => Page::Investing,
            Page::Investing => Page::Calculator,
            Page::Calculator => Page::Quiz,
            Page::Quiz => Page::Home,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Home => Page::Quiz,
            Page::Glossary => Page::Home,
            Page::Savings => Page::Glossary,
            Page::Investing => Page::Savings,
            Page::Calculator => Page::Investing,
            Page::Quiz => Page::Calculator,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Home => "Home",
            Page::Glossary => "Glossary",
            Page::Savings => "Savings",
            Page::Investing => "Investing",
            Page::Calculator => "EMI Calculator",
            Page::Quiz => "Quiz",
        }
    }
}

// ============================================================================
// CALCULATOR STATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcField {
    Principal,
    Rate,
    Tenure,
}

impl CalcField {
    pub fn next(&self) -> Self {
        match self {
            CalcField::Principal => CalcField::Rate,
            CalcField::Rate => CalcField::Tenure,
            CalcField::Tenure => CalcField::Principal,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            CalcField::Principal => CalcField::Tenure,
            CalcField::Rate => CalcField::Principal,
            CalcField::Tenure => CalcField::Rate,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CalcField::Principal => "Principal Amount (₹)",
            CalcField::Rate => "Interest Rate (% per annum)",
            CalcField::Tenure => "Tenure (years)",
        }
    }
}

/// Editable input buffers for the calculator, re-parsed on every keystroke
#[derive(Debug, Clone)]
pub struct CalculatorState {
    pub principal_input: String,
    pub rate_input: String,
    pub tenure_input: String,
    pub focus: CalcField,
}

impl CalculatorState {
    pub fn new() -> Self {
        let defaults = LoanInput::default();
        CalculatorState {
            principal_input: format!("{:.0}", defaults.principal),
            rate_input: format!("{}", defaults.annual_rate),
            tenure_input: format!("{}", defaults.tenure_years),
            focus: CalcField::Principal,
        }
    }

    pub fn buffer(&self, field: CalcField) -> &str {
        match field {
            CalcField::Principal => &self.principal_input,
            CalcField::Rate => &self.rate_input,
            CalcField::Tenure => &self.tenure_input,
        }
    }

    fn buffer_mut(&mut self) -> &mut String {
        match self.focus {
            CalcField::Principal => &mut self.principal_input,
            CalcField::Rate => &mut self.rate_input,
            CalcField::Tenure => &mut self.tenure_input,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let is_decimal_point = c == '.' && self.focus != CalcField::Tenure;
        if !c.is_ascii_digit() && !is_decimal_point {
            return;
        }
        let buffer = self.buffer_mut();
        if buffer.len() < 10 {
            buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer_mut().pop();
    }

    /// Parse the three buffers into a LoanInput, one error per bad field
    pub fn parse(&self) -> Result<LoanInput, Vec<ValidationError>> {
        let principal = self.principal_input.trim().parse::<f64>();
        let rate = self.rate_input.trim().parse::<f64>();
        let tenure = self.tenure_input.trim().parse::<u32>();

        match (principal, rate, tenure) {
            (Ok(principal), Ok(annual_rate), Ok(tenure_years)) => Ok(LoanInput {
                principal,
                annual_rate,
                tenure_years,
            }),
            (principal, rate, tenure) => {
                let mut errors = Vec::new();
                if principal.is_err() {
                    errors.push(ValidationError {
                        field: "principal".to_string(),
                        message: "enter a number".to_string(),
                    });
                }
                if rate.is_err() {
                    errors.push(ValidationError {
                        field: "annual_rate".to_string(),
                        message: "enter a number".to_string(),
                    });
                }
                if tenure.is_err() {
                    errors.push(ValidationError {
                        field: "tenure_years".to_string(),
                        message: "enter a whole number of years".to_string(),
                    });
                }
                Err(errors)
            }
        }
    }

    /// Derived repayment figures for the current buffers
    pub fn result(&self) -> Result<LoanResult, Vec<ValidationError>> {
        self.parse().and_then(|input| emi::compute(&input))
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub theme: Theme,
    pub current_page: Page,
    pub show_help: bool,

    pub glossary: GlossaryCatalog,
    pub glossary_state: TableState,
    pub glossary_expanded: bool,

    pub savings: crate::content::TipCatalog,
    pub ticker: TipTicker,

    pub guide: InvestmentGuide,

    pub calculator: CalculatorState,

    pub quiz: QuizRound,
    pub quiz_cursor: usize,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        let glossary = GlossaryCatalog::new();
        let mut glossary_state = TableState::default();
        if !glossary.is_empty() {
            glossary_state.select(Some(0));
        }

        App {
            theme,
            current_page: Page::Home,
            show_help: false,
            glossary,
            glossary_state,
            glossary_expanded: false,
            savings: crate::content::TipCatalog::new(),
            ticker: TipTicker::new(tips::daily_tips().len()),
            guide: InvestmentGuide::new(),
            calculator: CalculatorState::new(),
            quiz: QuizRound::new(QuestionBank::new().questions().to_vec()),
            quiz_cursor: 0,
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// One banner tick: advance the rotating daily tip
    pub fn tick(&mut self) {
        self.ticker.advance();
    }

    // ------------------------------------------------------------------
    // Glossary
    // ------------------------------------------------------------------

    pub fn glossary_next(&mut self) {
        let len = self.glossary.len();
        if len == 0 {
            return;
        }
        let i = match self.glossary_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.glossary_state.select(Some(i));
    }

    pub fn glossary_previous(&mut self) {
        let len = self.glossary.len();
        if len == 0 {
            return;
        }
        let i = match self.glossary_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.glossary_state.select(Some(i));
    }

    /// Expand or collapse the selected term's definition panel
    pub fn glossary_toggle(&mut self) {
        if self.glossary_state.selected().is_some() {
            self.glossary_expanded = !self.glossary_expanded;
        }
    }

    pub fn selected_term(&self) -> Option<&crate::content::GlossaryTerm> {
        self.glossary_state
            .selected()
            .and_then(|i| self.glossary.terms().get(i))
    }

    // ------------------------------------------------------------------
    // Quiz
    // ------------------------------------------------------------------

    pub fn quiz_cursor_down(&mut self) {
        if self.quiz.is_revealed() || self.quiz.is_completed() {
            return;
        }
        if let Some(question) = self.quiz.current_question() {
            self.quiz_cursor = (self.quiz_cursor + 1) % question.options.len();
        }
    }

    pub fn quiz_cursor_up(&mut self) {
        if self.quiz.is_revealed() || self.quiz.is_completed() {
            return;
        }
        if let Some(question) = self.quiz.current_question() {
            let len = question.options.len();
            self.quiz_cursor = (self.quiz_cursor + len - 1) % len;
        }
    }

    /// Enter on the quiz page: answer first, then advance past the reveal
    pub fn quiz_confirm(&mut self) {
        if self.quiz.is_completed() {
            return;
        }
        if self.quiz.is_revealed() {
            self.quiz.advance();
            self.quiz_cursor = 0;
        } else {
            self.quiz.select(self.quiz_cursor);
        }
    }
}

// ============================================================================
// THEME PALETTE
// ============================================================================

struct Palette {
    bg: Color,
    text: Color,
    dim: Color,
    accent: Color,
    title: Color,
    border: Color,
    banner_bg: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            bg: Color::Black,
            text: Color::White,
            dim: Color::DarkGray,
            accent: Color::Green,
            title: Color::Yellow,
            border: Color::Cyan,
            banner_bg: Color::DarkGray,
        },
        Theme::Light => Palette {
            bg: Color::White,
            text: Color::Black,
            dim: Color::Gray,
            accent: Color::Green,
            title: Color::Blue,
            border: Color::Black,
            banner_bg: Color::LightGreen,
        },
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

pub fn run_ui(app: &mut App, conn: &Connection) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app; the tip timer lives and dies with this call
    let res = run_app(&mut terminal, app, conn);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    conn: &Connection,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        // Wait for input, but wake up in time for the next banner tick
        let timeout = TIP_INTERVAL.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if app.show_help {
                    match key.code {
                        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
                            app.show_help = false;
                        }
                        _ => {}
                    }
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('?') => app.toggle_help(),
                    KeyCode::Char('d') => {
                        app.toggle_theme();
                        // Written on every toggle, read back at next startup
                        store::save_theme(conn, app.theme)?;
                    }
                    KeyCode::Tab => {
                        if key.modifiers.contains(KeyModifiers::SHIFT) {
                            app.previous_page();
                        } else {
                            app.next_page();
                        }
                    }
                    KeyCode::BackTab => app.previous_page(),

                    // Number keys jump straight to a section from Home,
                    // mirroring the in-page anchors of the original site
                    KeyCode::Char(c @ '1'..='6') if app.current_page == Page::Home => {
                        let idx = c as usize - '1' as usize;
                        app.current_page = Page::ALL[idx];
                    }

                    KeyCode::Down | KeyCode::Char('j')
                        if app.current_page != Page::Calculator =>
                    {
                        match app.current_page {
                            Page::Glossary => app.glossary_next(),
                            Page::Quiz => app.quiz_cursor_down(),
                            _ => {}
                        }
                    }
                    KeyCode::Up | KeyCode::Char('k')
                        if app.current_page != Page::Calculator =>
                    {
                        match app.current_page {
                            Page::Glossary => app.glossary_previous(),
                            Page::Quiz => app.quiz_cursor_up(),
                            _ => {}
                        }
                    }
                    KeyCode::Down if app.current_page == Page::Calculator => {
                        app.calculator.focus = app.calculator.focus.next();
                    }
                    KeyCode::Up if app.current_page == Page::Calculator => {
                        app.calculator.focus = app.calculator.focus.previous();
                    }
                    KeyCode::Enter => match app.current_page {
                        Page::Glossary => app.glossary_toggle(),
                        Page::Quiz => app.quiz_confirm(),
                        _ => {}
                    },
                    KeyCode::Backspace if app.current_page == Page::Calculator => {
                        app.calculator.backspace();
                    }
                    KeyCode::Char(c) if app.current_page == Page::Calculator => {
                        app.calculator.push_char(c);
                    }
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= TIP_INTERVAL {
            app.tick();
            last_tick = Instant::now();
        }
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

fn ui(f: &mut Frame, app: &mut App) {
    let p = palette(app.theme);

    // Paint the themed background before anything else
    f.render_widget(
        Block::default().style(Style::default().bg(p.bg).fg(p.text)),
        f.size(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Length(3), // Rotating daily-tip banner
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_tip_banner(f, chunks[1], app);

    match app.current_page {
        Page::Home => render_home(f, chunks[2], app),
        Page::Glossary => render_glossary(f, chunks[2], app),
        Page::Savings => render_savings(f, chunks[2], app),
        Page::Investing => render_investing(f, chunks[2], app),
        Page::Calculator => render_calculator(f, chunks[2], app),
        Page::Quiz => render_quiz(f, chunks[2], app),
    }

    render_status_bar(f, chunks[3], app);

    if app.show_help {
        render_help(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let p = palette(app.theme);

    let mut tab_spans = vec![
        Span::styled(
            "₹ वित्त सीखो",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for (i, page) in Page::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(p.title)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(p.dim)
        };

        tab_spans.push(Span::styled(page.title(), style));
    }

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border)),
    );

    f.render_widget(header, area);
}

fn render_tip_banner(f: &mut Frame, area: Rect, app: &App) {
    let p = palette(app.theme);
    let daily = tips::daily_tips();

    let text = match app.ticker.current() {
        Some(idx) => format!("💡 Daily Tip: {}", daily[idx]),
        None => String::new(),
    };

    let banner = Paragraph::new(text)
        .style(Style::default().bg(p.banner_bg).fg(p.text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.border)),
        );

    f.render_widget(banner, area);
}

fn render_home(f: &mut Frame, area: Rect, app: &App) {
    let p = palette(app.theme);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Start Your Financial Journey Today",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Learn how to save, invest, and grow your money in India with simple,"),
        Line::from("  practical advice in Hindi and English."),
        Line::from(""),
        Line::from(Span::styled(
            "  What you'll learn",
            Style::default().fg(p.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  2", Style::default().fg(p.title)),
            Span::raw("  Financial Terms Made Simple — PPF, SIP, FD and UPI with Hindi names"),
        ]),
        Line::from(vec![
            Span::styled("  3", Style::default().fg(p.title)),
            Span::raw("  Smart Saving Strategies — practical tips for Indian household budgets"),
        ]),
        Line::from(vec![
            Span::styled("  4", Style::default().fg(p.title)),
            Span::raw("  Investment Guidance — mutual funds, PPF, FD and NPS compared"),
        ]),
        Line::from(vec![
            Span::styled("  5", Style::default().fg(p.title)),
            Span::raw("  EMI Calculator — home, car or personal loan installments"),
        ]),
        Line::from(vec![
            Span::styled("  6", Style::default().fg(p.title)),
            Span::raw("  Test Your Knowledge — a quick financial quiz"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Press a number to jump to a section, or Tab to cycle through them.",
            Style::default().fg(p.dim).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Educational content only — consult a financial advisor before investing.",
            Style::default().fg(p.dim),
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border))
            .title(" Home "),
    );

    f.render_widget(paragraph, area);
}

fn render_glossary(f: &mut Frame, area: Rect, app: &mut App) {
    if app.glossary_expanded && app.selected_term().is_some() {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55), // Term list
                Constraint::Percentage(45), // Definition panel
            ])
            .split(area);

        render_glossary_table(f, content_chunks[0], app);
        render_term_detail(f, content_chunks[1], app);
    } else {
        render_glossary_table(f, area, app);
    }
}

fn render_glossary_table(f: &mut Frame, area: Rect, app: &mut App) {
    let p = palette(app.theme);

    let header_cells = ["Term", "Hindi"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(p.title).add_modifier(Modifier::BOLD)));
    let header = Row::new(header_cells)
        .style(Style::default().bg(p.banner_bg))
        .height(1);

    let rows = app.glossary.terms().iter().map(|term| {
        Row::new(vec![
            Cell::from(truncate(&term.term, 34)).style(Style::default().fg(p.accent)),
            Cell::from(term.hindi.clone()).style(Style::default().fg(p.text)),
        ])
        .height(1)
    });

    let table = Table::new(rows, [Constraint::Length(36), Constraint::Min(20)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.border))
                .title(" Financial Glossary "),
        )
        .highlight_style(Style::default().bg(p.banner_bg).add_modifier(Modifier::BOLD))
        .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.glossary_state);
}

fn render_term_detail(f: &mut Frame, area: Rect, app: &App) {
    let p = palette(app.theme);

    let term = match app.selected_term() {
        Some(t) => t,
        None => return,
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", term.term),
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", term.hindi),
            Style::default().fg(p.dim),
        )),
        Line::from(""),
        Line::from(format!("  {}", term.definition)),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Example: ",
                Style::default().fg(p.title).add_modifier(Modifier::BOLD),
            ),
            Span::raw(term.example.clone()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Enter to close",
            Style::default().fg(p.dim).add_modifier(Modifier::ITALIC),
        )),
    ];

    let detail = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.title))
            .title(" Definition "),
    );

    f.render_widget(detail, area);
}

fn render_savings(f: &mut Frame, area: Rect, app: &App) {
    let p = palette(app.theme);

    let mut content = vec![Line::from("")];
    for tip in app.savings.tips() {
        content.push(Line::from(vec![
            Span::styled(
                format!("  {}", tip.title),
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", tip.category.as_str()),
                Style::default().fg(p.dim),
            ),
        ]));
        content.push(Line::from(format!("    {}", tip.description)));
        content.push(Line::from(vec![
            Span::raw("    Save: "),
            Span::styled(
                tip.amount.clone(),
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            ),
        ]));
        content.push(Line::from(""));
    }

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border))
            .title(" Savings Tips for Indian Households "),
    );

    f.render_widget(paragraph, area);
}

fn render_investing(f: &mut Frame, area: Rect, app: &App) {
    let p = palette(app.theme);

    let mut content = vec![Line::from("")];
    for option in app.guide.options() {
        content.push(Line::from(vec![
            Span::styled(
                format!("  {}", option.name),
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(option.hindi.clone(), Style::default().fg(p.dim)),
        ]));
        content.push(Line::from(vec![
            Span::raw("    Risk: "),
            Span::styled(option.risk.clone(), Style::default().fg(p.title)),
            Span::raw("   Expected Returns: "),
            Span::styled(option.returns.clone(), Style::default().fg(p.accent)),
        ]));
        content.push(Line::from(format!("    {}", option.description)));
        content.push(Line::from(Span::styled(
            format!("    ✓ {}", option.benefits.join("  ✓ ")),
            Style::default().fg(p.dim),
        )));
        content.push(Line::from(""));
    }

    content.push(Line::from(Span::styled(
        "  Tips for beginners",
        Style::default().fg(p.title).add_modifier(Modifier::BOLD),
    )));
    for pointer in investing::beginner_pointers() {
        content.push(Line::from(format!("   • {}", pointer)));
    }

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border))
            .title(" Beginner's Guide to Investing "),
    );

    f.render_widget(paragraph, area);
}

fn render_calculator(f: &mut Frame, area: Rect, app: &App) {
    let p = palette(app.theme);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left: editable loan details
    let mut input_lines = vec![Line::from("")];
    for field in [CalcField::Principal, CalcField::Rate, CalcField::Tenure] {
        let focused = app.calculator.focus == field;
        let marker = if focused { "→ " } else { "  " };
        let value_style = if focused {
            Style::default()
                .fg(p.title)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(p.text)
        };

        input_lines.push(Line::from(Span::styled(
            format!("  {}{}", marker, field.label()),
            Style::default().fg(if focused { p.accent } else { p.dim }),
        )));
        input_lines.push(Line::from(Span::styled(
            format!("      {}_", app.calculator.buffer(field)),
            value_style,
        )));
        input_lines.push(Line::from(""));
    }
    input_lines.push(Line::from(Span::styled(
        "  ↑/↓ switch field, type to edit",
        Style::default().fg(p.dim).add_modifier(Modifier::ITALIC),
    )));

    let inputs = Paragraph::new(input_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border))
            .title(" Loan Details "),
    );
    f.render_widget(inputs, chunks[0]);

    // Right: derived figures, or what is wrong with the inputs
    let result_lines = match app.calculator.result() {
        Ok(result) => {
            let principal = app
                .calculator
                .parse()
                .map(|input| input.principal)
                .unwrap_or_default();
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::raw("  Monthly EMI      "),
                    Span::styled(
                        format_inr(result.monthly_installment),
                        Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::raw("  Total Amount     "),
                    Span::styled(format_inr(result.total_payable), Style::default().fg(p.text)),
                ]),
                Line::from(vec![
                    Span::raw("  Total Interest   "),
                    Span::styled(
                        format_inr(result.total_interest),
                        Style::default().fg(p.text),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("  Principal        "),
                    Span::styled(format_inr(principal), Style::default().fg(p.text)),
                ]),
            ]
        }
        Err(errors) => {
            let mut lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  Check the loan details:",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            for error in errors {
                lines.push(Line::from(Span::styled(
                    format!("  • {}", error),
                    Style::default().fg(Color::Red),
                )));
            }
            lines
        }
    };

    let results = Paragraph::new(result_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border))
            .title(" Calculation Results "),
    );
    f.render_widget(results, chunks[1]);
}

fn render_quiz(f: &mut Frame, area: Rect, app: &App) {
    let p = palette(app.theme);

    if app.quiz.is_completed() {
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  🎉 Quiz completed!",
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!(
                "  Your score: {}/{}",
                app.quiz.score(),
                app.quiz.total()
            )),
        ];
        let done = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.border))
                .title(" Test Your Financial Knowledge "),
        );
        f.render_widget(done, area);
        return;
    }

    let question = match app.quiz.current_question() {
        Some(q) => q,
        None => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Question + options + explanation
        ])
        .split(area);

    let progress_label = format!(
        "Question {} of {}  |  Score: {}/{}",
        app.quiz.current_index() + 1,
        app.quiz.total(),
        app.quiz.score(),
        app.quiz.total()
    );
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.border)),
        )
        .gauge_style(Style::default().fg(p.accent).bg(p.banner_bg))
        .label(progress_label)
        .ratio(app.quiz.progress());
    f.render_widget(gauge, chunks[0]);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", question.question),
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, option) in question.options.iter().enumerate() {
        let style = if app.quiz.is_revealed() {
            if i == question.correct {
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
            } else if app.quiz.selected() == Some(i) {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(p.dim)
            }
        } else if i == app.quiz_cursor {
            Style::default()
                .fg(p.title)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(p.text)
        };

        let cursor = if !app.quiz.is_revealed() && i == app.quiz_cursor {
            "→ "
        } else {
            "  "
        };

        content.push(Line::from(Span::styled(
            format!("  {}{}", cursor, option),
            style,
        )));
    }

    if app.quiz.is_revealed() {
        let correct = app.quiz.selected() == Some(question.correct);
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            if correct {
                "  ✅ Correct!"
            } else {
                "  ❌ Incorrect!"
            },
            Style::default()
                .fg(if correct { p.accent } else { Color::Red })
                .add_modifier(Modifier::BOLD),
        )));
        content.push(Line::from(format!("  {}", question.explanation)));
        content.push(Line::from(""));
        let next_hint = if app.quiz.current_index() + 1 < app.quiz.total() {
            "  Enter: next question"
        } else {
            "  Enter: complete quiz"
        };
        content.push(Line::from(Span::styled(
            next_hint,
            Style::default().fg(p.dim).add_modifier(Modifier::ITALIC),
        )));
    }

    let body = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border))
            .title(" Test Your Financial Knowledge "),
    );
    f.render_widget(body, chunks[1]);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let p = palette(app.theme);

    let mut status_spans = vec![
        Span::styled(" Tab", Style::default().fg(p.title)),
        Span::raw(" Section | "),
        Span::styled("d", Style::default().fg(p.title)),
        Span::raw(format!(" Theme ({}) | ", app.theme.as_str())),
        Span::styled("?", Style::default().fg(p.title)),
        Span::raw(" Help | "),
    ];

    match app.current_page {
        Page::Glossary => {
            status_spans.push(Span::styled("↑/↓", Style::default().fg(p.title)));
            status_spans.push(Span::raw(" Term | "));
            status_spans.push(Span::styled("Enter", Style::default().fg(p.title)));
            status_spans.push(Span::raw(" Expand | "));
        }
        Page::Calculator => {
            status_spans.push(Span::styled("↑/↓", Style::default().fg(p.title)));
            status_spans.push(Span::raw(" Field | "));
            status_spans.push(Span::styled("0-9 .", Style::default().fg(p.title)));
            status_spans.push(Span::raw(" Edit | "));
        }
        Page::Quiz => {
            status_spans.push(Span::styled("↑/↓", Style::default().fg(p.title)));
            status_spans.push(Span::raw(" Option | "));
            status_spans.push(Span::styled("Enter", Style::default().fg(p.title)));
            status_spans.push(Span::raw(" Answer/Next | "));
        }
        _ => {}
    }

    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border)),
    );

    f.render_widget(status_bar, area);
}

fn render_help(f: &mut Frame, app: &App) {
    let p = palette(app.theme);
    let area = centered_rect(50, 60, f.size());

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Keyboard Shortcuts",
            Style::default().fg(p.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Tab / Shift-Tab   cycle sections"),
        Line::from("  1-6 (on Home)     jump to a section"),
        Line::from("  d                 toggle dark/light theme"),
        Line::from("  ↑/↓ or j/k        move within a section"),
        Line::from("  Enter             expand term / answer / advance"),
        Line::from("  ?                 toggle this help"),
        Line::from("  q or Esc          quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press ? or Esc to close",
            Style::default().fg(p.dim).add_modifier(Modifier::ITALIC),
        )),
    ];

    let help = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.title))
            .title(" Help ")
            .style(Style::default().bg(p.bg).fg(p.text)),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// Centered popup rect sized as a percentage of the frame
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycles_all_pages_and_wraps() {
        let mut app = App::new(Theme::Light);
        assert_eq!(app.current_page, Page::Home);

        let mut visited = vec![app.current_page];
        for _ in 0..5 {
            app.next_page();
            visited.push(app.current_page);
        }
        assert_eq!(visited, Page::ALL.to_vec());

        app.next_page();
        assert_eq!(app.current_page, Page::Home);

        app.previous_page();
        assert_eq!(app.current_page, Page::Quiz);
    }

    #[test]
    fn test_theme_toggle_flips_state() {
        let mut app = App::new(Theme::Light);
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Dark);
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn test_glossary_navigation_wraps() {
        let mut app = App::new(Theme::Light);
        let len = app.glossary.len();

        assert_eq!(app.glossary_state.selected(), Some(0));
        app.glossary_previous();
        assert_eq!(app.glossary_state.selected(), Some(len - 1));
        app.glossary_next();
        assert_eq!(app.glossary_state.selected(), Some(0));
    }

    #[test]
    fn test_glossary_expand_collapse() {
        let mut app = App::new(Theme::Light);

        assert!(!app.glossary_expanded);
        app.glossary_toggle();
        assert!(app.glossary_expanded);
        assert_eq!(app.selected_term().unwrap().id, "1");
        app.glossary_toggle();
        assert!(!app.glossary_expanded);
    }

    #[test]
    fn test_tick_advances_banner() {
        let mut app = App::new(Theme::Dark);
        assert_eq!(app.ticker.current(), Some(0));
        app.tick();
        assert_eq!(app.ticker.current(), Some(1));
    }

    #[test]
    fn test_calculator_editing_recomputes() {
        let mut app = App::new(Theme::Light);

        // Defaults parse to the reference loan
        assert!(app.calculator.result().is_ok());

        // Blank out the principal: parse error surfaces, nothing panics
        app.calculator.focus = CalcField::Principal;
        for _ in 0..10 {
            app.calculator.backspace();
        }
        let errors = app.calculator.result().unwrap_err();
        assert_eq!(errors[0].field, "principal");

        // Type a new principal and the result comes back
        for c in "250000".chars() {
            app.calculator.push_char(c);
        }
        let result = app.calculator.result().unwrap();
        assert!(result.monthly_installment > 0.0);
    }

    #[test]
    fn test_calculator_rejects_letters_and_stray_dots() {
        let mut state = CalculatorState::new();

        state.focus = CalcField::Tenure;
        state.push_char('.');
        assert_eq!(state.tenure_input, "20");

        state.focus = CalcField::Rate;
        state.push_char('x');
        assert_eq!(state.rate_input, "8.5");
    }

    #[test]
    fn test_quiz_cursor_wraps_and_locks_after_reveal() {
        let mut app = App::new(Theme::Light);
        let options = app.quiz.current_question().unwrap().options.len();

        app.quiz_cursor_up();
        assert_eq!(app.quiz_cursor, options - 1);
        app.quiz_cursor_down();
        assert_eq!(app.quiz_cursor, 0);

        app.quiz_confirm();
        assert!(app.quiz.is_revealed());

        // Cursor movement is inert while the answer is shown
        app.quiz_cursor_down();
        assert_eq!(app.quiz_cursor, 0);
    }

    #[test]
    fn test_quiz_confirm_flow_to_completion() {
        let mut app = App::new(Theme::Light);
        let total = app.quiz.total();

        for _ in 0..total {
            app.quiz_confirm(); // answer
            app.quiz_confirm(); // advance
        }

        assert!(app.quiz.is_completed());
        app.quiz_confirm(); // terminal state, no-op
        assert!(app.quiz.is_completed());
    }

    #[test]
    fn test_truncate_helper() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long glossary term", 10), "a very ...");
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert!(inner.width <= outer.width);
        assert!(inner.height <= outer.height);
        assert!(inner.x >= outer.x && inner.y >= outer.y);
    }
}
