mod app;
mod config;
mod engine;
mod event;
mod feedback;
mod roster;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use app::{App, AppScreen, CALC_ENTRY_FIELDS, FeedbackState};
use event::{AppEvent, EventHandler};
use ui::components::course_table::CourseTable;
use ui::components::feedback_modal::{FeedbackModal, FeedbackView};
use ui::components::input_field::InputField;
use ui::components::percent_bar::PercentBar;
use ui::components::projection_card::ProjectionCard;
use ui::components::results_card::ResultsCard;
use ui::components::scenario_list::ScenarioList;
use ui::layout::AppLayout;
use ui::line_input::{InputKind, LineInput};

#[derive(Parser)]
#[command(
    name = "attendr",
    version,
    about = "Terminal attendance calculator and planner for students"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Prefill total classes conducted")]
    conducted: Option<i64>,

    #[arg(long, help = "Prefill classes attended")]
    attended: Option<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();

    if let Some(theme_name) = cli.theme {
        match ui::theme::Theme::load(&theme_name) {
            Some(theme) => {
                let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
                app.theme = theme;
            }
            None => {
                eprintln!(
                    "Unknown theme '{theme_name}'. Available: {}",
                    ui::theme::Theme::available_themes().join(", ")
                );
            }
        }
    }
    if let Some(conducted) = cli.conducted {
        app.entry_conducted = LineInput::with_text(InputKind::Numeric, &conducted.to_string());
    }
    if let Some(attended) = cli.attended {
        app.entry_attended = LineInput::with_text(InputKind::Numeric, &attended.to_string());
    }
    if cli.conducted.is_some() && cli.attended.is_some() {
        app.calculate();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.tick(),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.feedback_open {
        handle_feedback_key(app, key);
        return;
    }

    // Feedback is reachable from every screen
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('f') {
        app.open_feedback();
        return;
    }

    match app.screen {
        AppScreen::Calculator => handle_calculator_key(app, key),
        AppScreen::Courses => handle_courses_key(app, key),
    }
}

fn handle_calculator_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        // The entry and planner fields only accept digits, so letters are
        // free to act as shortcuts on this screen.
        KeyCode::Char('c') => app.screen = AppScreen::Courses,
        KeyCode::Char('f') => app.open_feedback(),
        KeyCode::Tab | KeyCode::Down => app.calc_focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.calc_focus_prev(),
        KeyCode::Enter => {
            if app.calc_focus < CALC_ENTRY_FIELDS {
                app.calculate();
                if app.base.is_some() {
                    // Jump straight into the planner
                    app.calc_focus = CALC_ENTRY_FIELDS;
                }
            }
        }
        _ => app.calc_focused_input().handle(key),
    }
}

fn handle_courses_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.screen = AppScreen::Calculator,
        KeyCode::Tab => app.course_focus = (app.course_focus + 1) % 3,
        KeyCode::BackTab => app.course_focus = (app.course_focus + 2) % 3,
        KeyCode::Enter => app.add_course(),
        KeyCode::Down => app.course_select_next(),
        KeyCode::Up => app.course_select_prev(),
        // The name field needs letters for typing; the numeric fields drop
        // them, so 'x' is free to act as a delete shortcut there.
        KeyCode::Char('x') if app.course_focus != 0 => app.delete_selected_course(),
        KeyCode::Delete => app.delete_selected_course(),
        _ => app.course_focused_input().handle(key),
    }
}

fn handle_feedback_key(app: &mut App, key: KeyEvent) {
    if matches!(app.feedback_state, FeedbackState::Sent { .. }) {
        // Any key dismisses the thank-you banner early
        app.close_feedback();
        return;
    }

    match key.code {
        KeyCode::Esc => app.close_feedback(),
        KeyCode::Tab | KeyCode::Down => app.feedback_focus = (app.feedback_focus + 1) % 3,
        KeyCode::BackTab | KeyCode::Up => app.feedback_focus = (app.feedback_focus + 2) % 3,
        KeyCode::Enter => app.submit_feedback(),
        _ => app.feedback_focused_input().handle(key),
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Calculator => render_calculator(frame, app),
        AppScreen::Courses => render_courses(frame, app),
    }

    if app.feedback_open {
        let view = match &app.feedback_state {
            FeedbackState::Sent { .. } => FeedbackView::Sent,
            FeedbackState::Editing { error } => FeedbackView::Editing {
                name: &app.feedback_name,
                email: &app.feedback_email,
                message: &app.feedback_message,
                focus: app.feedback_focus,
                error: error.as_deref(),
            },
        };
        let modal_area = ui::layout::centered_rect(50, 80, area);
        frame.render_widget(FeedbackModal::new(view, app.theme), modal_area);
    }
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;
    let info = format!(
        " Plan your attendance smartly | 1 class = {} hours",
        app.config.hours_per_class
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " attendr ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            info,
            Style::default().fg(colors.muted()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_calculator(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    // Left: the entry form
    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(layout.left);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " 1. Enter your current attendance",
            Style::default()
                .fg(colors.fg())
                .add_modifier(Modifier::BOLD),
        ))),
        form[0],
    );
    frame.render_widget(
        InputField::new(
            " Total classes conducted (till today)",
            " Total number of classes that happened",
            &app.entry_conducted,
            app.calc_focus == 0,
            app.theme,
        ),
        form[1],
    );
    frame.render_widget(
        InputField::new(
            " Classes you attended (so far)",
            " How many classes you were present for",
            &app.entry_attended,
            app.calc_focus == 1,
            app.theme,
        ),
        form[2],
    );
    if let Some(ref error) = app.entry_error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" ⚠ {error}"),
                Style::default().fg(colors.destructive()),
            ))),
            form[3],
        );
    }

    // Right: results, planner and scenarios once a base pair exists
    match app.base {
        Some((conducted, attended)) => {
            render_results(frame, app, layout.right, conducted, attended);
        }
        None => {
            let placeholder = Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(
                    "Ready to calculate?",
                    Style::default()
                        .fg(colors.fg())
                        .add_modifier(Modifier::BOLD),
                ))
                .centered(),
                Line::from(Span::styled(
                    "Enter your attendance details on the left to see your",
                    Style::default().fg(colors.muted()),
                ))
                .centered(),
                Line::from(Span::styled(
                    "results, future predictions, and quick scenarios here.",
                    Style::default().fg(colors.muted()),
                ))
                .centered(),
            ])
            .block(Block::bordered().border_style(Style::default().fg(colors.border())));
            frame.render_widget(placeholder, layout.right);
        }
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Tab] Switch field  [Enter] Calculate  [c] Courses  [f] Feedback  [q] Quit",
        Style::default().fg(colors.muted()),
    )));
    frame.render_widget(footer, layout.footer);
}

fn render_results(
    frame: &mut ratatui::Frame,
    app: &App,
    area: ratatui::layout::Rect,
    conducted: i64,
    attended: i64,
) {
    let colors = &app.theme.colors;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(2),
            Constraint::Min(6),
        ])
        .split(area);

    frame.render_widget(ResultsCard::new(conducted, attended, app.theme), layout[0]);
    frame.render_widget(
        PercentBar::new(
            "Attendance",
            engine::attendance::attendance_percentage(conducted, attended),
            app.theme,
        ),
        layout[1],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " 2. Plan your future attendance",
            Style::default()
                .fg(colors.fg())
                .add_modifier(Modifier::BOLD),
        ))),
        layout[2],
    );

    let planner = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[3]);
    frame.render_widget(
        InputField::new(
            " Upcoming classes",
            " How many more will happen?",
            &app.future_conducted,
            app.calc_focus == 2,
            app.theme,
        ),
        planner[0],
    );
    frame.render_widget(
        InputField::new(
            " You'll attend",
            " How many will you be present for?",
            &app.future_attended,
            app.calc_focus == 3,
            app.theme,
        ),
        planner[1],
    );

    let projection = app.projection();
    frame.render_widget(
        ProjectionCard::new(
            engine::attendance::attendance_percentage(conducted, attended),
            &projection,
            app.theme,
        ),
        layout[4],
    );

    frame.render_widget(
        ScenarioList::new(conducted, attended, app.config.hours_per_class, app.theme),
        layout[5],
    );
}

fn render_courses(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app, layout[0]);

    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(layout[1]);
    frame.render_widget(
        InputField::new(
            " Course name",
            "",
            &app.course_name,
            app.course_focus == 0,
            app.theme,
        ),
        form[0],
    );
    frame.render_widget(
        InputField::new(
            " Conducted",
            "",
            &app.course_conducted,
            app.course_focus == 1,
            app.theme,
        ),
        form[1],
    );
    frame.render_widget(
        InputField::new(
            " Attended",
            "",
            &app.course_attended,
            app.course_focus == 2,
            app.theme,
        ),
        form[2],
    );

    if let Some(ref error) = app.course_error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" ⚠ {error}"),
                Style::default().fg(colors.destructive()),
            )))
            .wrap(Wrap { trim: false }),
            layout[2],
        );
    }

    frame.render_widget(
        CourseTable::new(&app.roster, app.course_selected, app.theme),
        layout[3],
    );

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Tab] Field  [Enter] Add course  [↑/↓] Select  [x/Del] Remove  [Esc] Back",
        Style::default().fg(colors.muted()),
    )));
    frame.render_widget(footer, layout[4]);
}
