use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use crate::app::{App, InputMode};
use crate::domain::task::{Priority, Task};
use crate::usecase::filter::Filter;

pub fn run(mut app: App, tick_rate: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_tick = Instant::now();
    let res = loop {
        terminal.draw(|f| draw(f, &app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key(&mut app, key.code)
        {
            break Ok(());
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    };

    cleanup_terminal(&mut terminal)?;
    res
}

fn handle_key(app: &mut App, code: KeyCode) -> bool {
    match app.mode {
        InputMode::Normal => match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('j') | KeyCode::Down => app.select_next(),
            KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
            KeyCode::Char('a') | KeyCode::Char('n') => app.start_adding(),
            KeyCode::Char('e') => app.start_editing(),
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
            KeyCode::Char('c') => app.clear_completed(),
            KeyCode::Char('f') => app.cycle_filter(),
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                app.set_filter(Filter::ALL[idx]);
            }
            KeyCode::Char('r') => app.reload_from_storage(),
            _ => {}
        },
        InputMode::Adding | InputMode::Editing => match code {
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Enter => app.submit_input(),
            KeyCode::Tab if app.mode == InputMode::Adding => app.cycle_input_priority(),
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Char(c) => app.input.push(c),
            _ => {}
        },
    }

    false
}

fn draw(f: &mut ratatui::Frame, app: &App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(size);

    f.render_widget(render_header(app), chunks[0]);
    f.render_widget(render_filter_tabs(app), chunks[1]);

    if app.visible.is_empty() {
        f.render_widget(render_empty(app), chunks[2]);
    } else {
        let mut list_state = ListState::default();
        list_state.select(Some(app.selected));
        let list = render_list(&app.visible, app.selected);
        f.render_stateful_widget(list, chunks[2], &mut list_state);
    }

    f.render_widget(render_footer(app), chunks[3]);
}

fn render_header(app: &App) -> Paragraph<'static> {
    let summary = format!("Done: {} / All: {}", app.counts.completed, app.counts.all);
    let line = Line::from(vec![
        Span::styled("tana - tasks", Style::default().fg(Color::Cyan)),
        Span::raw("  |  "),
        Span::styled(summary, Style::default().fg(Color::Yellow)),
    ]);
    Paragraph::new(line)
        .block(Block::default().title("Overview").borders(Borders::ALL))
        .wrap(Wrap { trim: true })
}

fn render_filter_tabs(app: &App) -> Tabs<'static> {
    let titles: Vec<Line> = Filter::ALL
        .iter()
        .map(|filter| {
            Line::from(format!(
                "{} {}",
                filter.label(),
                app.counts.for_filter(*filter)
            ))
        })
        .collect();
    let selected = Filter::ALL
        .iter()
        .position(|f| *f == app.filter)
        .unwrap_or(0);

    Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title("Filters (1-6 select ; f cycle)")
                .borders(Borders::ALL),
        )
}

fn render_list(tasks: &[Task], selected: usize) -> List<'_> {
    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let symbol = if task.completed { "✔" } else { "•" };
            let line = vec![
                Span::raw(format!(" {symbol} ")),
                Span::styled(
                    format!("[{}] ", task.priority.label()),
                    Style::default().fg(priority_color(task.priority)),
                ),
                Span::raw(task.text.clone()),
            ];

            let style = if idx == selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if task.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(line)).style(style)
        })
        .collect();

    List::new(items)
        .block(
            Block::default()
                .title("Tasks (j/k move ; a add ; e edit ; Space toggle ; d delete ; c clear done)")
                .borders(Borders::ALL),
        )
        .highlight_symbol("➤ ")
}

fn render_empty(app: &App) -> Paragraph<'static> {
    let hint = match app.filter {
        Filter::All => "Add a new task to get started".to_string(),
        other => format!("No {} tasks found", other.label()),
    };
    Paragraph::new(Line::from(vec![
        Span::styled("No tasks found. ", Style::default().fg(Color::DarkGray)),
        Span::raw(hint),
    ]))
    .block(Block::default().title("Tasks").borders(Borders::ALL))
    .wrap(Wrap { trim: true })
}

fn render_footer(app: &App) -> Paragraph<'_> {
    match app.mode {
        InputMode::Normal => {
            let msg = app
                .status
                .as_deref()
                .unwrap_or("q quit ; a add ; e edit ; c clear done ; r reload");
            Paragraph::new(msg).block(Block::default().title("Normal").borders(Borders::ALL))
        }
        InputMode::Adding => {
            let line = Line::from(vec![
                Span::raw("New task "),
                Span::styled(
                    format!("[{}]", app.input_priority.label()),
                    Style::default().fg(priority_color(app.input_priority)),
                ),
                Span::raw(": "),
                Span::styled(&app.input, Style::default().fg(Color::Yellow)),
                Span::raw("█"),
            ]);
            Paragraph::new(line).block(
                Block::default()
                    .title("Input (Enter to add / Tab priority / Esc to cancel)")
                    .borders(Borders::ALL),
            )
        }
        InputMode::Editing => {
            let line = Line::from(vec![
                Span::raw("Edit task: "),
                Span::styled(&app.input, Style::default().fg(Color::Yellow)),
                Span::raw("█"),
            ]);
            Paragraph::new(line).block(
                Block::default()
                    .title("Input (Enter to save / Esc to cancel)")
                    .borders(Borders::ALL),
            )
        }
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
