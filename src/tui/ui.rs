#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Layout and drawing of the form

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::{
    constants::{APP_TITLE, MAX_SCORE},
    grade::{Category, Status},
    report::{fixed1, legend_sections, percent},
    tui::{app::App, input::InputWidget},
};

/// Height of one score input
const INPUT_HEIGHT: u16 = 3;

/// Terminal color of a band
pub fn status_color(status: Status) -> Color {
    status.color_name().parse().unwrap_or(Color::Reset)
}

/// Draws the whole form
pub fn draw(frame: &mut Frame, app: &App) {
    let [header, body, legend, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(20),
        Constraint::Length(7),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, header);

    let [permanentes, parciales, results] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(body);

    draw_category(frame, permanentes, app, Category::Permanentes);
    draw_category(frame, parciales, app, Category::Parciales);
    draw_results(frame, results, app);
    draw_legend(frame, legend);
    draw_help(frame, help);
}

/// Title and tagline
fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Administra tus calificaciones académicas y calcula tu promedio final en tiempo real",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Card with the inputs and average of one category
fn draw_category(frame: &mut Frame, area: Rect, app: &App, category: Category) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} ", category.label()),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend((0..category.slots()).map(|_| Constraint::Length(INPUT_HEIGHT)));
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(category.description(), Style::default().fg(Color::Gray))),
        rows[0],
    );

    for (row, field) in rows[1..].iter().zip(app.category_fields(category)) {
        frame.render_widget(InputWidget::new(&field.input), *row);
    }

    let result = app.result();
    let average = result.average(category);
    let color = status_color(result.category_status(category));
    let footer = Line::from(vec![
        Span::styled("Promedio: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(" {} ", fixed1(average)),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(vec![Line::default(), footer]),
        rows[1 + category.slots()],
    );
}

/// Card with the final grade, band, gauges and breakdown
fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    let result = app.result();
    let passing_color = if result.is_passing { Color::Green } else { Color::Red };
    let status_color = status_color(result.status);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(passing_color))
        .title(Span::styled(
            " Resultado Final ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [subtitle, grade, badge, passing, scale, breakdown] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(4),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled("Calificación calculada", Style::default().fg(Color::Gray))),
        subtitle,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            fixed1(result.final_grade),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        grade,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {} ", result.status.label()),
            Style::default()
                .fg(Color::Black)
                .bg(passing_color)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        badge,
    );

    frame.render_widget(
        Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Progreso hacia la aprobación "),
            )
            .gauge_style(Style::default().fg(passing_color))
            .ratio((result.passing_progress() / 100.0).clamp(0.0, 1.0))
            .label(percent(result.passing_progress())),
        passing,
    );

    frame.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Escala 0 - 20 "))
            .gauge_style(Style::default().fg(status_color))
            .ratio((result.scale_progress() / 100.0).clamp(0.0, 1.0))
            .label(percent(result.scale_progress())),
        scale,
    );

    let mut lines: Vec<Line> = Category::ALL
        .iter()
        .map(|&category| {
            Line::from(vec![
                Span::raw(format!("{} ({:.0}%): ", category.label(), category.weight() * 100.0)),
                Span::styled(
                    format!("{} pts", fixed1(result.points(category))),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format!("Total: {} / {MAX_SCORE}", fixed1(result.final_grade)),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(Paragraph::new(lines), breakdown);
}

/// Grading system and band ranges, side by side
fn draw_legend(frame: &mut Frame, area: Rect) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);

    for ((title, items), column) in legend_sections().iter().zip(columns.iter()) {
        let lines: Vec<Line> = items.iter().map(|item| Line::from(format!("• {item}"))).collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {title} "));
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            *column,
        );
    }
}

/// Key bindings
fn draw_help(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(" Tab/↓ ", key),
        Span::raw("siguiente  "),
        Span::styled(" Shift-Tab/↑ ", key),
        Span::raw("anterior  "),
        Span::styled(" Ctrl+R ", key),
        Span::raw("Reiniciar Notas  "),
        Span::styled(" Esc ", key),
        Span::raw("salir"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
