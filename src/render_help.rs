use crate::tui_mode::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" RustPostfix Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        ))
    };

    let help_text = vec![
        Line::from(Span::styled(
            "RustPostfix - Infix to Postfix Converter with Operation Trace",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("What it does:"),
        Line::from("  Rewrites an infix expression into postfix (reverse Polish)"),
        Line::from("  form, then replays the postfix form through a value stack"),
        Line::from("  and lists every reduction as Operator / Arg1 / Arg2."),
        Line::from("  Operands are single letters or digits; no arithmetic is"),
        Line::from("  performed, the trace shows structure only."),
        Line::from(""),
        section("Operators (tightest binding first):"),
        Line::from("  ^ : Exponentiation"),
        Line::from("  % : Modulo"),
        Line::from("  / : Division"),
        Line::from("  * : Multiplication"),
        Line::from("  + : Addition"),
        Line::from("  - : Subtraction"),
        Line::from("  = : Assignment (traced with both popped values)"),
        Line::from("  ( ) : Grouping"),
        Line::from(""),
        section("Unary minus:"),
        Line::from("  A minus at the start of the expression, or right after"),
        Line::from("  another operator or parenthesis, is treated as unary and"),
        Line::from("  shows up as `_` in the postfix form and as `Uminus` in"),
        Line::from("  the trace."),
        Line::from(""),
        section("Commands:"),
        Line::from("  strict : Toggle rejection of unbalanced parentheses"),
        Line::from("  clear : Clear conversion history"),
        Line::from("  Ctrl+U : Clear current input"),
        Line::from("  help : Show this help screen"),
        Line::from("  quit : Exit"),
        Line::from(""),
        section("Navigation:"),
        Line::from("  Left/Right : Move cursor"),
        Line::from("  Ctrl+Left/Right : Jump between operators"),
        Line::from("  Home/End : Move to start/end of line"),
        Line::from("  Up/Down : Recall previous expressions"),
        Line::from("  PgUp/PgDn : Page through history"),
        Line::from("  Mouse wheel : Scroll through history"),
        Line::from(""),
        section("Examples:"),
        Line::from("  (a+b)*c"),
        Line::from("  -a+b"),
        Line::from("  a=b+c"),
        Line::from("  x^2%y"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
