use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;

use crate::postfix_engine::{Token, TraceStep, TRACE_HEADER};

// The text modes print the header with tabs; the list widget gets the
// same columns space-padded so they line up with `step_row`.
pub fn step_header() -> String {
    TRACE_HEADER.replace('\t', "  ")
}

pub fn step_row(step: &TraceStep) -> String {
    format!("{:<10}{:<6}{}", step.operator, step.first, step.second)
}

pub fn format_with_spaces(expr: &str) -> String {
    let mut out = String::new();
    for c in expr.chars() {
        if c.is_whitespace() {
            continue;
        }
        if matches!(Token::classify(c), Token::Operand(_)) {
            out.push(c);
        } else {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            out.push(c);
            out.push(' ');
        }
    }
    out.trim_end().to_string()
}

// Tokens are single characters, so wrapping is plain width-aware chunking;
// there are no word boundaries to respect.
pub fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(1);
        if line_width + w > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        line.push(c);
        line_width += w;
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn highlight_expression(expr: &str, base_style: Style) -> Vec<Span<'static>> {
    let operator_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let paren_style = Style::default().fg(Color::DarkGray);

    expr.chars()
        .map(|c| {
            if c == ' ' {
                return Span::raw(" ");
            }
            let style = match Token::classify(c) {
                Token::Operand(_) => base_style,
                Token::LParen | Token::RParen => paren_style,
                _ => operator_style,
            };
            Span::styled(c.to_string(), style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_go_around_operators_only() {
        assert_eq!(format_with_spaces("a+b*c"), "a + b * c");
        assert_eq!(format_with_spaces("(a+b)*c"), "( a + b ) * c");
        assert_eq!(format_with_spaces("-a"), "- a");
        assert_eq!(format_with_spaces("ab"), "ab");
    }

    #[test]
    fn wrapping_chunks_by_display_width() {
        assert_eq!(wrap_chars("abcdef", 3), vec!["abc", "def"]);
        assert_eq!(wrap_chars("abc", 10), vec!["abc"]);
        assert_eq!(wrap_chars("", 10), vec![""]);
    }

    #[test]
    fn step_rows_line_up_with_the_header() {
        assert_eq!(step_header(), "Operator  Arg1  Arg2 (Result)");

        let step = TraceStep {
            operator: "+".to_string(),
            first: 'a',
            second: 'b',
        };
        assert_eq!(step_row(&step), "+         a     b");

        let unary = TraceStep {
            operator: "Uminus".to_string(),
            first: 'a',
            second: '_',
        };
        assert_eq!(step_row(&unary), "Uminus    a     _");
    }
}
