use lottoscan::{ParseResultVerbose, SERIES, WinningTickets};

/// Terminal roles used by the report, each mapped to one SGR code.
#[derive(Clone, Copy)]
enum Style {
    Rule,
    Stage,
    Label,
    Value,
    Warn,
    Strong,
    Faint,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Rule => "90",
            Style::Stage => "34",
            Style::Label => "36",
            Style::Value => "32",
            Style::Warn => "33",
            Style::Strong => "1",
            Style::Faint => "2",
        }
    }
}

struct Painter {
    color: bool,
}

impl Painter {
    fn paint(&self, style: Style, s: impl AsRef<str>) -> String {
        if self.color { format!("\x1b[{}m{}\x1b[0m", style.code(), s.as_ref()) } else { s.as_ref().to_string() }
    }

    fn section(&self, title: &str) {
        println!("\n{}", self.paint(Style::Rule, format!("━━━ {title} ━━━")));
    }
}

const PREVIEW_CHARS: usize = 160;

pub fn print_run(res: &ParseResultVerbose, tickets: &[String], winners: &WinningTickets, color: bool) {
    let p = Painter { color };
    let details = &res.details;
    println!("\n{}", p.paint(Style::Strong, p.paint(Style::Label, format!("⚙  Parsing {} chars", res.text.chars().count()))));

    p.section("Signals");
    if details.signals.is_empty() {
        println!("  {}", p.paint(Style::Faint, "no layout artifacts detected"));
    } else {
        println!("  {}", p.paint(Style::Stage, details.signals.join(" │ ")));
    }

    p.section("Stages");
    println!("  {} {}", p.paint(Style::Stage, "normalized:"), p.paint(Style::Faint, preview(&details.normalized)));
    println!("  {} {}", p.paint(Style::Stage, "tagged:    "), p.paint(Style::Faint, preview(&details.tagged)));
    let series = match details.series {
        Some(letter) => p.paint(Style::Strong, letter.to_string()),
        None => p.paint(Style::Faint, "none"),
    };
    println!("  {} {}", p.paint(Style::Stage, "series:    "), series);
    println!("  {} {}", p.paint(Style::Stage, "segments:  "), details.segments.len());

    p.section("Results");
    if res.results.is_empty() {
        println!("{}", p.paint(Style::Faint, "  No positions found"));
        println!("\n{}", p.paint(Style::Warn, "Possible reasons:"));
        println!("  • No prize heading matched (expected e.g. \"1st Prize\" or \"Cons\")");
        println!("  • The document was not flattened into one line of words");
        println!("\n{}", p.paint(Style::Faint, "  Tip: run with --verbose to see discarded preamble text"));
    } else {
        for (position, values) in &res.results {
            let label = if position == SERIES { p.paint(Style::Strong, position) } else { position.clone() };
            println!(
                "  {} {} {}",
                p.paint(Style::Label, label),
                p.paint(Style::Faint, format!("({})", values.len())),
                p.paint(Style::Value, values.join(" "))
            );
        }
    }

    if !tickets.is_empty() {
        p.section("Tickets");
        for ticket in tickets {
            let won: Vec<&str> = winners
                .iter()
                .filter(|(_, list)| list.contains(ticket))
                .map(|(position, _)| position.as_str())
                .collect();
            if won.is_empty() {
                println!("  {} {}", ticket, p.paint(Style::Faint, "✗ no prize"));
            } else {
                println!("  {} {}", p.paint(Style::Strong, ticket), p.paint(Style::Value, format!("✓ {}", won.join(", "))));
            }
        }
    }

    p.section("Timing");
    println!(
        "  Total: {}  │  Normalize: {}  │  Tag: {}  │  Split: {}  │  Extract: {}",
        p.paint(Style::Value, format!("{:?}", details.total)),
        p.paint(Style::Label, format!("{:?}", details.normalize)),
        p.paint(Style::Faint, format!("{:?}", details.tag)),
        p.paint(Style::Faint, format!("{:?}", details.split)),
        p.paint(Style::Faint, format!("{:?}", details.extract)),
    );
    println!();
}

fn preview(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= PREVIEW_CHARS {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(PREVIEW_CHARS).collect();
    format!("{head}…")
}
