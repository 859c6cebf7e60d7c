use std::io::{self, IsTerminal, Write};

use chrono::Local;
use tether_core::links::display_domain;
use tether_core::{LinkSettings, Task, TaskStats};
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::terminal::TerminalPalette;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let color = cfg.switch("color")?.unwrap_or(true);

        Ok(Self {
            color: color && io::stdout().is_terminal(),
        })
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    #[tracing::instrument(skip_all, fields(count = tasks.len()))]
    pub fn print_task_table<W: Write>(
        &self,
        out: &mut W,
        tasks: &[Task],
        settings: LinkSettings,
        palette: TerminalPalette,
    ) -> anyhow::Result<()> {
        if tasks.is_empty() {
            writeln!(out, "No tasks.")?;
            return Ok(());
        }

        let headers = vec![
            "ID".to_string(),
            "Done".to_string(),
            "Created".to_string(),
            "Title".to_string(),
            "Links".to_string(),
        ];

        let mut rows = Vec::with_capacity(tasks.len());
        for task in tasks {
            let id = self.paint(&task.id.to_string(), palette.id_code());
            let done = if task.completed { "x".to_string() } else { String::new() };
            let created = task
                .created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string();
            let title = if task.completed {
                self.paint(&task.title, palette.done_code())
            } else {
                task.title.clone()
            };
            let links = task
                .links
                .iter()
                .map(|link| {
                    let shown = if settings.show_link_icons {
                        display_domain(link)
                    } else {
                        link.clone()
                    };
                    self.paint(&shown, palette.link_code())
                })
                .collect::<Vec<_>>()
                .join(" ");

            rows.push(vec![id, done, created, title, links]);
        }

        write_table(out, headers, rows)
    }

    pub fn print_task_links<W: Write>(&self, out: &mut W, task: &Task) -> anyhow::Result<()> {
        for (idx, link) in task.links.iter().enumerate() {
            writeln!(out, "  [{idx}] {link}")?;
        }
        Ok(())
    }

    pub fn print_stats<W: Write>(&self, out: &mut W, stats: TaskStats) -> anyhow::Result<()> {
        writeln!(
            out,
            "{} tasks, {} completed, {} pending, {} links",
            stats.total, stats.completed, stats.pending, stats.links
        )?;
        Ok(())
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

fn write_table<W: Write>(
    writer: &mut W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|header| UnicodeWidthStr::width(header.as_str()))
        .collect();

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    for (header, &width) in headers.iter().zip(&widths) {
        write!(writer, "{header:width$} ")?;
    }
    writeln!(writer)?;

    for &width in &widths {
        write!(writer, "{:-<width$} ", "")?;
    }
    writeln!(writer)?;

    for row in rows {
        for (cell, &width) in row.iter().zip(&widths) {
            let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
            let padding = width.saturating_sub(visible_width);
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}
