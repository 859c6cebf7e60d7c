use std::io::Write;

use anyhow::Context;
use tether_core::{KeyValueStore, Prompter, TaskStore, ThemeMode, ThemeStore};
use tracing::{debug, warn};

use crate::cli::{Command, ThemeAction};
use crate::render::Renderer;
use crate::terminal::TerminalPalette;

/// Runs one command against the stores and writes its output to `out`.
#[tracing::instrument(skip(tasks, theme, renderer, out))]
pub fn dispatch<S, P, W>(
    tasks: &mut TaskStore<S, P>,
    theme: &mut ThemeStore<S, TerminalPalette>,
    renderer: &Renderer,
    out: &mut W,
    command: Command,
) -> anyhow::Result<()>
where
    S: KeyValueStore,
    P: Prompter,
    W: Write,
{
    match command {
        Command::List => {
            renderer.print_task_table(
                out,
                tasks.tasks(),
                tasks.link_settings(),
                *theme.surface(),
            )?;
            renderer.print_stats(out, tasks.stats())?;
        }
        Command::Add { title, links } => {
            let before = tasks.tasks_count();
            tasks.set_new_task_title(title.join(" "));
            for link in links {
                tasks.set_current_link(link);
                tasks.add_link_to_new_task();
            }
            tasks.add_task().context("failed to add task")?;

            if tasks.tasks_count() > before
                && let Some(created) = tasks.tasks().iter().max_by_key(|task| task.id)
            {
                writeln!(out, "Created task {}.", created.id)?;
                renderer.print_task_links(out, created)?;
            }
        }
        Command::Edit {
            id,
            title,
            links,
            remove_links,
        } => {
            let Some(task) = tasks.task(id).cloned() else {
                warn!(id, "no task with that id");
                return Ok(());
            };

            tasks.start_edit(&task);
            if let Some(title) = title {
                tasks.set_edit_title(title);
            }

            let mut remove_links = remove_links;
            remove_links.sort_unstable();
            remove_links.dedup();
            for index in remove_links.into_iter().rev() {
                tasks.remove_link_from_edit_task(index);
            }

            for link in links {
                tasks.set_current_edit_link(link);
                tasks.add_link_to_edit_task();
            }

            tasks.save_edit().context("failed to save task")?;
            if tasks.editing().is_some() {
                debug!(id, "edit left open, discarding");
                tasks.cancel_edit();
                return Ok(());
            }

            if let Some(task) = tasks.task(id) {
                writeln!(out, "Modified task {id}.")?;
                renderer.print_task_links(out, task)?;
            }
        }
        Command::Done { id } => {
            tasks.toggle_complete(id).context("failed to update task")?;
            if let Some(task) = tasks.task(id) {
                let state = if task.completed { "Completed" } else { "Reopened" };
                writeln!(out, "{state} task {id}.")?;
            }
        }
        Command::Delete { id } => {
            let before = tasks.tasks_count();
            tasks.delete_task(id).context("failed to delete task")?;
            if tasks.tasks_count() < before {
                writeln!(out, "Deleted task {id}.")?;
            }
        }
        Command::Clear => {
            let before = tasks.tasks_count();
            tasks.clear_completed().context("failed to clear completed tasks")?;
            let removed = before - tasks.tasks_count();
            if removed > 0 {
                writeln!(out, "Deleted {removed} completed tasks.")?;
            }
        }
        Command::Stats => {
            renderer.print_stats(out, tasks.stats())?;
        }
        Command::Theme { action } => {
            match action {
                ThemeAction::Show => {}
                ThemeAction::Toggle => theme.toggle_theme()?,
                ThemeAction::Dark => theme.set_mode(ThemeMode::Dark)?,
                ThemeAction::Light => theme.set_mode(ThemeMode::Light)?,
            }
            writeln!(out, "{}", theme.mode().storage_value())?;
        }
    }

    Ok(())
}
