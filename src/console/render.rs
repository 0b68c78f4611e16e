//! Console rendering in text or JSON.

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::errors::{AppError, ErrorResponse};
use crate::models::{KNOWN_DOMAINS, KNOWN_GENDERS};
use crate::session::{TeamEntry, View};

pub const NO_TEAM_MEMBERS: &str = "No team members selected";

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision_id: u64,
}

impl<T: Serialize> Response<T> {
    pub fn new(data: T, revision_id: u64) -> Self {
        Self {
            success: true,
            data,
            revision_id,
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, body: &T) -> Result<(), AppError> {
    serde_json::to_writer(&mut *out, body)?;
    writeln!(out)?;
    Ok(())
}

/// Known option lists for the filter controls.
#[derive(Debug, Serialize)]
pub struct Options {
    pub domains: &'static [&'static str],
    pub genders: &'static [&'static str],
}

/// Renders responses in one output format.
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Cards for the current page, the page bar and the team panel.
    pub fn view<W: Write>(&self, out: &mut W, view: &View, revision_id: u64) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => write_json(out, &Response::new(view, revision_id)),
            OutputFormat::Text => {
                if view.total_matches == 0 {
                    writeln!(out, "No matches")?;
                } else {
                    writeln!(
                        out,
                        "Showing {} of {} matches (page {} of {})",
                        view.cards.len(),
                        view.total_matches,
                        view.current_page,
                        view.page_count
                    )?;
                }

                for card in &view.cards {
                    write!(out, "  [{}] {} <{}> {}", card.id, card.name, card.email, card.domain)?;
                    if card.add_disabled {
                        write!(out, " (add disabled)")?;
                    }
                    writeln!(out)?;
                }

                if !view.pages.is_empty() {
                    let bar: Vec<String> = view
                        .pages
                        .iter()
                        .map(|p| {
                            if p.active {
                                format!("[{}]", p.number)
                            } else {
                                p.number.to_string()
                            }
                        })
                        .collect();
                    writeln!(out, "Pages: {}", bar.join(" "))?;
                }

                if let Some(team) = &view.team {
                    self.team_text(out, team)?;
                }
                Ok(())
            }
        }
    }

    /// The team panel on its own.
    pub fn team<W: Write>(
        &self,
        out: &mut W,
        team: Option<&[TeamEntry]>,
        revision_id: u64,
    ) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => write_json(out, &Response::new(team, revision_id)),
            OutputFormat::Text => match team {
                Some(team) => self.team_text(out, team),
                None => Ok(()),
            },
        }
    }

    fn team_text<W: Write>(&self, out: &mut W, team: &[TeamEntry]) -> Result<(), AppError> {
        if team.is_empty() {
            writeln!(out, "Team: {}", NO_TEAM_MEMBERS)?;
            return Ok(());
        }

        writeln!(out, "Team:")?;
        for entry in team {
            writeln!(out, "  - [{}] {} ({})", entry.id, entry.name, entry.domain)?;
        }
        Ok(())
    }

    pub fn options<W: Write>(&self, out: &mut W, revision_id: u64) -> Result<(), AppError> {
        let options = Options {
            domains: &KNOWN_DOMAINS,
            genders: &KNOWN_GENDERS,
        };
        match self.format {
            OutputFormat::Json => write_json(out, &Response::new(options, revision_id)),
            OutputFormat::Text => {
                writeln!(out, "Domains: {}", options.domains.join(", "))?;
                writeln!(out, "Genders: {}", options.genders.join(", "))?;
                Ok(())
            }
        }
    }

    pub fn help<W: Write>(&self, out: &mut W, text: &str, revision_id: u64) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => write_json(out, &Response::new(text, revision_id)),
            OutputFormat::Text => {
                writeln!(out, "{}", text)?;
                Ok(())
            }
        }
    }

    pub fn error<W: Write>(&self, out: &mut W, err: &AppError, revision_id: u64) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => write_json(out, &ErrorResponse::new(err, revision_id)),
            OutputFormat::Text => {
                writeln!(out, "error: {}", err.message())?;
                Ok(())
            }
        }
    }
}
