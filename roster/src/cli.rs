//! Command line front end
//!
//! Every command works on one department (`--department`, default kitchen)
//! and prints that department's week afterwards.

use crate::core::Session;
use crate::payroll::{ConfirmationToken, DepartmentSummary, RateDraft, RateField};
use crate::storage::KeyValueStore;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use shared::error::AppError;
use shared::intent::{DEFAULT_ADVANCE_STEP, RosterIntent};
use shared::models::{Department, ShiftType, Weekday};
use shared::util::format_amount;
use std::io::{BufRead, Write};

/// Weekly staff roster and payroll advances
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Weekly staff roster and payroll advances")]
pub struct Cli {
    /// Department to work on: cuisine, chawarma, pizza, serveurs
    #[arg(short, long, env = "ROSTER_DEPARTMENT", default_value = "cuisine", global = true)]
    pub department: Department,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the department week (default)
    Show,

    /// Add an employee
    Add {
        name: String,
        /// Morning rate (default 50)
        #[arg(long)]
        morning: Option<f64>,
        /// Evening rate (default 50)
        #[arg(long)]
        evening: Option<f64>,
        /// Add 100 to the morning rate, repeatable
        #[arg(long, action = ArgAction::Count)]
        bump_morning: u8,
        /// Add 100 to the evening rate, repeatable
        #[arg(long, action = ArgAction::Count)]
        bump_evening: u8,
    },

    /// Change name or rates of an employee; omitted values are kept
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        morning: Option<f64>,
        #[arg(long)]
        evening: Option<f64>,
        #[arg(long, action = ArgAction::Count)]
        bump_morning: u8,
        #[arg(long, action = ArgAction::Count)]
        bump_evening: u8,
    },

    /// Set the shift worked on a day (none, morning, evening, double)
    Shift {
        id: String,
        day: Weekday,
        shift: ShiftType,
    },

    /// Set the advance paid on a day
    Advance {
        id: String,
        day: Weekday,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Add a step (default 100) to the advance paid on a day
    BumpAdvance {
        id: String,
        day: Weekday,
        #[arg(long, default_value_t = DEFAULT_ADVANCE_STEP)]
        step: f64,
    },

    /// Delete an employee
    Remove {
        id: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Empty every shift and advance of the department
    Clear {
        #[arg(short, long)]
        yes: bool,
    },

    /// Read JSON intents from stdin, one per line, and print one JSON result per line
    Intents,
}

/// Run one command against the session
pub fn run<S: KeyValueStore>(cli: Cli, session: &mut Session<S>, currency: &str) -> Result<()> {
    session.select_department(cli.department);

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {}
        Command::Add {
            name,
            morning,
            evening,
            bump_morning,
            bump_evening,
        } => {
            let mut draft = RateDraft::for_new();
            apply_rates(&mut draft, morning, evening, bump_morning, bump_evening);
            if !session.add_employee(&name, draft.morning, draft.evening)? {
                eprintln!("Nom requis: rien n'a été ajouté");
            }
        }
        Command::Edit {
            id,
            name,
            morning,
            evening,
            bump_morning,
            bump_evening,
        } => {
            let employee = session
                .find_employee(&id)
                .ok_or_else(|| AppError::employee_not_found(&id))?;
            let name = name.unwrap_or_else(|| employee.name.clone());
            let mut draft = RateDraft::from_employee(employee);
            apply_rates(&mut draft, morning, evening, bump_morning, bump_evening);
            if !session.edit_employee(&id, &name, draft.morning, draft.evening)? {
                eprintln!("Nom requis: rien n'a été modifié");
            }
        }
        Command::Shift { id, day, shift } => {
            report(session.set_shift(&id, day, shift)?, &id);
        }
        Command::Advance { id, day, amount } => {
            report(session.set_advance(&id, day, amount)?, &id);
        }
        Command::BumpAdvance { id, day, step } => {
            report(session.increment_advance(&id, day, step)?, &id);
        }
        Command::Remove { id, yes } => {
            if session.find_employee(&id).is_none() {
                return Err(AppError::employee_not_found(&id).into());
            }
            let token = session.request_remove(&id);
            settle(session, token, yes)?;
        }
        Command::Clear { yes } => {
            let token = session.request_clear_all();
            settle(session, token, yes)?;
        }
        Command::Intents => {
            return run_intents(session, std::io::stdin().lock(), std::io::stdout().lock());
        }
    }

    println!("{}", render(&session.summary(), currency));
    Ok(())
}

fn apply_rates(
    draft: &mut RateDraft,
    morning: Option<f64>,
    evening: Option<f64>,
    bump_morning: u8,
    bump_evening: u8,
) {
    if let Some(morning) = morning {
        draft.morning = morning;
    }
    if let Some(evening) = evening {
        draft.evening = evening;
    }
    for _ in 0..bump_morning {
        draft.increment(RateField::Morning);
    }
    for _ in 0..bump_evening {
        draft.increment(RateField::Evening);
    }
}

fn report(changed: bool, id: &str) {
    if !changed {
        eprintln!("Employé {} introuvable: rien n'a été modifié", id);
    }
}

/// Confirm or cancel a pending destructive action
fn settle<S: KeyValueStore>(
    session: &mut Session<S>,
    token: ConfirmationToken,
    yes: bool,
) -> Result<()> {
    let prompt = session
        .pending(&token)
        .map(|action| action.prompt())
        .unwrap_or_default();

    let confirmed = yes || ask(prompt)?;
    if confirmed {
        session.confirm(&token)?;
    } else {
        session.cancel(&token);
        eprintln!("Annulé");
    }
    Ok(())
}

fn ask(prompt: &str) -> Result<bool> {
    print!("{} [o/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read answer")?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "o" | "oui" | "y" | "yes"
    )
}

/// Dispatch newline-delimited JSON intents. Errors are written as
/// `{"code": .., "message": ..}` lines and do not stop the loop.
pub fn run_intents<S: KeyValueStore>(
    session: &mut Session<S>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read intent")?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = serde_json::from_str::<RosterIntent>(&line)
            .map_err(AppError::from)
            .and_then(|intent| session.dispatch(intent));

        let json = match reply {
            Ok(result) => serde_json::to_string(&result)?,
            Err(e) => serde_json::json!({ "code": e.code, "message": e.message }).to_string(),
        };
        writeln!(output, "{}", json)?;
    }
    output.flush()?;
    Ok(())
}

const NAME_WIDTH: usize = 16;
const DAY_WIDTH: usize = 12;

/// Department week as a text table
pub fn render(summary: &DepartmentSummary, currency: &str) -> String {
    let mut out = format!("== {} ==\n", summary.department.label());

    if summary.is_empty() {
        out.push_str(&format!(
            "Aucun employé. Ajoutez {}.\n",
            summary.department.role_noun()
        ));
        return out;
    }

    out.push_str(&format!("{:<20} {:<NAME_WIDTH$}", "ID", "Nom"));
    for day in Weekday::ALL {
        out.push_str(&format!(" {:<DAY_WIDTH$}", day.label()));
    }
    out.push_str(" Total\n");

    for row in &summary.rows {
        out.push_str(&format!("{:<20} {:<NAME_WIDTH$}", row.id, row.name));
        for (_, cell) in row.days.iter() {
            let text = if cell.advance == 0.0 {
                cell.shift.label().to_string()
            } else {
                // advances reduce pay; a negative one shows as a credit
                let sign = if cell.advance > 0.0 { '-' } else { '+' };
                let amount = format_amount(cell.advance.abs(), "");
                format!("{} {}{}", cell.shift.label(), sign, amount.trim_end())
            };
            out.push_str(&format!(" {:<DAY_WIDTH$}", text));
        }
        out.push_str(&format!(" {}\n", format_amount(row.total_pay, currency)));
    }

    out.push_str(&format!(
        "Net: {}\n",
        format_amount(summary.net_total, currency)
    ));
    out
}
