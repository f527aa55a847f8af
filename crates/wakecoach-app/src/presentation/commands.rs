use anyhow::bail;
use chrono::Local;

use wakecoach_domain::reminder::Reminder;
use wakecoach_domain::shared::DomainError;
use wakecoach_domain::user::User;

use crate::application::dtos::ReminderDto;
use crate::presentation::bootstrap::AppContext;
use crate::presentation::cli::{parse_reminder_time, Cli, Command, ReminderAction};

pub async fn run(cli: Cli, ctx: AppContext) -> anyhow::Result<()> {
    match cli.command {
        Command::Signup { email, password } => signup(&ctx, &email, &password).await,
        Command::Login { email, password } => login(&ctx, &email, &password).await,
        Command::Logout => logout(&ctx).await,
        Command::Wake => wake(&ctx).await,
        Command::Status => status(&ctx).await,
        Command::History { limit } => history(&ctx, limit).await,
        Command::Reminder { action } => reminder(&ctx, action).await,
        Command::Run => run_daemon(&ctx).await,
    }
}

async fn signup(ctx: &AppContext, email: &str, password: &str) -> anyhow::Result<()> {
    let user = ctx.auth_service.sign_up(email, password).await?;
    println!("Account created for {}.", user.email);
    println!("Log in with: wakecoach login --email {} --password ...", user.email);
    Ok(())
}

async fn login(ctx: &AppContext, email: &str, password: &str) -> anyhow::Result<()> {
    let (token, user) = ctx.auth_service.sign_in(email, password).await?;
    ctx.session_store.save(&token)?;
    println!("Logged in as {}. Good morning habits await 🌅", user.email);
    Ok(())
}

async fn logout(ctx: &AppContext) -> anyhow::Result<()> {
    if let Some(token) = ctx.session_store.load()? {
        ctx.auth_service.sign_out(&token).await?;
    }
    ctx.session_store.clear()?;
    println!("Logged out.");
    Ok(())
}

/// Resolve the stored session to a user, with a friendly message when there
/// is none to resolve.
async fn require_user(ctx: &AppContext) -> anyhow::Result<User> {
    let Some(token) = ctx.session_store.load()? else {
        bail!("Not logged in. Run `wakecoach login` first.");
    };

    match ctx.auth_service.current_user(&token).await {
        Ok(user) => Ok(user),
        Err(DomainError::SessionNotFound(_)) | Err(DomainError::ExpiredSession(_)) => {
            ctx.session_store.clear()?;
            bail!("Session expired. Run `wakecoach login` again.");
        }
        Err(e) => Err(e.into()),
    }
}

async fn wake(ctx: &AppContext) -> anyhow::Result<()> {
    let user = require_user(ctx).await?;

    match ctx.wake_up_service.mark_wake_up(&user, Local::now()).await {
        Ok(result) => {
            println!("Marked! 🌅  Streak: {} day(s)", result.streak);
            println!("{}", result.motivation);
            if result.reminder_created {
                println!(
                    "Daily reminder set for {:02}:{:02}. Change it with `wakecoach reminder set HH:MM`.",
                    Reminder::DEFAULT_HOUR,
                    Reminder::DEFAULT_MINUTE
                );
            }
            Ok(())
        }
        // Normal outcomes, not failures: mirror the disabled-button states.
        Err(DomainError::WakeAlreadyLogged) => {
            println!("Already marked today 👏");
            Ok(())
        }
        Err(DomainError::WakeAfterCutoff) => {
            println!("Too late to log today 🕗 (cutoff {})", ctx.config.cutoff_hour);
            Ok(())
        }
        Err(e) => bail!("Error logging wake-up: {e}"),
    }
}

async fn status(ctx: &AppContext) -> anyhow::Result<()> {
    let user = require_user(ctx).await?;
    let status = ctx.status_queries.status(user.id(), Local::now()).await;

    println!("Streak: {} day(s)", status.current_streak);
    match &status.last_wake {
        Some(last) => println!("Last wake-up: {last}"),
        None => println!("No wake-ups before the cutoff yet."),
    }

    if status.already_logged_today {
        println!("Today: already marked 👏");
    } else if status.too_late {
        println!("Today: closed, cutoff was {}", status.cutoff);
    } else {
        println!("Today: open until {}, run `wakecoach wake`", status.cutoff);
    }
    Ok(())
}

async fn history(ctx: &AppContext, limit: usize) -> anyhow::Result<()> {
    let user = require_user(ctx).await?;
    let tz = Local::now().timezone();
    let entries = ctx.status_queries.history(user.id(), limit, &tz).await?;

    if entries.is_empty() {
        println!("No wake-ups recorded yet.");
        return Ok(());
    }

    for entry in entries {
        let marker = if entry.counts_toward_streak { " " } else { "*" };
        println!("{marker} {}", entry.created_at);
    }
    println!("(* after cutoff, not counted toward the streak)");
    Ok(())
}

async fn reminder(ctx: &AppContext, action: ReminderAction) -> anyhow::Result<()> {
    let user = require_user(ctx).await?;

    match action {
        ReminderAction::Set { time } => {
            let (hour, minute) = parse_reminder_time(&time)?;

            let reminder = match ctx.reminder_repo.find_by_user(user.id()).await? {
                Some(mut existing) => {
                    existing.reschedule(hour, minute)?;
                    existing
                }
                None => Reminder::new(user.id().clone(), hour, minute)?,
            };
            ctx.reminder_repo.save(&reminder).await?;

            println!("Wake-up reminder set for {hour:02}:{minute:02}.");
            println!("It fires while `wakecoach run` is running.");
        }
        ReminderAction::Show => match ctx.reminder_repo.find_by_user(user.id()).await? {
            Some(reminder) => {
                let dto = ReminderDto::from(&reminder);
                if dto.enabled {
                    println!("Wake-up reminder set for {:02}:{:02}.", dto.hour, dto.minute);
                } else {
                    println!(
                        "Reminder at {:02}:{:02} is cancelled. Re-enable with `wakecoach reminder set`.",
                        dto.hour, dto.minute
                    );
                }
            }
            None => println!("No reminder configured."),
        },
        ReminderAction::Cancel => match ctx.reminder_repo.find_by_user(user.id()).await? {
            Some(mut reminder) => {
                reminder.disable();
                ctx.reminder_repo.save(&reminder).await?;
                println!("Reminder cancelled.");
            }
            None => println!("No reminder configured."),
        },
    }
    Ok(())
}

async fn run_daemon(ctx: &AppContext) -> anyhow::Result<()> {
    ctx.reminder_scheduler.start().await?;
    println!("Reminder daemon running. Press Ctrl-C to stop.");

    tokio::signal::ctrl_c().await?;
    ctx.reminder_scheduler.shutdown().await;
    Ok(())
}
