use clap::{Parser, Subcommand};

use wakecoach_domain::shared::DomainError;

#[derive(Parser, Debug)]
#[command(
    name = "wakecoach",
    version,
    about = "Wake-up habit tracker: log your mornings, keep your streak alive"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and store the session locally
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and forget the stored session
    Logout,
    /// Mark today's wake-up
    Wake,
    /// Show streak, last wake-up and whether today is still open
    Status,
    /// List recorded wake-ups, newest first
    History {
        #[arg(long, default_value_t = 30)]
        limit: usize,
    },
    /// Manage the daily reminder
    Reminder {
        #[command(subcommand)]
        action: ReminderAction,
    },
    /// Run the reminder daemon in the foreground
    Run,
}

#[derive(Subcommand, Debug)]
pub enum ReminderAction {
    /// Set the reminder time (HH:MM)
    Set { time: String },
    /// Show the current reminder
    Show,
    /// Cancel the reminder
    Cancel,
}

/// Parse "HH:MM" into validated hour/minute.
pub fn parse_reminder_time(raw: &str) -> Result<(u8, u8), DomainError> {
    let invalid = || DomainError::InvalidInput(format!("Expected HH:MM, got '{raw}'"));

    let (hour, minute) = raw.trim().split_once(':').ok_or_else(invalid)?;
    let hour: u8 = hour.parse().map_err(|_| invalid())?;
    let minute: u8 = minute.parse().map_err(|_| invalid())?;

    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reminder_time() {
        assert_eq!(parse_reminder_time("06:30").unwrap(), (6, 30));
        assert_eq!(parse_reminder_time("23:59").unwrap(), (23, 59));
        assert_eq!(parse_reminder_time(" 7:05 ").unwrap(), (7, 5));
    }

    #[test]
    fn test_parse_reminder_time_rejects_garbage() {
        assert!(parse_reminder_time("24:00").is_err());
        assert!(parse_reminder_time("07:60").is_err());
        assert!(parse_reminder_time("0730").is_err());
        assert!(parse_reminder_time("seven").is_err());
    }
}
