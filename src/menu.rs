//! The interactive console session. Reader and writer are generic so that a
//! whole session can be scripted in tests.

use std::{
    fmt::Display,
    io::{BufRead, Write},
    num::NonZeroU32,
    path::PathBuf,
    str::FromStr,
};

use chrono::NaiveDateTime;
use owo_colors::OwoColorize;

use crate::{
    activity::{ClimbSession, Difficulty, Location, TrainingSession},
    error::{Error, Result},
    formatting::difficulty_label,
    report::Report,
    tracker::Tracker,
};

const BANNER_RULE: &str = "=========================================";
const MAX_MINUTES: u32 = 24 * 60;
const MAX_REPS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    AddClimb,
    AddTraining,
    View,
    SaveReport,
    LoadReport,
    Exit,
    Delete,
}

impl FromStr for Choice {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Choice::AddClimb),
            "2" => Ok(Choice::AddTraining),
            "3" => Ok(Choice::View),
            "4" => Ok(Choice::SaveReport),
            "5" => Ok(Choice::LoadReport),
            "6" => Ok(Choice::Exit),
            "7" => Ok(Choice::Delete),
            _ => Err(()),
        }
    }
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    tracker: Tracker,
    now: NaiveDateTime,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// `now` stamps every report written during the session.
    pub fn new(input: R, output: W, tracker: Tracker, now: NaiveDateTime) -> Self {
        Self {
            input,
            output,
            tracker,
            now,
        }
    }

    pub fn into_tracker(self) -> Tracker {
        self.tracker
    }

    pub fn run(&mut self) -> Result<()> {
        self.banner()?;
        self.setup()?;

        loop {
            let choice = self.choose()?;
            match choice {
                Some(Choice::AddClimb) => self.add_climb()?,
                Some(Choice::AddTraining) => self.add_training()?,
                Some(Choice::View) => self.view()?,
                Some(Choice::SaveReport) => self.save_report()?,
                Some(Choice::LoadReport) => self.load_report()?,
                Some(Choice::Delete) => self.delete()?,
                Some(Choice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "{}", "Invalid choice.".red())?,
            }
        }
    }

    fn banner(&mut self) -> Result<()> {
        writeln!(self.output, "{}", BANNER_RULE.cyan())?;
        writeln!(self.output, "{}", "        CLIMBING ACTIVITY TRACKER         ".cyan())?;
        writeln!(self.output, "{}", BANNER_RULE.cyan())?;
        Ok(())
    }

    fn setup(&mut self) -> Result<()> {
        let name = self.prompt_text("Enter your full name: ")?;
        self.tracker.set_climber_name(name);
        let days = self.prompt_number("About how many days do you climb per year? ", 0, 366)?;
        self.tracker.set_climbing_days(days);
        Ok(())
    }

    fn choose(&mut self) -> Result<Option<Choice>> {
        writeln!(self.output, "\n{}", "====== MENU ======".yellow())?;
        writeln!(self.output, "{}", "1. Add Climb Session".green())?;
        writeln!(self.output, "{}", "2. Add Training Session".green())?;
        writeln!(self.output, "{}", "3. View Activities".green())?;
        writeln!(self.output, "{}", "4. View Summary Report and save to file".green())?;
        writeln!(self.output, "{}", "5. Load report".green())?;
        writeln!(self.output, "{}", "6. Exit".green())?;
        writeln!(self.output, "{}", "7. Delete Activity".green())?;
        write!(self.output, "Choice: ")?;
        self.output.flush()?;

        Ok(self.read_line()?.parse().ok())
    }

    fn add_climb(&mut self) -> Result<()> {
        let name = self.prompt_text("Enter climbing style: ")?;
        let place = self.prompt_text("Where did you climb? ")?;
        let indoor = self.prompt_yes_no("Was this climb indoors? (Y=Indoor, N=Outdoor)")?;
        let difficulty = self.prompt_difficulty()?;
        let hours = self.prompt_number("Hours climbed this session: ", 0.1, 24.0)?;
        let duration = self.prompt_number("Duration in minutes: ", 0, MAX_MINUTES)?;

        let location = Location::new(place, indoor);
        self.tracker
            .add_session(ClimbSession::new(name, duration, difficulty, hours, location));
        writeln!(self.output, "{}", "Climb session added.".green())?;
        Ok(())
    }

    fn add_training(&mut self) -> Result<()> {
        let name = self.prompt_text("Enter training name: ")?;
        let difficulty = self.prompt_difficulty()?;
        let duration = self.prompt_number("Duration in minutes: ", 0, MAX_MINUTES)?;
        let reps = self.prompt_until("Enter reps: ", 1, MAX_REPS, |answer| {
            answer
                .parse::<NonZeroU32>()
                .ok()
                .filter(|reps| reps.get() <= MAX_REPS)
        })?;

        self.tracker
            .add_session(TrainingSession::new(name, duration, difficulty, reps));
        writeln!(self.output, "{}", "Training session added.".green())?;
        Ok(())
    }

    fn view(&mut self) -> Result<()> {
        let activities = self.tracker.activities();
        if activities.is_empty() {
            writeln!(self.output, "No activities recorded.")?;
            return Ok(());
        }

        let mut rendered = String::new();
        activities
            .display_all(&mut rendered)
            .map_err(|_| std::io::Error::other("failed to render activities"))?;
        self.output.write_all(rendered.as_bytes())?;
        Ok(())
    }

    fn save_report(&mut self) -> Result<()> {
        let report = self.tracker.summary(self.now);
        write!(self.output, "{}", report.summary_table())?;

        let path = PathBuf::from(self.prompt_text("Enter filename to save report: ")?);
        match report.save(&path) {
            Ok(()) => writeln!(self.output, "{}", format!("Report saved to {}", path.display()).green())?,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not save report");
                writeln!(self.output, "{}", format!("Error saving report: {err}").red())?;
            }
        }
        Ok(())
    }

    fn load_report(&mut self) -> Result<()> {
        let path = PathBuf::from(self.prompt_text("Enter filename to load report: ")?);
        match Report::load(&path) {
            Ok(report) => {
                writeln!(self.output, "\n----- LOADED REPORT -----")?;
                write!(self.output, "{}", report.summary_table())?;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not load report");
                writeln!(self.output, "{}", format!("Error loading report: {err}").red())?;
            }
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let count = self.tracker.activity_count();
        if count == 0 {
            writeln!(self.output, "No activities to delete.")?;
            return Ok(());
        }

        let index = self.prompt_number("Enter index to delete: ", 0, count - 1)?;
        match self.tracker.remove_activity(index) {
            Ok(()) => writeln!(self.output, "Deleted.")?,
            Err(err) => writeln!(self.output, "{}", err.to_string().red())?,
        }
        Ok(())
    }

    fn prompt_difficulty(&mut self) -> Result<Difficulty> {
        writeln!(self.output, "Select Difficulty:")?;
        for difficulty in Difficulty::ALL {
            writeln!(self.output, "{}. {}", difficulty.level(), difficulty_label(difficulty))?;
        }
        self.prompt_until("Choice: ", 1, 4, |answer| {
            answer
                .parse::<u8>()
                .ok()
                .and_then(|level| Difficulty::try_from(level).ok())
        })
    }

    fn prompt_number<T>(&mut self, prompt: &str, min: T, max: T) -> Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        self.prompt_until(prompt, min, max, |answer| {
            answer
                .parse::<T>()
                .ok()
                .filter(|value| *value >= min && *value <= max)
        })
    }

    /// Re-prompts until `accept` yields a value; `min` and `max` only feed the hint.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        min: impl Display,
        max: impl Display,
        accept: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            let answer = self.prompt_text(prompt)?;
            match accept(&answer) {
                Some(value) => return Ok(value),
                None => {
                    tracing::warn!(answer = %answer, "rejected numeric input");
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a value between {min} and {max}."
                    )?;
                }
            }
        }
    }

    fn prompt_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self.prompt_text(&format!("{prompt} (y/n): "))?;
            match answer.to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => continue,
            }
        }
    }

    fn prompt_text(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt.yellow())?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
