//! Interactive numbered menu driving a [`CandidateStore`].
//!
//! Input and output are injected so the same loop runs against stdin/stdout
//! or in-memory buffers.

use crate::app::display;
use crate::core::store::CandidateStore;
use crate::domain::model::{Candidate, Criterion, SortOutcome};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    DisplayAll,
    Sort(Criterion),
    SearchName,
    SearchSkill,
    TopK,
    SaveAndExit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::DisplayAll),
            "3" => Some(MenuChoice::Sort(Criterion::Cgpa)),
            "4" => Some(MenuChoice::Sort(Criterion::Experience)),
            "5" => Some(MenuChoice::Sort(Criterion::SkillCount)),
            "6" => Some(MenuChoice::SearchName),
            "7" => Some(MenuChoice::SearchSkill),
            "8" => Some(MenuChoice::TopK),
            "9" => Some(MenuChoice::SaveAndExit),
            _ => None,
        }
    }
}

/// How the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Saved(usize),
    InputClosed,
}

const MENU: &str = "\
1.  Add Candidate
2.  Display All Candidates
3.  Sort by CGPA
4.  Sort by Experience
5.  Sort by Skills Count
6.  Search by Name (Binary Search)
7.  Search by Skill (Linear Search)
8.  Show Top Candidates
9.  Save & Exit";

pub struct MenuSession<'a, S: Storage, R, W> {
    store: &'a mut CandidateStore<S>,
    data_file: String,
    top_k: usize,
    input: R,
    output: W,
}

impl<'a, S, R, W> MenuSession<'a, S, R, W>
where
    S: Storage,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(
        store: &'a mut CandidateStore<S>,
        data_file: impl Into<String>,
        top_k: usize,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            data_file: data_file.into(),
            top_k,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self) -> Result<SessionEnd> {
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line().await? else {
                writeln!(self.output, "\nInput closed, exiting without saving.")?;
                tracing::warn!("Menu input closed before Save & Exit");
                return Ok(SessionEnd::InputClosed);
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add_candidate().await?,
                Some(MenuChoice::DisplayAll) => self.display_all()?,
                Some(MenuChoice::Sort(criterion)) => self.sort(criterion)?,
                Some(MenuChoice::SearchName) => self.search_by_name().await?,
                Some(MenuChoice::SearchSkill) => self.search_by_skill().await?,
                Some(MenuChoice::TopK) => self.show_top().await?,
                Some(MenuChoice::SaveAndExit) => match self.store.save(&self.data_file).await {
                    Ok(count) => {
                        writeln!(self.output, "\n✓ Data saved to {}", self.data_file)?;
                        writeln!(self.output, "\nThank you for using the Resume Shortlist!")?;
                        return Ok(SessionEnd::Saved(count));
                    }
                    Err(e) => {
                        tracing::error!("❌ Save failed: {}", e);
                        writeln!(self.output, "\n✗ Error: {}", e.user_friendly_message())?;
                        writeln!(self.output, "💡 {}", e.recovery_suggestion())?;
                    }
                },
                None => writeln!(self.output, "\n✗ Invalid choice. Please try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", "=".repeat(50))?;
        writeln!(self.output, "     RESUME SHORTLISTING SYSTEM")?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        writeln!(self.output, "{}", MENU)?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        write!(self.output, "Enter choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line().await
    }

    async fn prompt_parsed<T: std::str::FromStr>(&mut self, text: &str) -> Result<Option<T>> {
        let Some(raw) = self.prompt(text).await? else {
            return Ok(None);
        };
        match raw.trim().parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "✗ '{}' is not a valid number.", raw.trim())?;
                Ok(None)
            }
        }
    }

    async fn add_candidate(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Add Candidate ---")?;
        let Some(name) = self.prompt("Enter Name: ").await? else {
            return Ok(());
        };
        let Some(cgpa) = self.prompt_parsed::<f64>("Enter CGPA (0.0 - 10.0): ").await? else {
            return Ok(());
        };
        let Some(experience) = self.prompt_parsed::<u32>("Enter Experience (years): ").await?
        else {
            return Ok(());
        };
        let Some(skill_count) = self.prompt_parsed::<usize>("Enter number of skills: ").await?
        else {
            return Ok(());
        };

        writeln!(self.output, "Enter skills (one per line):")?;
        let mut skills = Vec::with_capacity(skill_count);
        for _ in 0..skill_count {
            let Some(skill) = self.read_line().await? else {
                return Ok(());
            };
            skills.push(skill);
        }

        self.store.add(Candidate::new(name, cgpa, experience, skills));
        writeln!(self.output, "\n✓ Candidate added successfully!")?;
        Ok(())
    }

    fn display_all(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "\nNo candidates available.")?;
            return Ok(());
        }
        let rendered = display::table("ALL CANDIDATES", self.store.all());
        writeln!(self.output, "\n{}", rendered)?;
        Ok(())
    }

    fn sort(&mut self, criterion: Criterion) -> Result<()> {
        match self.store.sort_in_place(criterion) {
            SortOutcome::Empty => {
                writeln!(self.output, "\nNo candidates to sort.")?;
                Ok(())
            }
            SortOutcome::Sorted(strategy) => {
                writeln!(
                    self.output,
                    "\n✓ Sorted by {} (Descending) using {}",
                    criterion, strategy
                )?;
                self.display_all()
            }
        }
    }

    async fn search_by_name(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "\nNo candidates available.")?;
            return Ok(());
        }
        let Some(name) = self.prompt("\nEnter candidate name to search: ").await? else {
            return Ok(());
        };

        let found = self.store.search_by_name(&name).map(display::candidate_row);
        match found {
            Some(row) => {
                writeln!(self.output, "\n✓ Candidate Found (Binary Search):")?;
                self.write_rows(std::iter::once(row))?;
            }
            None => writeln!(self.output, "\n✗ Candidate not found.")?,
        }
        Ok(())
    }

    async fn search_by_skill(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "\nNo candidates available.")?;
            return Ok(());
        }
        let Some(skill) = self.prompt("\nEnter skill to search: ").await? else {
            return Ok(());
        };

        let rows: Vec<String> = self
            .store
            .search_by_skill(&skill)
            .into_iter()
            .map(display::candidate_row)
            .collect();
        if rows.is_empty() {
            writeln!(self.output, "\n✗ No candidates found with skill: {}", skill)?;
        } else {
            writeln!(
                self.output,
                "\n✓ Found {} candidate(s) with skill '{}' (Linear Search):",
                rows.len(),
                skill
            )?;
            self.write_rows(rows)?;
        }
        Ok(())
    }

    async fn show_top(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "\nNo candidates available.")?;
            return Ok(());
        }
        writeln!(self.output, "\n--- Top {} Candidates ---", self.top_k)?;
        let Some(choice) = self
            .prompt("1. By CGPA\n2. By Experience\n3. By Skills Count\nEnter choice: ")
            .await?
        else {
            return Ok(());
        };
        let criterion = match choice.trim() {
            "1" => Criterion::Cgpa,
            "2" => Criterion::Experience,
            "3" => Criterion::SkillCount,
            _ => {
                writeln!(self.output, "\n✗ Invalid choice.")?;
                return Ok(());
            }
        };

        let rows: Vec<String> = self
            .store
            .top_k(criterion, self.top_k)
            .into_iter()
            .map(display::candidate_row)
            .collect();
        writeln!(
            self.output,
            "\n✓ Top {} Candidates by {} (using Max Heap):",
            rows.len(),
            criterion
        )?;
        self.write_rows(rows)
    }

    fn write_rows(&mut self, rows: impl IntoIterator<Item = String>) -> Result<()> {
        writeln!(self.output, "{}", display::rule('-'))?;
        writeln!(self.output, "{}", display::header_row())?;
        writeln!(self.output, "{}", display::rule('-'))?;
        for row in rows {
            writeln!(self.output, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(
            MenuChoice::parse(" 5 "),
            Some(MenuChoice::Sort(Criterion::SkillCount))
        );
        assert_eq!(MenuChoice::parse("9"), Some(MenuChoice::SaveAndExit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("ten"), None);
    }
}
