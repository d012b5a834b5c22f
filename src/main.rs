use clap::Parser;
use resume_shortlist::app::display;
use resume_shortlist::core::ConfigProvider;
use resume_shortlist::utils::error::ErrorSeverity;
use resume_shortlist::utils::{logger, validation::Validate};
use resume_shortlist::{
    Candidate, CandidateStore, CliConfig, Command, LoadOutcome, LocalStorage, MenuSession,
    RosterConfig, RosterError, SortOutcome,
};
use serde::Serialize;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(config.log_level(), config.log_json());
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &config).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: &CliConfig, config: &RosterConfig) -> Result<(), RosterError> {
    let storage = LocalStorage::new(config.base_dir().to_string());
    let mut store = CandidateStore::new(storage);
    let data_file = config.data_file();

    match store.load(data_file).await? {
        LoadOutcome::Loaded(count) => tracing::info!("📁 Loaded {} candidate(s)", count),
        LoadOutcome::NoExistingData => {
            tracing::info!("No existing data file found. Starting fresh.")
        }
    }

    match cli.command.clone().unwrap_or(Command::Menu) {
        Command::Menu => {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            let mut session =
                MenuSession::new(&mut store, data_file, config.top_k(), input, std::io::stdout());
            session.run().await?;
        }
        Command::List => emit(cli.json, "ALL CANDIDATES", store.all())?,
        Command::Add {
            name,
            cgpa,
            experience,
            skills,
            language,
        } => {
            let mut candidate = Candidate::new(name, cgpa, experience, skills);
            candidate.primary_language = language;
            store.add(candidate);
            store.save(data_file).await?;
            println!("✓ Candidate added ({} total)", store.len());
        }
        Command::Sort { by, no_save } => match store.sort_in_place(by) {
            SortOutcome::Empty => println!("No candidates to sort."),
            SortOutcome::Sorted(strategy) => {
                if !no_save {
                    store.save(data_file).await?;
                }
                let title = format!("SORTED BY {} ({})", by.label().to_uppercase(), strategy);
                emit(cli.json, &title, store.all())?;
            }
        },
        Command::SearchName { name } => match store.search_by_name(&name) {
            Some(found) => emit(cli.json, "CANDIDATE FOUND", [found])?,
            None => println!("✗ Candidate not found."),
        },
        Command::SearchSkill { skill } => {
            let hits = store.search_by_skill(&skill);
            if hits.is_empty() {
                println!("✗ No candidates found with skill: {}", skill);
            } else {
                emit(cli.json, &format!("SKILL: {}", skill), hits)?;
            }
        }
        Command::Top { by, k } => {
            let top = store.top_k(by, k.unwrap_or_else(|| config.top_k()));
            if top.is_empty() {
                println!("No candidates available.");
            } else {
                let title = format!("TOP {} BY {}", top.len(), by.label().to_uppercase());
                emit(cli.json, &title, top)?;
            }
        }
    }

    Ok(())
}

fn emit<'a, I>(json: bool, title: &str, candidates: I) -> Result<(), RosterError>
where
    I: IntoIterator<Item = &'a Candidate>,
    I::IntoIter: Clone,
{
    let candidates = candidates.into_iter();
    if json {
        let rows: Vec<&Candidate> = candidates.collect();
        println!("{}", to_json(&rows)?);
    } else if candidates.clone().next().is_none() {
        println!("No candidates available.");
    } else {
        println!("{}", display::table(title, candidates));
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RosterError> {
    Ok(serde_json::to_string_pretty(value)?)
}
