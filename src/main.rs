use clap::Parser;
use moodlog::application::{
    add_entry, delete_entry, edit_entry, entries_for_date, init, mood_statistics, ConfigService,
    EntryDraft, EntryPatch,
};
use moodlog::cli::{format_entry_list, format_mood_stats, Cli, Commands};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::FileSystemRepository;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Add {
            date,
            content,
            mood,
            mood_note,
            prompts,
            tags,
            voice,
            images,
            drawings,
            sentiment,
        } => {
            let repo = FileSystemRepository::discover()?;

            let prompts = prompts
                .iter()
                .map(|raw| add_entry::parse_prompt(raw))
                .collect::<Result<Vec<_>, _>>()?;

            let draft = EntryDraft {
                date,
                content,
                mood,
                mood_note,
                prompts,
                tags,
                voice,
                images,
                drawings,
                sentiment,
            };

            let entry = add_entry::add_entry(&repo, draft)?;
            println!("Added entry {}", entry.id);
            Ok(())
        }
        Commands::Show { date } => {
            let repo = FileSystemRepository::discover()?;
            let entries = entries_for_date(&repo, &date)?;
            print!("{}", ensure_trailing_newline(format_entry_list(&entries)));
            Ok(())
        }
        Commands::Edit {
            id,
            date,
            content,
            mood,
            mood_note,
            sentiment,
            tags,
        } => {
            let repo = FileSystemRepository::discover()?;

            let patch = EntryPatch {
                date,
                content,
                mood,
                mood_note,
                sentiment,
                add_tags: tags,
            };

            edit_entry::edit_entry(&repo, &id, patch)?;
            println!("Updated entry {}", id);
            Ok(())
        }
        Commands::Delete { id } => {
            let repo = FileSystemRepository::discover()?;
            delete_entry::delete_entry(&repo, &id)?;
            println!("Deleted entry {}", id);
            Ok(())
        }
        Commands::Stats { start, end } => {
            let repo = FileSystemRepository::discover()?;
            let points = mood_statistics(&repo, &start, &end)?;
            print!("{}", ensure_trailing_newline(format_mood_stats(&points)));
            Ok(())
        }
        Commands::Config { key, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("created = {}", config.created.to_rfc3339());
                println!("format_version = {}", config.format_version);
                Ok(())
            } else if let Some(k) = key {
                let val = service.get(&k)?;
                println!("{}", val);
                Ok(())
            } else {
                println!("Usage: moodlog config [--list | <key>]");
                println!("Valid keys: created, format_version");
                Ok(())
            }
        }
    }
}

fn ensure_trailing_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
