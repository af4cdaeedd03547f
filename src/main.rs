use clap::Parser;
use toolshed::{
    catalog::CatalogStore,
    cli::commands::{
        add::AddCommand, delete::DeleteCommand, export::ExportCommand, list::ListCommand,
        search::SearchCommand, touch::TouchCommand, update::UpdateCommand, verify::VerifyCommand,
        CommandHandler,
    },
    cli::{Cli, Commands},
    config::{Mode, SettingsLoader},
    io::paths::ToolshedPaths,
    Result,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = ToolshedPaths::new()?;
    let settings = SettingsLoader::load(paths.settings_file())?;
    let mut store = CatalogStore::load(paths, settings)?;
    store.record_mode_usage(Mode::Cli)?;

    match cli.command {
        Commands::Add {
            name,
            path,
            description,
            category,
            tags,
            usage,
            notes,
        } => AddCommand {
            name,
            path,
            description,
            category,
            tags,
            usage,
            notes,
        }
        .execute(&mut store)?,

        Commands::Search {
            name,
            description,
            path,
            category,
            tags,
            any_tag,
            fuzzy,
            exact,
            regex,
            sort,
            reverse,
            limit,
        } => SearchCommand {
            name,
            description,
            path,
            category,
            tags,
            any_tag,
            fuzzy,
            exact,
            regex,
            sort,
            reverse,
            limit,
        }
        .execute(&mut store)?,

        Commands::List {
            category,
            sort,
            reverse,
            limit,
            count,
            categories,
        } => ListCommand {
            category,
            sort,
            reverse,
            limit,
            count,
            categories,
        }
        .execute(&mut store)?,

        Commands::Update {
            name,
            rename,
            path,
            description,
            category,
            tags,
            usage,
            notes,
        } => UpdateCommand {
            name,
            rename,
            path,
            description,
            category,
            tags,
            usage,
            notes,
        }
        .execute(&mut store)?,

        Commands::Delete { name, confirm } => {
            DeleteCommand { name, confirm }.execute(&mut store)?
        }

        Commands::Use { name } => TouchCommand { name }.execute(&mut store)?,

        Commands::Verify => VerifyCommand.execute(&mut store)?,

        Commands::Export {
            format,
            output,
            category,
        } => ExportCommand {
            format,
            output,
            category,
        }
        .execute(&mut store)?,
    }

    Ok(())
}
