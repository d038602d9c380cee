//! `todolist` CLI entry-point.
//!
//! Available sub-commands, all scoped by `--user`:
//! - `create` — create a list owned by the user.
//! - `list`   — print every list the user owns.
//! - `get`    — print a single list.
//! - `update` — change the title and/or description of a list.
//! - `delete` — delete a list and its ownership link.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use db::{
    pool::create_pool, DbError, NewTodoList, TableNames, TodoListRepository, TodoListStore,
    UpdateListInput,
};

#[derive(Parser)]
#[command(name = "todolist", about = "Manage todo lists stored in a relational database", version)]
struct Cli {
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    #[arg(long, env = "TODO_LISTS_TABLE", default_value = db::config::DEFAULT_LISTS_TABLE)]
    lists_table: String,

    #[arg(long, env = "USERS_LISTS_TABLE", default_value = db::config::DEFAULT_USERS_LISTS_TABLE)]
    users_lists_table: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a list and link it to the user.
    Create {
        #[arg(long)]
        user: i64,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Print all lists owned by the user.
    List {
        #[arg(long)]
        user: i64,
    },
    /// Print one list owned by the user.
    Get {
        #[arg(long)]
        user: i64,
        #[arg(long)]
        id: i64,
    },
    /// Update the title and/or description of a list.
    Update {
        #[arg(long)]
        user: i64,
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a list owned by the user.
    Delete {
        #[arg(long)]
        user: i64,
        #[arg(long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let tables = TableNames::new(cli.lists_table, cli.users_lists_table)?;
    let pool = create_pool(&cli.database_url, cli.max_connections).await?;
    let store = TodoListStore::with_tables(pool, tables);

    run(&store, cli.command).await
}

async fn run(repo: &dyn TodoListRepository, command: Command) -> Result<()> {
    match command {
        Command::Create { user, title, description } => {
            let id = repo.create(user, &NewTodoList::new(title, description)).await?;
            info!("Created list {id} for user {user}");
            println!("{}", serde_json::json!({ "id": id }));
        }
        Command::List { user } => {
            let lists = repo.get_all(user).await?;
            println!("{}", serde_json::to_string_pretty(&lists)?);
        }
        Command::Get { user, id } => match repo.get_by_id(user, id).await {
            Ok(list) => println!("{}", serde_json::to_string_pretty(&list)?),
            Err(DbError::NotFound) => bail!("list {id} not found for user {user}"),
            Err(e) => return Err(e.into()),
        },
        Command::Update { user, id, title, description } => {
            let input = UpdateListInput { title, description };
            if input.validate().is_err() {
                bail!("nothing to update: pass --title and/or --description");
            }
            repo.update(user, id, &input).await?;
            info!("Updated list {id}");
        }
        Command::Delete { user, id } => {
            repo.delete(user, id).await?;
            info!("Deleted list {id}");
        }
    }

    Ok(())
}
