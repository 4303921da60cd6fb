use anyhow::{Context, Result};
use arc::areas::repository::Repository;
use arc::artifacts::objects::object_type::ObjectType;
use arc::commands::plumbing::hash_object::hash_object;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "arc",
    version = "0.1.0",
    about = "A minimal content-addressable object store",
    long_about = "This is a minimal version-control object store, written in Rust. \
    It stores immutable, typed, compressed objects on disk and retrieves \
    them by content hash.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the payload of an object in the repository. \
        It requires the object type and a reference to the object."
    )]
    CatFile {
        #[arg(
            index = 1,
            help = "The object type",
            value_parser = ["blob", "tree", "commit", "tag"]
        )]
        kind: String,
        #[arg(index = 2, help = "The object to display")]
        object: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object store",
        long_about = "This command computes the object id for a file and can write the \
        object into the store. It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object into the object store")]
        write: bool,
        #[arg(
            short = 't',
            long = "type",
            default_value = "blob",
            value_parser = ["blob", "tree", "commit", "tag"],
            help = "The object type"
        )]
        kind: String,
        #[arg(index = 1, help = "Read the object from this file")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => std::env::current_dir()?,
            };

            Repository::init(&path, Box::new(std::io::stdout()))?
        }
        Commands::CatFile { kind, object } => {
            let kind = ObjectType::try_from(kind.as_str())?;
            let pwd = std::env::current_dir()?;
            let repository = Repository::find(&pwd, true, Box::new(std::io::stdout()))?
                .context("No repository found")?;

            repository.cat_file(kind, object)?
        }
        Commands::HashObject { write, kind, file } => {
            let kind = ObjectType::try_from(kind.as_str())?;
            let repository = if *write {
                let pwd = std::env::current_dir()?;
                Some(
                    Repository::find(&pwd, true, Box::new(std::io::stdout()))?
                        .context("No repository found")?,
                )
            } else {
                None
            };

            hash_object(repository.as_ref(), kind, file, &mut std::io::stdout())?
        }
    }

    Ok(())
}
