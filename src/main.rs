use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use mygit::areas::repository::Repository;
use mygit::commands::plumbing::cat_file::CatFileMode;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "mygit",
    version = "0.1.0",
    about = "A minimal content-addressable object store",
    long_about = "Stores files as immutable blob objects and directories as tree objects, \
    addressed by the SHA-1 of their content, using git's loose object format.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "path",
        global = true,
        env = "MYGIT_DIR",
        help = "Repository root (defaults to the current directory)"
    )]
    path: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "MYGIT_LOG",
        default_value = "warn",
        help = "Log level for diagnostics on stderr (off, error, warn, info, debug, trace)"
    )]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .mygit directory with an empty object store \
        in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file as a blob and optionally write it to the object store"
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object store")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "write-tree",
        about = "Snapshot the repository directory into tree objects",
        long_about = "This command stores every file below the repository root as a blob \
        and every directory as a tree, then prints the root tree ID."
    )]
    WriteTree,
    #[command(
        name = "inspect-object",
        about = "Print an object's type, size and decoded content"
    )]
    InspectObject {
        #[arg(index = 1, help = "The object ID (may be abbreviated)")]
        sha: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content, type or size of an object"
    )]
    CatFile {
        #[arg(
            short = 'p',
            conflicts_with_all = ["show_type", "size"],
            help = "Pretty-print the object's content"
        )]
        pretty: bool,
        #[arg(short = 't', conflicts_with = "size", help = "Print the object's type")]
        show_type: bool,
        #[arg(short = 's', help = "Print the object's size")]
        size: bool,
        #[arg(index = 1, help = "The object ID (may be abbreviated)")]
        sha: String,
    },
    #[command(name = "ls-tree", about = "List the contents of a tree object")]
    LsTree {
        #[arg(short, help = "Recurse into sub-trees")]
        recursive: bool,
        #[arg(index = 1, help = "The tree ID (may be abbreviated)")]
        sha: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    mygit::logging::init_tracing(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let pwd = std::env::current_dir()?;
    let root = cli
        .path
        .as_ref()
        .map(|path| pwd.join(path))
        .unwrap_or_else(|| pwd.clone());

    match cli.command {
        Commands::Init { path } => {
            let path = path.map(|path| pwd.join(path)).unwrap_or(root);
            if !path.exists() {
                std::fs::create_dir_all(&path)?;
            }

            open(&path)?.init()
        }
        Commands::HashObject { write, file } => open(&root)?.hash_object(&pwd.join(file), write),
        Commands::WriteTree => open(&root)?.write_tree(),
        Commands::InspectObject { sha } => open(&root)?.inspect_object(&sha),
        Commands::CatFile {
            show_type,
            size,
            sha,
            ..
        } => {
            let mode = if show_type {
                CatFileMode::Type
            } else if size {
                CatFileMode::Size
            } else {
                CatFileMode::Pretty
            };

            open(&root)?.cat_file(&sha, mode)
        }
        Commands::LsTree { recursive, sha } => open(&root)?.ls_tree(&sha, recursive),
    }
}

fn open(path: &Path) -> Result<Repository> {
    Repository::new(path, Box::new(std::io::stdout()))
}
