use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Admin client for the portfolio CMS API", long_about = None)]
pub struct Args {
    #[arg(
        long = "api-url",
        global = true,
        help = "API base URL (e.g., http://localhost:5000/api/v1)"
    )]
    pub api_url: Option<String>,

    #[arg(long = "session-file", global = true, help = "Where the login session is stored")]
    pub session_file: Option<PathBuf>,

    #[arg(long = "timeout", global = true, help = "Per-request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(short = 'v', long = "verbose", global = true, help = "Log requests and token refreshes")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "FOLIO_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Log out and forget the stored session
    Logout,
    /// Show the logged in user
    Whoami,
    /// Request a new access token now
    Refresh,
    /// Change the account password
    ChangePassword {
        #[arg(long, env = "FOLIO_PASSWORD", hide_env_values = true)]
        current: Option<String>,
        #[arg(long = "new", env = "FOLIO_NEW_PASSWORD", hide_env_values = true)]
        new_password: Option<String>,
    },
    /// Send an arbitrary authenticated request
    Request {
        /// HTTP method, e.g. GET or PATCH
        method: String,
        /// Path relative to the API base URL
        path: String,
        #[command(flatten)]
        data: DataArg,
    },
    /// The about section (a single record)
    About {
        #[command(subcommand)]
        action: SingletonAction,
    },
    Quotes {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Projects {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Blogs {
        #[command(subcommand)]
        action: ResourceAction,
    },
    BlogCategories {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Technologies {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Experiences {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Educations {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Skills {
        #[command(subcommand)]
        action: ResourceAction,
    },
    SkillCategories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    Contacts {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Write an example config file to the user config directory
    ConfigInit,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct DataArg {
    #[arg(
        short = 'd',
        long = "data",
        help = "JSON body, or @path to read it from a file"
    )]
    pub data: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ConfirmArg {
    #[arg(short = 'y', long = "yes", help = "Do not ask for confirmation")]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    List,
    Get {
        id: String,
    },
    Create {
        #[command(flatten)]
        data: DataArg,
    },
    Update {
        id: String,
        #[command(flatten)]
        data: DataArg,
    },
    Delete {
        id: String,
        #[command(flatten)]
        confirm: ConfirmArg,
    },
}

#[derive(Subcommand, Debug)]
pub enum SingletonAction {
    Get,
    Create {
        #[command(flatten)]
        data: DataArg,
    },
    Update {
        id: String,
        #[command(flatten)]
        data: DataArg,
    },
    Delete {
        id: String,
        #[command(flatten)]
        confirm: ConfirmArg,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    List,
    Create {
        #[command(flatten)]
        data: DataArg,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    Get,
    Update {
        #[command(flatten)]
        data: DataArg,
    },
}
