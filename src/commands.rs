//! CLI command handlers: parse input, call the API, report.

use anyhow::{anyhow, bail, Context, Result};
use reqwest::Method;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::api::{ApiClient, ApiRequest, Resource};
use crate::cli::{
    Args, CategoryAction, Command, ConfirmArg, DataArg, ProfileAction, ResourceAction,
    SingletonAction,
};
use crate::config::{Config, FileConfig};
use crate::models::{
    About, Blog, BlogCategory, Contact, Education, Experience, Project, Quote, Skill,
    SkillCategory, Technology, UpdateProfile,
};
use crate::session::{FileSessionStore, SessionStore};
use crate::ui::{display_identity, display_json, display_session, display_success};

pub struct CommandContext {
    pub client: ApiClient,
    pub store: Arc<FileSessionStore>,
}

impl CommandContext {
    /// Open the stored session and build a client around it.
    pub fn open(config: &Config) -> Result<Self> {
        let store = Arc::new(FileSessionStore::open(config.session_file.clone()));
        let session_store: Arc<dyn SessionStore> = store.clone();

        let mut builder = ApiClient::builder(&config.base_url, session_store);
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create API client")?;

        if let Some(cookie) = store.cookie() {
            client.restore_cookies(&cookie);
        }

        Ok(Self { client, store })
    }

    /// Keep the refresh cookie on disk while the session is alive.
    pub fn persist_cookies(&self) {
        if self.store.get().is_authenticated {
            self.store.set_cookie(self.client.cookie_header());
        }
    }
}

pub async fn run(args: Args, config: Config) -> Result<()> {
    if let Command::ConfigInit = args.command {
        return config_init();
    }

    let ctx = CommandContext::open(&config)?;
    debug!(base_url = %config.base_url, session_file = %config.session_file.display(), "client ready");

    let result = dispatch(&ctx, args.command).await;
    ctx.persist_cookies();
    result
}

async fn dispatch(ctx: &CommandContext, command: Command) -> Result<()> {
    let client = &ctx.client;
    match command {
        Command::Login { email, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Password: ")?,
            };
            let user = client.login(&email, &SecretString::from(password)).await?;
            display_success("Logged in.");
            display_identity(&user);
        }
        Command::Logout => {
            client.logout().await?;
            display_success("Logged out.");
        }
        Command::Whoami => display_session(&client.session()),
        Command::Refresh => {
            client.refresh().await?;
            display_success("Access token refreshed.");
        }
        Command::ChangePassword {
            current,
            new_password,
        } => {
            let current = match current {
                Some(p) => p,
                None => prompt("Current password: ")?,
            };
            let new_password = match new_password {
                Some(p) => p,
                None => {
                    let first = prompt("New password: ")?;
                    let confirm = prompt("Confirm new password: ")?;
                    if first != confirm {
                        bail!("Passwords do not match");
                    }
                    first
                }
            };
            client
                .change_password(
                    &SecretString::from(current),
                    &SecretString::from(new_password),
                )
                .await?;
            display_success("Password changed.");
        }
        Command::Request { method, path, data } => {
            let method = Method::from_bytes(method.to_uppercase().as_bytes())
                .map_err(|_| anyhow!("Invalid HTTP method: {}", method))?;
            let mut request = ApiRequest::new(method, path);
            if data.data.is_some() {
                let body: serde_json::Value = read_data(&data)?;
                request = request.json(&body)?;
            }
            let response = client.execute(request).await?;
            if response.body().is_empty() {
                display_success(&format!("{}", response.status()));
            } else {
                match response.json::<serde_json::Value>() {
                    Ok(value) => display_json(&value),
                    Err(_) => println!("{}", response.text()),
                }
            }
        }
        Command::About { action } => run_about(client, action).await?,
        Command::Quotes { action } => run_resource::<Quote>(client, action).await?,
        Command::Projects { action } => run_resource::<Project>(client, action).await?,
        Command::Blogs { action } => run_resource::<Blog>(client, action).await?,
        Command::BlogCategories { action } => run_resource::<BlogCategory>(client, action).await?,
        Command::Technologies { action } => run_resource::<Technology>(client, action).await?,
        Command::Experiences { action } => run_resource::<Experience>(client, action).await?,
        Command::Educations { action } => run_resource::<Education>(client, action).await?,
        Command::Skills { action } => run_resource::<Skill>(client, action).await?,
        Command::SkillCategories { action } => match action {
            CategoryAction::List => {
                display_json(&client.resources::<SkillCategory>().list().await?);
            }
            CategoryAction::Create { data } => {
                let created = client
                    .resources::<SkillCategory>()
                    .create(&read_data(&data)?)
                    .await?;
                display_success("Skill category created.");
                display_json(&created);
            }
        },
        Command::Contacts { action } => run_resource::<Contact>(client, action).await?,
        Command::Profile { action } => match action {
            ProfileAction::Get => display_json(&client.profile().await?),
            ProfileAction::Update { data } => {
                let update: UpdateProfile = read_data(&data)?;
                let profile = client.update_profile(&update).await?;
                display_success("Profile updated.");
                display_json(&profile);
            }
        },
        Command::ConfigInit => config_init()?,
    }
    Ok(())
}

async fn run_resource<R>(client: &ApiClient, action: ResourceAction) -> Result<()>
where
    R: Resource + Serialize,
    R::Create: DeserializeOwned,
    R::Update: DeserializeOwned,
{
    let resources = client.resources::<R>();
    match action {
        ResourceAction::List => display_json(&resources.list().await?),
        ResourceAction::Get { id } => display_json(&resources.get(&id).await?),
        ResourceAction::Create { data } => {
            let created = resources.create(&read_data(&data)?).await?;
            display_success(&format!("{} created.", capitalize(R::NAME)));
            display_json(&created);
        }
        ResourceAction::Update { id, data } => {
            let updated = resources.update(&id, &read_data(&data)?).await?;
            display_success(&format!("{} updated.", capitalize(R::NAME)));
            display_json(&updated);
        }
        ResourceAction::Delete { id, confirm } => {
            if !confirmed(&confirm, R::NAME, &id)? {
                println!("Cancelled.");
                return Ok(());
            }
            resources.delete(&id).await?;
            display_success(&format!("{} deleted.", capitalize(R::NAME)));
        }
    }
    Ok(())
}

async fn run_about(client: &ApiClient, action: SingletonAction) -> Result<()> {
    match action {
        SingletonAction::Get => match client.about().await? {
            Some(about) => display_json(&about),
            None => println!("No about section yet."),
        },
        SingletonAction::Create { data } => {
            run_resource::<About>(client, ResourceAction::Create { data }).await?
        }
        SingletonAction::Update { id, data } => {
            run_resource::<About>(client, ResourceAction::Update { id, data }).await?
        }
        SingletonAction::Delete { id, confirm } => {
            run_resource::<About>(client, ResourceAction::Delete { id, confirm }).await?
        }
    }
    Ok(())
}

/// Parse `--data`, which is either inline JSON or `@path`.
pub fn read_data<T: DeserializeOwned>(data: &DataArg) -> Result<T> {
    let raw = data
        .data
        .as_deref()
        .ok_or_else(|| anyhow!("--data is required"))?;

    let json = match raw.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file: {}", path))?,
        None => raw.to_string(),
    };
    serde_json::from_str(&json).context("Invalid JSON in --data")
}

fn confirmed(confirm: &ConfirmArg, what: &str, id: &str) -> Result<bool> {
    if confirm.yes {
        return Ok(true);
    }
    let answer = prompt(&format!("Delete {} {}? This cannot be undone. [y/N] ", what, id))?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn prompt(label: &str) -> Result<String> {
    eprint!("{}", label);
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn config_init() -> Result<()> {
    let dir = FileConfig::user_config_dir()
        .ok_or_else(|| anyhow!("Cannot determine home directory"))?;
    let path = dir.join("folio-admin.yaml");
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
    fs::write(&path, FileConfig::example_yaml())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    display_success(&format!("Created {}", path.display()));
    Ok(())
}
