//! Command-line front end over the SDK services.
//!
//! Results are printed to stdout as pretty JSON so they can be piped into
//! other tools. Logs go to the log file, never stdout.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use jira_sdk::api::auth;
use jira_sdk::error::{AppError, Result};
use jira_sdk::models::{FieldSearchOptions, ScreenParamsScheme, WorkflowSearchOptions};
use jira_sdk::{Config, Jira, JiraClient, Profile, Settings};

const DEFAULT_PAGE_SIZE: i64 = 50;

#[derive(Parser, Debug)]
#[command(name = "jira-sdk", version, about = "Query the Jira Cloud REST API")]
pub struct Cli {
    #[arg(long, global = true, help = "Profile to use instead of the default")]
    pub profile: Option<String>,
    #[arg(long, global = true, help = "REST API version, overrides the config")]
    pub api_version: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage connection profiles.
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Show the authenticated user.
    Myself,
    /// Show whether attachments are enabled and the upload limit.
    AttachmentSettings,
    /// List fields, or search them when filters are given.
    Fields {
        #[arg(long)]
        query: Option<String>,
        #[arg(long = "type", help = "custom or system; repeatable")]
        types: Vec<String>,
    },
    /// List the contexts of a custom field.
    FieldContexts {
        field_id: String,
        #[arg(long, default_value_t = 0)]
        start_at: i64,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        max_results: i64,
    },
    /// List screens.
    Screens {
        #[arg(long)]
        query: Option<String>,
    },
    /// List workflows.
    Workflows {
        #[arg(long = "name", help = "Workflow name; repeatable")]
        names: Vec<String>,
    },
    /// List the members of a group.
    GroupMembers {
        group: String,
        #[arg(long, default_value_t = false)]
        inactive: bool,
    },
    /// List the worklogs of an issue.
    Worklogs { issue: String },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    Add {
        name: String,
        #[arg(long)]
        url: String,
        #[arg(long)]
        email: String,
        #[arg(long, help = "API token to store in the OS keychain")]
        token: Option<String>,
        #[arg(long, default_value_t = false, help = "Call /myself before saving")]
        verify: bool,
    },
    List,
    Remove {
        name: String,
    },
}

/// Listing entry for `profile list`.
#[derive(Debug, Serialize)]
struct ProfileSummary<'a> {
    name: &'a str,
    url: &'a str,
    email: &'a str,
    default: bool,
    has_token: bool,
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Profile { command } => run_profile(command, cli.api_version.as_deref()).await,
        command => {
            let jira = connect(cli.profile.as_deref(), cli.api_version.as_deref())?;
            run_query(&jira, command).await
        }
    }
}

async fn run_profile(command: ProfileCommands, api_version: Option<&str>) -> Result<()> {
    let mut config = Config::load()?;

    match command {
        ProfileCommands::Add {
            name,
            url,
            email,
            token,
            verify,
        } => {
            let profile = Profile::new(name.clone(), url, email);
            config.add_profile(profile.clone())?;

            // Nothing reaches disk until the token is stored and, if asked,
            // the credentials are accepted.
            if let Some(token) = &token {
                auth::store_token(&name, token)?;
            }

            let saved = async {
                if verify {
                    let jira = jira_for(&profile, &config.settings, api_version)?;
                    let (me, _) = jira.myself.details(&[]).await?;
                    println!("Verified as {} ({})", me.display_name, me.account_id);
                }
                config.save()?;
                Ok::<(), AppError>(())
            }
            .await;

            if let Err(e) = saved {
                if token.is_some() {
                    forget_token(&name);
                }
                return Err(e);
            }

            info!(profile = %name, verified = verify, "Profile added");
            println!("Added profile '{}'", name);
        }
        ProfileCommands::List => {
            let default = config.settings.default_profile.as_deref();
            let summaries: Vec<ProfileSummary> = config
                .profiles
                .iter()
                .map(|p| ProfileSummary {
                    name: &p.name,
                    url: &p.url,
                    email: &p.email,
                    default: default == Some(p.name.as_str()),
                    has_token: auth::has_token(&p.name),
                })
                .collect();
            print_json(&summaries)?;
        }
        ProfileCommands::Remove { name } => {
            config.remove_profile(&name)?;
            config.save()?;
            forget_token(&name);
            println!("Removed profile '{}'", name);
        }
    }

    Ok(())
}

fn forget_token(profile: &str) {
    if let Err(e) = auth::delete_token(profile) {
        warn!(profile = %profile, "Could not delete stored token: {}", e);
    }
}

fn connect(profile: Option<&str>, api_version: Option<&str>) -> Result<Jira> {
    let config = Config::load()?;
    let profile = config.resolve_profile(profile)?;
    jira_for(profile, &config.settings, api_version)
}

/// Services for `profile`, at `api_version` or the configured one.
fn jira_for(profile: &Profile, settings: &Settings, api_version: Option<&str>) -> Result<Jira> {
    let version = api_version.unwrap_or(&settings.api_version);
    let client = JiraClient::from_profile(profile, settings)?;
    Ok(Jira::new(Arc::new(client), version)?)
}

async fn run_query(jira: &Jira, command: Commands) -> Result<()> {
    match command {
        Commands::Myself => {
            let (me, _) = jira.myself.details(&[]).await?;
            print_json(&me)
        }
        Commands::AttachmentSettings => {
            let (settings, _) = jira.attachment.settings().await?;
            print_json(&settings)
        }
        Commands::Fields { query, types } => {
            if query.is_none() && types.is_empty() {
                let (fields, _) = jira.field.gets().await?;
                return print_json(&fields);
            }
            let options = FieldSearchOptions {
                types,
                query: query.unwrap_or_default(),
                ..Default::default()
            };
            let (page, _) = jira.field.search(Some(&options), 0, DEFAULT_PAGE_SIZE).await?;
            print_json(&page)
        }
        Commands::FieldContexts {
            field_id,
            start_at,
            max_results,
        } => {
            let (page, _) = jira
                .field
                .context
                .gets(&field_id, None, start_at, max_results)
                .await?;
            print_json(&page)
        }
        Commands::Screens { query } => {
            let options = ScreenParamsScheme {
                query_string: query.unwrap_or_default(),
                ..Default::default()
            };
            let (page, _) = jira.screen.gets(Some(&options), 0, DEFAULT_PAGE_SIZE).await?;
            print_json(&page)
        }
        Commands::Workflows { names } => {
            let options = WorkflowSearchOptions {
                workflow_names: names,
                ..Default::default()
            };
            let (page, _) = jira.workflow.gets(Some(&options), 0, DEFAULT_PAGE_SIZE).await?;
            print_json(&page)
        }
        Commands::GroupMembers { group, inactive } => {
            let (page, _) = jira
                .group
                .members(&group, inactive, 0, DEFAULT_PAGE_SIZE)
                .await?;
            print_json(&page)
        }
        Commands::Worklogs { issue } => {
            let (page, _) = jira
                .worklog
                .issue(&issue, 0, DEFAULT_PAGE_SIZE, 0, &[])
                .await?;
            print_json(&page)
        }
        Commands::Profile { .. } => Err(AppError::other("profile commands do not need a connection")),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::other(format!("could not format output: {}", e)))?;
    println!("{}", json);
    Ok(())
}
