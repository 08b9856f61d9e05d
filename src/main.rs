//! hanactl CLI Entry Point
//!
//! Thin command-line layer over the [`hanactl`] facade. Every subcommand maps
//! onto one facade operation against an instance profile from the registry.
//!
//! All output to stdout is JSON-only. Logs go to stderr (`RUST_LOG` filter).

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use hanactl::{
    list_instances, resolve_instance, save_instance, update_conf_file, ConfigLocation,
    ErrorEnvelope, HanaError, HanaInstance, Metadata, StoredInstance, SuccessEnvelope,
};

/// hanactl - SAP HANA administration facade
#[derive(Parser)]
#[command(name = "hanactl")]
#[command(about = "Automation facade over SAP HANA command-line administration tools")]
#[command(version)]
struct Cli {
    /// Instance profile to operate on (defaults to the registry default)
    #[arg(long, global = true)]
    instance: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether the instance is installed and running
    Status,

    /// Start the instance
    Start,

    /// Stop the instance
    Stop,

    /// Print the installed version (major.minor.patch)
    Version,

    /// Print the system replication state
    SrState,

    /// Enable system replication on this primary
    SrEnable {
        /// Site name
        #[arg(long)]
        name: String,
    },

    /// Disable system replication on this primary
    SrDisable,

    /// Register this node as a secondary
    SrRegister {
        /// Site name
        #[arg(long)]
        name: String,
        #[arg(long)]
        remote_host: String,
        #[arg(long)]
        remote_instance: String,
        /// sync, syncmem or async
        #[arg(long)]
        replication_mode: String,
        /// delta_datashipping, logreplay, ...
        #[arg(long)]
        operation_mode: String,
    },

    /// Unregister a secondary site
    SrUnregister {
        #[arg(long)]
        name: String,
    },

    /// Clean up the replication configuration
    SrCleanup {
        #[arg(long)]
        force: bool,
    },

    /// Check whether a user store key exists
    KeyCheck { key: String },

    /// Create a user store key
    KeyCreate {
        key: String,
        /// host:port
        #[arg(long)]
        environment: String,
        #[arg(long)]
        user: String,
        /// Environment variable holding the key password
        #[arg(long)]
        password_env: String,
        #[arg(long)]
        database: Option<String>,
    },

    /// Run a full data backup
    Backup {
        /// User store key to connect with
        #[arg(long)]
        key: String,
        /// Environment variable holding the database password
        #[arg(long)]
        password_env: String,
        #[arg(long)]
        database: String,
        backup_name: String,
    },

    /// Dump an installer configuration template
    ConfDump {
        #[arg(long)]
        software_path: String,
        conf_file: String,
        #[arg(long, default_value = "root")]
        root_user: String,
        /// Environment variable holding the root password
        #[arg(long)]
        root_password_env: String,
    },

    /// Install SAP HANA from a prepared configuration file
    Install {
        #[arg(long)]
        software_path: String,
        conf_file: String,
        #[arg(long, default_value = "root")]
        root_user: String,
        /// Environment variable holding the root password
        #[arg(long)]
        root_password_env: String,
    },

    /// Uninstall the instance
    Uninstall {
        #[arg(long, default_value = "root")]
        root_user: String,
        /// Environment variable holding the root password
        #[arg(long)]
        root_password_env: String,
        /// Shared installation root (default: /hana/shared)
        #[arg(long)]
        root_path: Option<String>,
    },

    /// Set values in an installer configuration file
    ConfUpdate {
        path: PathBuf,
        /// KEY=VALUE substitution (repeatable)
        #[arg(long = "set", value_parser = parse_substitution)]
        substitutions: Vec<(String, String)>,
    },

    /// Manage instance profiles
    #[command(subcommand)]
    Instance(InstanceAction),
}

#[derive(Subcommand)]
enum InstanceAction {
    /// Add or replace an instance profile
    Add {
        name: String,
        #[arg(long)]
        sid: String,
        #[arg(long)]
        number: String,
        /// Environment variable holding the <sid>adm password
        #[arg(long)]
        password_env: String,
        /// Store in the per-user registry instead of the local one
        #[arg(long)]
        global: bool,
    },

    /// List instance profiles
    List,
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Version => "version",
            Self::SrState => "sr-state",
            Self::SrEnable { .. } => "sr-enable",
            Self::SrDisable => "sr-disable",
            Self::SrRegister { .. } => "sr-register",
            Self::SrUnregister { .. } => "sr-unregister",
            Self::SrCleanup { .. } => "sr-cleanup",
            Self::KeyCheck { .. } => "key-check",
            Self::KeyCreate { .. } => "key-create",
            Self::Backup { .. } => "backup",
            Self::ConfDump { .. } => "conf-dump",
            Self::Install { .. } => "install",
            Self::Uninstall { .. } => "uninstall",
            Self::ConfUpdate { .. } => "conf-update",
            Self::Instance(InstanceAction::Add { .. }) => "instance-add",
            Self::Instance(InstanceAction::List) => "instance-list",
        }
    }
}

fn parse_substitution(s: &str) -> anyhow::Result<(String, String)> {
    let (key, value) = s.split_once('=').ok_or_else(|| anyhow!("expected KEY=VALUE, got '{s}'"))?;
    Ok((key.trim().to_string(), value.to_string()))
}

fn env_password(var: &str) -> hanactl::Result<String> {
    std::env::var(var).map_err(|_| {
        HanaError::config_error(format!("Environment variable {var} not found for password"))
    })
}

/// Execute the subcommand; `sid` is filled in once an instance is resolved
fn run(cli: Cli, sid: &mut String) -> hanactl::Result<Value> {
    // Commands that do not need an instance
    match cli.command {
        Commands::ConfUpdate { path, substitutions } => {
            let path = update_conf_file(path, substitutions)?;
            return Ok(json!({ "path": path }));
        }
        Commands::Instance(InstanceAction::Add {
            name,
            sid: profile_sid,
            number,
            password_env,
            global,
        }) => {
            let location = if global { ConfigLocation::Global } else { ConfigLocation::Local };
            let profile = StoredInstance::with_password_env(profile_sid, number, password_env);
            save_instance(&name, profile, location)?;
            return Ok(json!({ "saved": name }));
        }
        Commands::Instance(InstanceAction::List) => {
            let instances: Vec<Value> = list_instances()?
                .into_iter()
                .map(|(name, sid, number)| json!({ "name": name, "sid": sid, "instance": number }))
                .collect();
            return Ok(json!(instances));
        }
        _ => {}
    }

    let identity = resolve_instance(cli.instance.as_deref())?;
    sid.push_str(identity.sid());
    let hana = HanaInstance::with_runner(identity, hanactl::SystemRunner);

    let data = match cli.command {
        Commands::Status => {
            json!({ "installed": hana.is_installed(), "running": hana.is_running()? })
        }
        Commands::Start => {
            hana.start()?;
            Value::Null
        }
        Commands::Stop => {
            hana.stop()?;
            Value::Null
        }
        Commands::Version => json!(hana.get_version()?),
        Commands::SrState => json!(hana.get_sr_state()?),
        Commands::SrEnable { name } => {
            hana.sr_enable_primary(&name)?;
            Value::Null
        }
        Commands::SrDisable => {
            hana.sr_disable_primary()?;
            Value::Null
        }
        Commands::SrRegister {
            name,
            remote_host,
            remote_instance,
            replication_mode,
            operation_mode,
        } => {
            hana.sr_register_secondary(
                &name,
                &remote_host,
                &remote_instance,
                &replication_mode,
                &operation_mode,
            )?;
            Value::Null
        }
        Commands::SrUnregister { name } => {
            hana.sr_unregister_secondary(&name)?;
            Value::Null
        }
        Commands::SrCleanup { force } => {
            hana.sr_cleanup(force)?;
            Value::Null
        }
        Commands::KeyCheck { key } => json!({ "exists": hana.check_user_key(&key)? }),
        Commands::KeyCreate { key, environment, user, password_env, database } => {
            let password = env_password(&password_env)?;
            hana.create_user_key(&key, &environment, &user, &password, database.as_deref())?;
            Value::Null
        }
        Commands::Backup { key, password_env, database, backup_name } => {
            let password = env_password(&password_env)?;
            hana.create_backup(&key, &password, &database, &backup_name)?;
            json!({ "backup": backup_name })
        }
        Commands::ConfDump { software_path, conf_file, root_user, root_password_env } => {
            let root_password = env_password(&root_password_env)?;
            let path = hana.create_conf_file(&software_path, &conf_file, &root_user, &root_password)?;
            json!({ "path": path })
        }
        Commands::Install { software_path, conf_file, root_user, root_password_env } => {
            let root_password = env_password(&root_password_env)?;
            hana.install(&software_path, &conf_file, &root_user, &root_password)?;
            Value::Null
        }
        Commands::Uninstall { root_user, root_password_env, root_path } => {
            let root_password = env_password(&root_password_env)?;
            hana.uninstall(&root_user, &root_password, root_path.as_deref())?;
            Value::Null
        }
        Commands::ConfUpdate { .. } | Commands::Instance(_) => unreachable!("handled above"),
    };

    Ok(data)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "hanactl=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.name();
    let started = Instant::now();
    let mut sid = String::new();

    match run(cli, &mut sid) {
        Ok(data) => {
            let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            let envelope = SuccessEnvelope::new(sid, command, data, Metadata::new(elapsed));
            println!("{}", serde_json::to_string(&envelope).unwrap_or_default());
            ExitCode::SUCCESS
        }
        Err(err) => {
            let envelope = ErrorEnvelope::from_error(sid, command, &err);
            println!("{}", serde_json::to_string(&envelope).unwrap_or_default());
            ExitCode::FAILURE
        }
    }
}
