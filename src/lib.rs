//! hanactl - SAP HANA Administration Facade
//!
//! hanactl drives the native SAP HANA command-line tools (`HDB`, `hdblcm`,
//! `hdbnsutil`, `hdbuserstore`, `hdbsql`). Each operation builds one command
//! line, executes it as the right OS user and maps the outcome into a typed
//! value or a [`HanaError`].
//!
//! # Module Organization
//! - [`error`] - Error types and handling
//! - [`shell`] - Command runner trait, default runner and process results
//! - [`hana`] - Instance facade, replication state and configuration patching
//! - [`config`] - Named instance profiles
//! - [`output`] - JSON output envelopes for the CLI
//!
//! # Example
//! ```no_run
//! use hanactl::{HanaInstance, SrState};
//!
//! let hana = HanaInstance::new("PRD", "00", "Qwerty1234");
//! if hana.is_installed() && hana.get_sr_state()? == SrState::Disabled {
//!     hana.sr_enable_primary("NUREMBERG")?;
//! }
//! # Ok::<(), hanactl::HanaError>(())
//! ```

pub mod config;
pub mod error;
pub mod hana;
pub mod output;
pub mod shell;

pub use config::{
    list_instances, resolve_instance, save_instance, ConfigLocation, InstanceRegistry,
    StoredInstance,
};
pub use error::{HanaError, Result};
pub use hana::{
    classify_sr_state, create_conf_file, install, parse_version, update_conf_file, HanaInstance,
    InstanceIdentity, SrState, DEFAULT_ROOT_PATH,
};
pub use output::{ErrorEnvelope, ErrorInfo, Metadata, SuccessEnvelope};
pub use shell::{format_su_cmd, CommandRunner, ProcessResult, SystemRunner};
