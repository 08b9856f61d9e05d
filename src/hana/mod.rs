//! SAP HANA Instance Facade
//!
//! [`HanaInstance`] turns high-level operations into the exact command lines
//! understood by the HANA tool chain (`HDB`, `hdblcm`, `hdbnsutil`,
//! `hdbuserstore`, `hdbsql`), runs them through a [`CommandRunner`] and maps
//! the outcome into typed values or [`HanaError`]s.
//!
//! # Execution Paths
//! - Instance-scoped commands run as the `<sid>adm` user with the instance
//!   password and fail with [`HanaError::CommandFailed`] on a non-zero exit code
//! - Installer commands run as a caller-supplied root user and fail with a
//!   fixed [`HanaError::OperationFailed`] phrase
//! - `get_version` and `is_running` run directly, without user wrapping
//!
//! # Probes
//! `is_installed` and `check_user_key` answer existence questions. `is_installed`
//! turns any runner failure into `false`. `check_user_key` only absorbs a failed
//! listing and still propagates environment errors.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::{HanaError, Result};
use crate::shell::{format_su_cmd, CommandRunner, ProcessResult, SystemRunner};

mod conf;
mod identity;

pub use conf::update_conf_file;
pub use identity::InstanceIdentity;

/// Default shared installation root
pub const DEFAULT_ROOT_PATH: &str = "/hana/shared";

/// Installer location relative to the installation media root
const HDBLCM_MEDIA_PATH: &str = "DATA_UNITS/HDB_LCM_LINUX_X86_64/hdblcm";

/// System replication role of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SrState {
    /// Node is the replication source
    Primary,
    /// Node replicates from a primary (sync, syncmem or async)
    Secondary,
    /// Replication is not configured on this node
    Disabled,
}

impl SrState {
    /// Get the state name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Disabled => "disabled",
        }
    }
}

impl std::fmt::Display for SrState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Replication markers in `hdbnsutil -sr_state` output, checked in order.
///
/// Primary must stay first: a primary node never reports a secondary mode.
const SR_STATE_PROBES: &[(&str, SrState)] = &[
    ("(?i).*mode: primary.*", SrState::Primary),
    ("(?i).*mode: (sync|syncmem|async)", SrState::Secondary),
];

/// Classify replication state from status output; first matching probe wins
pub fn classify_sr_state(result: &ProcessResult) -> Result<SrState> {
    for (pattern, state) in SR_STATE_PROBES {
        if result.find_pattern(pattern)? {
            return Ok(*state);
        }
    }
    Ok(SrState::Disabled)
}

/// Extract `major.minor.patch` from `HDB version` output
pub fn parse_version(result: &ProcessResult) -> Result<String> {
    let regex = regex::Regex::new(r"^\s*version:\s*(\d+(?:\.\d+)*)")?;
    result
        .lines()
        .find_map(|line| regex.captures(line))
        .map(|caps| caps[1].split('.').take(3).collect::<Vec<_>>().join("."))
        .ok_or(HanaError::VersionNotFound)
}

fn hdblcm(software_path: &str) -> String {
    format!("{software_path}/{HDBLCM_MEDIA_PATH}")
}

/// Dump an installer configuration template to `conf_file`
///
/// Runs as `root_user`. Returns `conf_file` on success.
pub fn create_conf_file<'a, R: CommandRunner>(
    runner: &R,
    software_path: &str,
    conf_file: &'a str,
    root_user: &str,
    root_password: &str,
) -> Result<&'a str> {
    let cmd = format!(
        "{} --action=install --dump_configfile_template={conf_file}",
        hdblcm(software_path)
    );
    let result = runner.execute(&cmd, Some(root_user), Some(root_password))?;
    if !result.success() {
        return Err(HanaError::operation_failed("SAP HANA configuration file creation failed"));
    }
    Ok(conf_file)
}

/// Install SAP HANA in batch mode from a prepared configuration file
pub fn install<R: CommandRunner>(
    runner: &R,
    software_path: &str,
    conf_file: &str,
    root_user: &str,
    root_password: &str,
) -> Result<()> {
    let cmd = format!("{} -b --configfile={conf_file}", hdblcm(software_path));
    info!(software_path, conf_file, "Installing SAP HANA");
    let result = runner.execute(&cmd, Some(root_user), Some(root_password))?;
    if !result.success() {
        return Err(HanaError::operation_failed("SAP HANA installation failed"));
    }
    Ok(())
}

/// Facade over one SAP HANA instance
pub struct HanaInstance<R = SystemRunner> {
    identity: InstanceIdentity,
    runner: R,
}

impl HanaInstance<SystemRunner> {
    /// Create a facade that executes commands on the local system
    pub fn new(sid: impl Into<String>, inst: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_runner(InstanceIdentity::new(sid, inst, password), SystemRunner)
    }
}

impl<R: CommandRunner> HanaInstance<R> {
    /// Create a facade with an explicit command runner
    pub fn with_runner(identity: InstanceIdentity, runner: R) -> Self {
        Self { identity, runner }
    }

    /// Identity this facade is bound to
    #[must_use]
    pub const fn identity(&self) -> &InstanceIdentity {
        &self.identity
    }

    /// Command runner used by this facade
    #[must_use]
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Run a command as `<sid>adm`; a non-zero exit code is an error
    ///
    /// The error carries the command line from the result, i.e. the form that
    /// was actually executed.
    pub fn run_hana_command(&self, cmd: &str) -> Result<ProcessResult> {
        let result = self.runner.execute(
            cmd,
            Some(self.identity.admin_user().as_str()),
            Some(self.identity.password()),
        )?;
        if !result.success() {
            return Err(HanaError::command_failed(result.cmd));
        }
        Ok(result)
    }

    /// Whether the instance is installed
    ///
    /// A runner failure (for example a missing `<sid>adm` user) is logged and
    /// reported as not installed.
    pub fn is_installed(&self) -> bool {
        match self.runner.execute(
            "HDB info",
            Some(self.identity.admin_user().as_str()),
            Some(self.identity.password()),
        ) {
            Ok(result) => result.success(),
            Err(err) => {
                error!(sid = self.identity.sid(), error = %err, "Could not inspect installation");
                false
            }
        }
    }

    /// Dump an installer configuration template (see [`create_conf_file`])
    pub fn create_conf_file<'a>(
        &self,
        software_path: &str,
        conf_file: &'a str,
        root_user: &str,
        root_password: &str,
    ) -> Result<&'a str> {
        create_conf_file(&self.runner, software_path, conf_file, root_user, root_password)
    }

    /// Install SAP HANA (see [`install`])
    pub fn install(
        &self,
        software_path: &str,
        conf_file: &str,
        root_user: &str,
        root_password: &str,
    ) -> Result<()> {
        install(&self.runner, software_path, conf_file, root_user, root_password)
    }

    /// Uninstall the instance using the installer under `root_path`
    ///
    /// `root_path` defaults to [`DEFAULT_ROOT_PATH`].
    pub fn uninstall(
        &self,
        root_user: &str,
        root_password: &str,
        root_path: Option<&str>,
    ) -> Result<()> {
        let root_path = root_path.unwrap_or(DEFAULT_ROOT_PATH);
        let cmd = format!(
            "{root_path}/{sid}/hdblcm/hdblcm --uninstall -b",
            sid = self.identity.sid_upper()
        );
        info!(sid = self.identity.sid(), root_path, "Uninstalling SAP HANA");
        let result = self.runner.execute(&cmd, Some(root_user), Some(root_password))?;
        if !result.success() {
            return Err(HanaError::operation_failed("SAP HANA uninstallation failed"));
        }
        Ok(())
    }

    /// Whether the instance daemon process exists
    pub fn is_running(&self) -> Result<bool> {
        let cmd = format!("pidof {}", self.identity.process_name());
        Ok(self.runner.execute(&cmd, None, None)?.success())
    }

    /// Installed version as `major.minor.patch`
    pub fn get_version(&self) -> Result<String> {
        let cmd = format_su_cmd("HDB version", &self.identity.admin_user());
        let result = self.runner.execute(&cmd, None, None)?;
        parse_version(&result)
    }

    /// Start the instance
    pub fn start(&self) -> Result<()> {
        info!(sid = self.identity.sid(), "Starting instance");
        self.run_hana_command("HDB start")?;
        Ok(())
    }

    /// Stop the instance
    pub fn stop(&self) -> Result<()> {
        info!(sid = self.identity.sid(), "Stopping instance");
        self.run_hana_command("HDB stop")?;
        Ok(())
    }

    /// Current system replication state
    pub fn get_sr_state(&self) -> Result<SrState> {
        let result = self.run_hana_command("hdbnsutil -sr_state")?;
        classify_sr_state(&result)
    }

    /// Enable system replication on the primary site `name`
    pub fn sr_enable_primary(&self, name: &str) -> Result<()> {
        self.run_hana_command(&format!("hdbnsutil -sr_enable --name={name}"))?;
        Ok(())
    }

    /// Disable system replication on the primary
    pub fn sr_disable_primary(&self) -> Result<()> {
        self.run_hana_command("hdbnsutil -sr_disable")?;
        Ok(())
    }

    /// Register this node as secondary site `name` of `remote_host`
    pub fn sr_register_secondary(
        &self,
        name: &str,
        remote_host: &str,
        remote_instance: &str,
        replication_mode: &str,
        operation_mode: &str,
    ) -> Result<()> {
        self.run_hana_command(&format!(
            "hdbnsutil -sr_register --name={name} --remoteHost={remote_host} \
             --remoteInstance={remote_instance} --replicationMode={replication_mode} \
             --operationMode={operation_mode}"
        ))?;
        Ok(())
    }

    /// Unregister secondary site `name`
    pub fn sr_unregister_secondary(&self, name: &str) -> Result<()> {
        self.run_hana_command(&format!("hdbnsutil -sr_unregister --name={name}"))?;
        Ok(())
    }

    /// Clean up replication configuration, optionally with `--force`
    pub fn sr_cleanup(&self, force: bool) -> Result<()> {
        let cmd = if force { "hdbnsutil -sr_cleanup --force" } else { "hdbnsutil -sr_cleanup" };
        self.run_hana_command(cmd)?;
        Ok(())
    }

    /// Whether the secure user store holds `key`
    ///
    /// Decided by the exit code of `hdbuserstore list`; a failing listing is
    /// logged and reported as absent. Spawn failures still propagate.
    pub fn check_user_key(&self, key: &str) -> Result<bool> {
        match self.run_hana_command(&format!("hdbuserstore list {key}")) {
            Ok(_) => Ok(true),
            Err(err @ HanaError::CommandFailed { .. }) => {
                error!(sid = self.identity.sid(), key, error = %err, "User key not available");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Store a connection key in the secure user store
    ///
    /// `environment` is `host:port`; `database` is appended as `@database` when given.
    pub fn create_user_key(
        &self,
        key: &str,
        environment: &str,
        user: &str,
        password: &str,
        database: Option<&str>,
    ) -> Result<()> {
        let db = database.map(|db| format!("@{db}")).unwrap_or_default();
        self.run_hana_command(&format!(
            "hdbuserstore set {key} {environment}{db} {user} {password}"
        ))?;
        Ok(())
    }

    /// Run a full data backup to file `backup_name` using stored key `key`
    pub fn create_backup(
        &self,
        key: &str,
        password: &str,
        database: &str,
        backup_name: &str,
    ) -> Result<()> {
        self.run_hana_command(&format!(
            r#"hdbsql -U {key} -d {database} -p {password} \"BACKUP DATA FOR FULL SYSTEM USING FILE ('{backup_name}')\""#
        ))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    type Call = (String, Option<String>, Option<String>);

    /// Runner that records calls and replays queued outcomes
    ///
    /// Commands without a queued outcome succeed with empty output.
    #[derive(Default)]
    struct ScriptedRunner {
        calls: RefCell<Vec<Call>>,
        outcomes: RefCell<VecDeque<Result<ProcessResult>>>,
    }

    impl ScriptedRunner {
        fn returning(returncode: i32, output: &str) -> Self {
            let runner = Self::default();
            runner.push(returncode, output);
            runner
        }

        fn push(&self, returncode: i32, output: &str) {
            self.outcomes
                .borrow_mut()
                .push_back(Ok(ProcessResult::new("", returncode, output, "")));
        }

        fn failing(err: HanaError) -> Self {
            let runner = Self::default();
            runner.outcomes.borrow_mut().push_back(Err(err));
            runner
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn execute(
            &self,
            command: &str,
            user: Option<&str>,
            password: Option<&str>,
        ) -> Result<ProcessResult> {
            self.calls.borrow_mut().push((
                command.to_string(),
                user.map(str::to_string),
                password.map(str::to_string),
            ));
            let executed = match user {
                Some(user) => format_su_cmd(command, user),
                None => command.to_string(),
            };
            match self.outcomes.borrow_mut().pop_front() {
                Some(Ok(mut result)) => {
                    result.cmd = executed;
                    Ok(result)
                }
                Some(Err(err)) => Err(err),
                None => Ok(ProcessResult::new(executed, 0, "", "")),
            }
        }
    }

    fn instance(runner: ScriptedRunner) -> HanaInstance<ScriptedRunner> {
        HanaInstance::with_runner(InstanceIdentity::new("prd", "00", "pass"), runner)
    }

    fn admin_call(command: &str) -> Call {
        (command.to_string(), Some("prdadm".to_string()), Some("pass".to_string()))
    }

    fn root_call(command: &str) -> Call {
        (command.to_string(), Some("root".to_string()), Some("pass".to_string()))
    }

    #[test]
    fn test_run_hana_command() {
        let hana = instance(ScriptedRunner::returning(0, "ok"));

        let result = hana.run_hana_command("test command").unwrap();

        assert_eq!(hana.runner().calls(), vec![admin_call("test command")]);
        assert_eq!(result.output, "ok");
        assert_eq!(result.cmd, "su -lc \"test command\" prdadm");
    }

    #[test]
    fn test_run_hana_command_error_carries_executed_command() {
        let hana = instance(ScriptedRunner::returning(1, ""));

        let err = hana.run_hana_command("test command").unwrap_err();

        assert_eq!(hana.runner().calls(), vec![admin_call("test command")]);
        assert_eq!(
            err.message(),
            "Error running hana command: su -lc \"test command\" prdadm"
        );
    }

    #[test]
    fn test_is_installed() {
        let hana = instance(ScriptedRunner::returning(0, ""));
        assert!(hana.is_installed());
        assert_eq!(hana.runner().calls(), vec![admin_call("HDB info")]);
    }

    #[test]
    fn test_is_installed_error() {
        let hana = instance(ScriptedRunner::returning(1, ""));
        assert!(!hana.is_installed());
        assert_eq!(hana.runner().calls(), vec![admin_call("HDB info")]);
    }

    #[test]
    fn test_is_installed_environment_error() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "test exception");
        let hana = instance(ScriptedRunner::failing(err.into()));
        assert!(!hana.is_installed());
        assert_eq!(hana.runner().calls(), vec![admin_call("HDB info")]);
    }

    #[test]
    fn test_create_conf_file() {
        let runner = ScriptedRunner::returning(0, "");

        let conf_file =
            create_conf_file(&runner, "software_path", "conf_file.conf", "root", "pass").unwrap();

        assert_eq!(conf_file, "conf_file.conf");
        assert_eq!(
            runner.calls(),
            vec![root_call(
                "software_path/DATA_UNITS/HDB_LCM_LINUX_X86_64/hdblcm \
                 --action=install --dump_configfile_template=conf_file.conf"
            )]
        );
    }

    #[test]
    fn test_create_conf_file_error() {
        let runner = ScriptedRunner::returning(1, "");
        let err =
            create_conf_file(&runner, "software_path", "conf_file.conf", "root", "pass").unwrap_err();
        assert!(err.message().contains("SAP HANA configuration file creation failed"));
    }

    #[test]
    fn test_install() {
        let runner = ScriptedRunner::returning(0, "");

        install(&runner, "software_path", "conf_file.conf", "root", "pass").unwrap();

        assert_eq!(
            runner.calls(),
            vec![root_call(
                "software_path/DATA_UNITS/HDB_LCM_LINUX_X86_64/hdblcm -b --configfile=conf_file.conf"
            )]
        );
    }

    #[test]
    fn test_install_error() {
        let runner = ScriptedRunner::returning(1, "");
        let err = install(&runner, "software_path", "conf_file.conf", "root", "pass").unwrap_err();
        assert!(err.message().contains("SAP HANA installation failed"));
    }

    #[test]
    fn test_install_through_instance() {
        let hana = instance(ScriptedRunner::returning(0, ""));
        hana.install("sw", "c.conf", "root", "pass").unwrap();
        assert_eq!(
            hana.runner().calls(),
            vec![root_call("sw/DATA_UNITS/HDB_LCM_LINUX_X86_64/hdblcm -b --configfile=c.conf")]
        );
    }

    #[test]
    fn test_uninstall_default_root() {
        let hana = instance(ScriptedRunner::returning(0, ""));
        hana.uninstall("root", "pass", None).unwrap();
        assert_eq!(
            hana.runner().calls(),
            vec![root_call("/hana/shared/PRD/hdblcm/hdblcm --uninstall -b")]
        );
    }

    #[test]
    fn test_uninstall_error_custom_root() {
        let hana = instance(ScriptedRunner::returning(1, ""));
        let err = hana.uninstall("root", "pass", Some("path")).unwrap_err();
        assert_eq!(hana.runner().calls(), vec![root_call("path/PRD/hdblcm/hdblcm --uninstall -b")]);
        assert!(err.message().contains("SAP HANA uninstallation failed"));
    }

    #[test]
    fn test_is_running() {
        let hana = instance(ScriptedRunner::returning(0, "12345"));
        assert!(hana.is_running().unwrap());
        assert_eq!(
            hana.runner().calls(),
            vec![("pidof hdb.sapPRD_HDB00".to_string(), None, None)]
        );
    }

    #[test]
    fn test_is_not_running() {
        let hana = instance(ScriptedRunner::returning(1, ""));
        assert!(!hana.is_running().unwrap());
    }

    #[test]
    fn test_get_version() {
        let hana = instance(ScriptedRunner::returning(0, "Output text\n  version:  1.2.3.4.5\nline2"));
        assert_eq!(hana.get_version().unwrap(), "1.2.3");
        assert_eq!(
            hana.runner().calls(),
            vec![("su -lc \"HDB version\" prdadm".to_string(), None, None)]
        );
    }

    #[test]
    fn test_get_version_short() {
        let hana = instance(ScriptedRunner::returning(0, "version: 2.00"));
        assert_eq!(hana.get_version().unwrap(), "2.00");
    }

    #[test]
    fn test_get_version_error() {
        let hana =
            instance(ScriptedRunner::returning(0, "Output text\n  versionn:  1.2.3.4.5\nline2"));
        let err = hana.get_version().unwrap_err();
        assert!(matches!(err, HanaError::VersionNotFound));
        assert!(err.message().contains("Version pattern not found in command output"));
    }

    #[test]
    fn test_start_stop() {
        let hana = instance(ScriptedRunner::default());
        hana.start().unwrap();
        hana.stop().unwrap();
        assert_eq!(hana.runner().calls(), vec![admin_call("HDB start"), admin_call("HDB stop")]);
    }

    #[test]
    fn test_start_error_propagates() {
        let hana = instance(ScriptedRunner::returning(1, ""));
        let err = hana.start().unwrap_err();
        assert!(matches!(err, HanaError::CommandFailed { .. }));
    }

    #[test]
    fn test_get_sr_state_primary() {
        let hana = instance(ScriptedRunner::returning(0, "online: true\nmode: primary\n"));
        assert_eq!(hana.get_sr_state().unwrap(), SrState::Primary);
        assert_eq!(hana.runner().calls(), vec![admin_call("hdbnsutil -sr_state")]);
    }

    #[test]
    fn test_get_sr_state_secondary() {
        for mode in ["sync", "syncmem", "async"] {
            let output = format!("online: true\nmode: {mode}\noperation mode: logreplay\n");
            let hana = instance(ScriptedRunner::returning(0, &output));
            assert_eq!(hana.get_sr_state().unwrap(), SrState::Secondary, "mode {mode}");
        }
    }

    #[test]
    fn test_get_sr_state_disabled() {
        let hana = instance(ScriptedRunner::returning(
            0,
            "online: true\nmode: none\n\nthis system is not a system replication site\n",
        ));
        assert_eq!(hana.get_sr_state().unwrap(), SrState::Disabled);
    }

    #[test]
    fn test_get_sr_state_primary_wins_tie() {
        let hana = instance(ScriptedRunner::returning(0, "mode: sync\nmode: primary\n"));
        assert_eq!(hana.get_sr_state().unwrap(), SrState::Primary);
    }

    #[test]
    fn test_get_sr_state_case_insensitive() {
        let hana = instance(ScriptedRunner::returning(0, "Mode: PRIMARY\n"));
        assert_eq!(hana.get_sr_state().unwrap(), SrState::Primary);
    }

    #[test]
    fn test_get_sr_state_command_error() {
        let hana = instance(ScriptedRunner::returning(1, ""));
        assert!(matches!(hana.get_sr_state().unwrap_err(), HanaError::CommandFailed { .. }));
    }

    #[test]
    fn test_sr_enable_disable() {
        let hana = instance(ScriptedRunner::default());
        hana.sr_enable_primary("test").unwrap();
        hana.sr_disable_primary().unwrap();
        assert_eq!(
            hana.runner().calls(),
            vec![
                admin_call("hdbnsutil -sr_enable --name=test"),
                admin_call("hdbnsutil -sr_disable"),
            ]
        );
    }

    #[test]
    fn test_sr_register_unregister() {
        let hana = instance(ScriptedRunner::default());
        hana.sr_register_secondary("test", "host", "00", "sync", "ops").unwrap();
        hana.sr_unregister_secondary("test").unwrap();
        assert_eq!(
            hana.runner().calls(),
            vec![
                admin_call(
                    "hdbnsutil -sr_register --name=test --remoteHost=host \
                     --remoteInstance=00 --replicationMode=sync --operationMode=ops"
                ),
                admin_call("hdbnsutil -sr_unregister --name=test"),
            ]
        );
    }

    #[test]
    fn test_sr_cleanup() {
        let hana = instance(ScriptedRunner::default());
        hana.sr_cleanup(false).unwrap();
        hana.sr_cleanup(true).unwrap();
        assert_eq!(
            hana.runner().calls(),
            vec![
                admin_call("hdbnsutil -sr_cleanup"),
                admin_call("hdbnsutil -sr_cleanup --force"),
            ]
        );
    }

    #[test]
    fn test_check_user_key() {
        let hana = instance(ScriptedRunner::returning(0, "KEY key"));
        assert!(hana.check_user_key("key").unwrap());
        assert_eq!(hana.runner().calls(), vec![admin_call("hdbuserstore list key")]);
    }

    #[test]
    fn test_check_user_key_error() {
        let hana = instance(ScriptedRunner::returning(1, ""));
        assert!(!hana.check_user_key("key").unwrap());
    }

    #[test]
    fn test_check_user_key_environment_error_propagates() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let hana = instance(ScriptedRunner::failing(err.into()));
        assert!(matches!(hana.check_user_key("key").unwrap_err(), HanaError::Environment(_)));
    }

    #[test]
    fn test_create_user_key() {
        let hana = instance(ScriptedRunner::default());
        hana.create_user_key("key", "envi", "user", "pass", None).unwrap();
        hana.create_user_key("key", "envi", "user", "pass", Some("db")).unwrap();
        assert_eq!(
            hana.runner().calls(),
            vec![
                admin_call("hdbuserstore set key envi user pass"),
                admin_call("hdbuserstore set key envi@db user pass"),
            ]
        );
    }

    #[test]
    fn test_create_backup() {
        let hana = instance(ScriptedRunner::default());
        hana.create_backup("key", "pass", "db", "backup").unwrap();
        assert_eq!(
            hana.runner().calls(),
            vec![admin_call(
                "hdbsql -U key -d db -p pass \
                 \\\"BACKUP DATA FOR FULL SYSTEM USING FILE ('backup')\\\""
            )]
        );
    }

    #[test]
    fn test_sr_state_serialization() {
        assert_eq!(serde_json::to_string(&SrState::Primary).unwrap(), r#""primary""#);
        assert_eq!(SrState::Secondary.to_string(), "secondary");
    }
}
