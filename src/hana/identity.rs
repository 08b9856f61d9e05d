//! Instance Identity
//!
//! The (system id, instance number, password) triple that every
//! instance-scoped command is derived from.

use std::fmt;

use serde_json::Value;

use crate::error::{HanaError, Result};

const NOT_TEXT: &str = "provided sid, inst and password parameters must be str type";

/// Identity of a managed HANA instance
///
/// Read-only once constructed. The password is never included in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct InstanceIdentity {
    sid: String,
    inst: String,
    password: String,
}

impl InstanceIdentity {
    /// Create an identity from text fields
    pub fn new(sid: impl Into<String>, inst: impl Into<String>, password: impl Into<String>) -> Self {
        Self { sid: sid.into(), inst: inst.into(), password: password.into() }
    }

    /// Create an identity from loosely typed values (e.g. a JSON profile)
    ///
    /// Fails with [`HanaError::InvalidIdentity`] unless all three values are strings.
    pub fn from_values(sid: &Value, inst: &Value, password: &Value) -> Result<Self> {
        match (sid.as_str(), inst.as_str(), password.as_str()) {
            (Some(sid), Some(inst), Some(password)) => Ok(Self::new(sid, inst, password)),
            _ => Err(HanaError::invalid_identity(NOT_TEXT)),
        }
    }

    /// System id as provided
    #[must_use]
    pub fn sid(&self) -> &str {
        &self.sid
    }

    /// System id in upper case, as used in installation paths
    #[must_use]
    pub fn sid_upper(&self) -> String {
        self.sid.to_uppercase()
    }

    /// Instance number
    #[must_use]
    pub fn instance(&self) -> &str {
        &self.inst
    }

    /// Administrative password
    ///
    /// WARNING: Sensitive data, do not log or include in error messages
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// OS user that owns the instance (`<sid>adm`)
    #[must_use]
    pub fn admin_user(&self) -> String {
        format!("{}adm", self.sid.to_lowercase())
    }

    /// Name of the daemon process of a running instance
    #[must_use]
    pub fn process_name(&self) -> String {
        format!("hdb.sap{}_HDB{}", self.sid_upper(), self.inst)
    }
}

impl fmt::Debug for InstanceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceIdentity")
            .field("sid", &self.sid)
            .field("inst", &self.inst)
            .field("password", &"<redacted>")
            .finish()
    }
}
