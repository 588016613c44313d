use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// What the caller hands in when opening the screen: the RPC identifier and
/// any prior parameter values, index-aligned to the RPC's hints.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub rpc: String,
    pub values: Vec<String>,
}

impl PromptRequest {
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut it = args.iter();
        let rpc = it
            .next()
            .cloned()
            .ok_or_else(|| anyhow!("usage: api-prompt <rpc-name> [VALUE]..."))?;
        Ok(Self {
            rpc,
            values: it.cloned().collect(),
        })
    }
}

/// Final snapshot handed back to the caller on confirmation.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PromptResult {
    pub rpc: String,
    pub values: Vec<String>,
}

/// Envelope printed to stdout once the terminal is restored. `ok` is the
/// accepted/not-accepted signal; a cancelled envelope carries no data.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PromptResult>,
}

impl Envelope {
    pub fn result(data: PromptResult) -> Self {
        Self {
            ok: true,
            kind: "result",
            data: Some(data),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            ok: false,
            kind: "cancelled",
            data: None,
        }
    }
}

/// Display preferences, read once at open time. Cosmetic only.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    // Immersive chrome when true, titled header bar when false.
    #[serde(default = "default_true")]
    pub fullscreen: bool,
    #[serde(default = "default_true")]
    pub analytics: bool,
    #[serde(default)]
    pub theme: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fullscreen: true,
            analytics: true,
            theme: None,
        }
    }
}

fn default_true() -> bool {
    true
}
