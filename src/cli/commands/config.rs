//! elecdex config - Show the effective configuration

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{self, robot_ok};
use crate::config::Config;
use crate::error::{ElecError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Dotted key to show (e.g. `search.debounce_ms`); omit for everything
    pub key: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    match &args.key {
        None => emit_config(ctx),
        Some(key) => get_key(ctx, key),
    }
}

fn emit_config(ctx: &AppContext) -> Result<()> {
    if ctx.robot_mode {
        return output::emit_json(&robot_ok(&ctx.config));
    }

    let rendered = toml::to_string_pretty(&ctx.config)
        .map_err(|err| ElecError::Config(format!("render config: {err}")))?;
    println!("{}", rendered.trim_end());
    Ok(())
}

fn get_key(ctx: &AppContext, key: &str) -> Result<()> {
    let value = config_value_at(&ctx.config, key)?;
    if ctx.robot_mode {
        return output::emit_json(&robot_ok(serde_json::json!({ "key": key, "value": value })));
    }
    println!("{}", format_value(&value));
    Ok(())
}

fn config_value_at(config: &Config, key: &str) -> Result<toml::Value> {
    let doc = toml::Value::try_from(config)
        .map_err(|err| ElecError::Config(format!("serialize config: {err}")))?;
    get_path(&doc, key)
}

fn get_path(doc: &toml::Value, key: &str) -> Result<toml::Value> {
    let mut current = doc;
    for part in key.split('.') {
        current = current
            .get(part)
            .ok_or_else(|| ElecError::Config(format!("unknown key: {key}")))?;
    }
    Ok(current.clone())
}

fn format_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Table(_) => toml::to_string_pretty(value)
            .unwrap_or_else(|_| value.to_string())
            .trim_end()
            .to_string(),
        other => other.to_string(),
    }
}
