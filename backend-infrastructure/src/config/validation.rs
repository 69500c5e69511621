use anyhow::{anyhow, Result};

pub fn validate_port(port: u16) -> Result<()> {
    if port == 0 {
        return Err(anyhow!("port must be greater than 0"));
    }
    Ok(())
}

pub fn validate_path(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{} must not be empty", name));
    }
    Ok(())
}
