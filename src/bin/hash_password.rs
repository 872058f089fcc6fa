//! Print an argon2 PHC hash for `ADMIN_PASSWORD_HASH`.
//!
//! Usage: `hash_password <password>`, or pipe the password on stdin.
use anyhow::{Context, Result, bail};
use newsroom_core::infrastructure::security::password::hash_blocking;
use std::io::{self, BufRead};

fn main() -> Result<()> {
    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_owned()
        }
    };

    if password.is_empty() {
        bail!("password must not be empty");
    }

    let hash = hash_blocking(&password)?;
    println!("{hash}");
    Ok(())
}
